use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest custom label a field can carry, counted in characters.
pub const CUSTOM_LABEL_LIMIT: usize = 20;

/// Number of slots in the placement grid.
pub const SLOT_COUNT: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldCategory {
    Static,
    Reusable,
    Custom,
}

impl FieldCategory {
    pub fn as_str(&self) -> &str {
        match self {
            FieldCategory::Static => "static",
            FieldCategory::Reusable => "reusable",
            FieldCategory::Custom => "custom",
        }
    }

    /// Whether fields of this category carry a merchant-editable label.
    pub fn has_custom_label(&self) -> bool {
        matches!(self, FieldCategory::Reusable | FieldCategory::Custom)
    }
}

/// Which partition owns a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldLocation {
    #[serde(rename = "main")]
    Unplaced,
    #[serde(rename = "selectedField")]
    Placed,
}

impl FieldLocation {
    pub fn as_str(&self) -> &str {
        match self {
            FieldLocation::Unplaced => "unplaced",
            FieldLocation::Placed => "placed",
        }
    }
}

/// A slot index in the placement grid, always within `1..=SLOT_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SlotPosition(u8);

impl SlotPosition {
    pub const FIRST: SlotPosition = SlotPosition(1);

    pub fn new(index: u8) -> Option<Self> {
        (1..=SLOT_COUNT).contains(&index).then_some(Self(index))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = SlotPosition> {
        (1..=SLOT_COUNT).map(SlotPosition)
    }
}

impl TryFrom<u8> for SlotPosition {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        SlotPosition::new(index)
            .ok_or_else(|| format!("slot position {} outside 1..={}", index, SLOT_COUNT))
    }
}

impl From<SlotPosition> for u8 {
    fn from(position: SlotPosition) -> u8 {
        position.0
    }
}

impl fmt::Display for SlotPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(rename = "keyName")]
    pub key: String,
    pub name: String,
    pub category: FieldCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_label: Option<String>,
    pub location: FieldLocation,
    #[serde(default)]
    pub position: Option<SlotPosition>,
}

impl Field {
    /// Builds an unplaced field. Reusable and custom fields start with an
    /// empty label.
    pub fn new(key: impl Into<String>, name: impl Into<String>, category: FieldCategory) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            category,
            custom_label: category.has_custom_label().then(String::new),
            location: FieldLocation::Unplaced,
            position: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let (label, _) = truncate_label(&label.into());
        self.custom_label = Some(label);
        self
    }

    pub fn placed_at(mut self, position: SlotPosition) -> Self {
        self.location = FieldLocation::Placed;
        self.position = Some(position);
        self
    }

    pub fn is_static(&self) -> bool {
        self.category == FieldCategory::Static
    }

    pub fn is_placed(&self) -> bool {
        self.location == FieldLocation::Placed
    }

    /// Copy of this field moved into the grid at `position`.
    pub(crate) fn to_placed(&self, position: SlotPosition) -> Self {
        self.clone().placed_at(position)
    }

    /// Copy of this field moved out of the grid.
    pub(crate) fn to_unplaced(&self) -> Self {
        Self {
            location: FieldLocation::Unplaced,
            position: None,
            ..self.clone()
        }
    }

    /// Text shown on the field's card: `label [name]` for labelled
    /// categories, the plain name for static fields.
    pub fn display_name(&self) -> String {
        match (&self.category, &self.custom_label) {
            (FieldCategory::Static, _) => self.name.clone(),
            (_, Some(label)) => format!("{} [{}]", label, self.name),
            (_, None) => format!(" [{}]", self.name),
        }
    }
}

/// Cuts `input` to the first `CUSTOM_LABEL_LIMIT` characters. The flag is
/// true when something was cut off.
pub fn truncate_label(input: &str) -> (String, bool) {
    match input.char_indices().nth(CUSTOM_LABEL_LIMIT) {
        Some((byte_index, _)) => (input[..byte_index].to_string(), true),
        None => (input.to_string(), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_position_bounds() {
        assert!(SlotPosition::new(0).is_none());
        assert!(SlotPosition::new(9).is_none());
        assert_eq!(SlotPosition::new(8).map(|p| p.get()), Some(8));
        assert_eq!(SlotPosition::all().count(), 8);
        assert_eq!(SlotPosition::new(1), Some(SlotPosition::FIRST));
    }

    #[test]
    fn truncate_counts_characters() {
        let (label, cut) = truncate_label("ÄÖÜäöüßÄÖÜäöüßÄÖÜäöüß");
        assert!(cut);
        assert_eq!(label.chars().count(), 20);

        let (label, cut) = truncate_label("Gift note");
        assert!(!cut);
        assert_eq!(label, "Gift note");
    }

    #[test]
    fn display_name_by_category() {
        let email = Field::new("email", "Email", FieldCategory::Static);
        assert_eq!(email.display_name(), "Email");

        let note = Field::new("custom_1", "Custom field", FieldCategory::Custom).with_label("Gift note");
        assert_eq!(note.display_name(), "Gift note [Custom field]");
    }
}
