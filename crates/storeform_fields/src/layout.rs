use crate::error::{LayoutError, LayoutResult};
use crate::field::{CUSTOM_LABEL_LIMIT, Field, FieldLocation, SlotPosition};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

pub type FieldMap = IndexMap<String, Field>;

/// The two partitions a form's fields live in: the unplaced pool and the
/// placement grid. Both keep insertion order, which is the order the pool
/// is listed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldLayout {
    #[serde(rename = "mainFields")]
    unplaced: FieldMap,
    #[serde(rename = "selectedFields")]
    placed: FieldMap,
}

#[derive(Deserialize)]
struct LayoutHelper {
    #[serde(rename = "mainFields", default)]
    unplaced: FieldMap,
    #[serde(rename = "selectedFields", default)]
    placed: FieldMap,
}

// Every deserialized layout goes through validation.
impl<'de> Deserialize<'de> for FieldLayout {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let helper = LayoutHelper::deserialize(deserializer)?;
        FieldLayout::from_parts(helper.unplaced, helper.placed).map_err(serde::de::Error::custom)
    }
}

impl FieldLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a layout from a flat list, routing each field to the partition
    /// its location names.
    pub fn from_fields(fields: impl IntoIterator<Item = Field>) -> LayoutResult<Self> {
        let mut unplaced = FieldMap::new();
        let mut placed = FieldMap::new();
        for field in fields {
            let target = match field.location {
                FieldLocation::Unplaced => &mut unplaced,
                FieldLocation::Placed => &mut placed,
            };
            if target.contains_key(&field.key) {
                return Err(LayoutError::DuplicateKey(field.key));
            }
            target.insert(field.key.clone(), field);
        }
        Self::from_parts(unplaced, placed)
    }

    pub fn from_parts(unplaced: FieldMap, placed: FieldMap) -> LayoutResult<Self> {
        let layout = Self { unplaced, placed };
        layout.validate()?;
        Ok(layout)
    }

    /// Like plain deserialization, but rule violations keep their own
    /// error variant instead of becoming a JSON error.
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        let helper: LayoutHelper = serde_json::from_str(json)?;
        Self::from_parts(helper.unplaced, helper.placed)
    }

    pub fn to_json(&self) -> LayoutResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every structural rule a layout has to satisfy.
    pub fn validate(&self) -> LayoutResult<()> {
        for (partition, expected) in [
            (&self.unplaced, FieldLocation::Unplaced),
            (&self.placed, FieldLocation::Placed),
        ] {
            for (key, field) in partition {
                if key != &field.key {
                    return Err(LayoutError::KeyMismatch(field.key.clone(), key.clone()));
                }
                if field.location != expected {
                    return Err(LayoutError::WrongLocation {
                        key: key.clone(),
                        expected,
                        found: field.location,
                    });
                }
                if field.position.is_some() != field.is_placed() {
                    return Err(LayoutError::PositionMismatch(key.clone()));
                }
                let too_long = field
                    .custom_label
                    .as_ref()
                    .is_some_and(|label| label.chars().count() > CUSTOM_LABEL_LIMIT);
                if too_long {
                    return Err(LayoutError::LabelTooLong(key.clone()));
                }
            }
        }

        if let Some(field) = self.unplaced.values().find(|f| f.is_static()) {
            return Err(LayoutError::StaticUnplaced(field.key.clone()));
        }

        if let Some(key) = self.unplaced.keys().find(|k| self.placed.contains_key(*k)) {
            return Err(LayoutError::DuplicateKey(key.clone()));
        }

        let mut taken: IndexMap<SlotPosition, &str> = IndexMap::new();
        for field in self.placed.values() {
            let Some(position) = field.position else {
                continue;
            };
            if let Some(first) = taken.insert(position, &field.key) {
                return Err(LayoutError::SlotConflict {
                    position,
                    first: first.to_string(),
                    second: field.key.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn unplaced(&self) -> &FieldMap {
        &self.unplaced
    }

    pub fn placed(&self) -> &FieldMap {
        &self.placed
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.placed.get(key).or_else(|| self.unplaced.get(key))
    }

    pub fn locate(&self, key: &str) -> Option<FieldLocation> {
        if self.placed.contains_key(key) {
            Some(FieldLocation::Placed)
        } else if self.unplaced.contains_key(key) {
            Some(FieldLocation::Unplaced)
        } else {
            None
        }
    }

    pub fn occupant(&self, position: SlotPosition) -> Option<&Field> {
        self.placed.values().find(|f| f.position == Some(position))
    }

    /// The grid as eight slots, empty ones included.
    pub fn slots(&self) -> Vec<(SlotPosition, Option<&Field>)> {
        SlotPosition::all().map(|p| (p, self.occupant(p))).collect()
    }

    pub fn field_count(&self) -> usize {
        self.unplaced.len() + self.placed.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.placed.keys().chain(self.unplaced.keys()).map(String::as_str)
    }

    pub(crate) fn unplaced_mut(&mut self) -> &mut FieldMap {
        &mut self.unplaced
    }

    pub(crate) fn placed_mut(&mut self) -> &mut FieldMap {
        &mut self.placed
    }
}
