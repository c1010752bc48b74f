//! Drag-and-drop transitions over a [`FieldLayout`].
//!
//! Every function here takes the current layout and returns a
//! [`Transition`] holding the next layout. Invalid drops are never errors:
//! they come back as [`Outcome::Rejected`] with the layout untouched.

use crate::field::{SlotPosition, truncate_label};
use crate::layout::FieldLayout;
use log::debug;
use serde::{Deserialize, Serialize};

/// Names the field picked up by a drag. Carries nothing but the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragToken {
    key: String,
}

impl DragToken {
    /// A token straight from the transfer medium, unchecked. Drops made with
    /// a key that no longer exists are rejected.
    pub fn from_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    UnknownField,
    NotPlaced,
    StaticField,
    AlreadyUnplaced,
    StaticOccupant,
    NotRenameable,
}

impl Rejection {
    pub fn as_str(&self) -> &str {
        match self {
            Rejection::UnknownField => "field not found",
            Rejection::NotPlaced => "field is not in the grid",
            Rejection::StaticField => "static fields stay in the grid",
            Rejection::AlreadyUnplaced => "field is already in the unplaced pool",
            Rejection::StaticOccupant => "slot holds a static field",
            Rejection::NotRenameable => "only unplaced fields can be renamed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub layout: FieldLayout,
    pub outcome: Outcome,
    /// Set by a rename whose input ran past the label limit.
    pub limit_reached: bool,
}

impl Transition {
    fn applied(layout: FieldLayout) -> Self {
        Self {
            layout,
            outcome: Outcome::Applied,
            limit_reached: false,
        }
    }

    fn rejected(layout: &FieldLayout, reason: Rejection) -> Self {
        debug!("placement rejected: {}", reason.as_str());
        Self {
            layout: layout.clone(),
            outcome: Outcome::Rejected(reason),
            limit_reached: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    DropToUnplaced(DragToken),
    DropToPlaced(DragToken, SlotPosition),
    RenameCustomField { key: String, label: String },
}

/// Applies any operation. Lets callers replay a recorded sequence.
pub fn apply(layout: &FieldLayout, operation: &Operation) -> Transition {
    match operation {
        Operation::DropToUnplaced(token) => drop_to_unplaced(layout, token),
        Operation::DropToPlaced(token, position) => drop_to_placed(layout, token, *position),
        Operation::RenameCustomField { key, label } => rename_custom_field(layout, key, label),
    }
}

/// Starts a drag. Nothing changes; `None` when the key is in neither
/// partition.
pub fn begin_drag(layout: &FieldLayout, key: &str) -> Option<DragToken> {
    layout.locate(key).map(|_| DragToken::from_key(key))
}

pub fn drop_to_unplaced(layout: &FieldLayout, token: &DragToken) -> Transition {
    let key = token.key();
    if layout.unplaced().contains_key(key) {
        return Transition::rejected(layout, Rejection::AlreadyUnplaced);
    }
    let Some(field) = layout.placed().get(key) else {
        return Transition::rejected(layout, Rejection::NotPlaced);
    };
    if field.is_static() {
        return Transition::rejected(layout, Rejection::StaticField);
    }

    let moved = field.to_unplaced();
    let mut next = layout.clone();
    next.placed_mut().shift_remove(key);
    next.unplaced_mut().insert(key.to_string(), moved);

    debug!("moved '{}' to the unplaced pool", key);
    Transition::applied(next)
}

pub fn drop_to_placed(layout: &FieldLayout, token: &DragToken, target: SlotPosition) -> Transition {
    let key = token.key();
    let (incoming, from_grid) = match (layout.placed().get(key), layout.unplaced().get(key)) {
        (Some(field), _) => (field, true),
        (None, Some(field)) => (field, false),
        (None, None) => return Transition::rejected(layout, Rejection::UnknownField),
    };
    let occupant = layout.occupant(target);

    if !from_grid && occupant.is_some_and(|f| f.is_static()) {
        return Transition::rejected(layout, Rejection::StaticOccupant);
    }

    let mut next = layout.clone();
    next.placed_mut().insert(key.to_string(), incoming.to_placed(target));
    if !from_grid {
        next.unplaced_mut().shift_remove(key);
    }

    if let Some(occupant) = occupant.filter(|f| f.key != key) {
        match incoming.position.filter(|_| from_grid) {
            Some(former) => {
                next.placed_mut()
                    .insert(occupant.key.clone(), occupant.to_placed(former));
                debug!("swapped '{}' into slot {} and '{}' into slot {}", key, target, occupant.key, former);
            }
            None => {
                next.placed_mut().shift_remove(&occupant.key);
                next.unplaced_mut()
                    .insert(occupant.key.clone(), occupant.to_unplaced());
                debug!("placed '{}' in slot {}, evicted '{}'", key, target, occupant.key);
            }
        }
    } else {
        debug!("placed '{}' in slot {}", key, target);
    }

    Transition::applied(next)
}

/// Relabels a field waiting in the unplaced pool. The label is cut to the
/// limit; `limit_reached` reports whether that happened.
pub fn rename_custom_field(layout: &FieldLayout, key: &str, label: &str) -> Transition {
    let Some(field) = layout.unplaced().get(key) else {
        return Transition::rejected(layout, Rejection::NotRenameable);
    };

    let (label, truncated) = truncate_label(label);
    let mut renamed = field.clone();
    renamed.custom_label = Some(label);

    let mut next = layout.clone();
    next.unplaced_mut().insert(key.to_string(), renamed);

    let mut transition = Transition::applied(next);
    transition.limit_reached = truncated;
    transition
}
