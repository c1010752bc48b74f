use crate::field::SlotPosition;
use crate::layout::FieldLayout;
use crate::placement::{self, DragToken, Operation, Outcome, Transition};
use std::collections::BTreeMap;

/// Holds the layout being edited and feeds drag, drop and rename events
/// through the placement transitions.
#[derive(Debug, Clone, Default)]
pub struct FieldPlacementStore {
    layout: FieldLayout,
    limit_reached: BTreeMap<String, bool>,
}

impl FieldPlacementStore {
    pub fn new(layout: FieldLayout) -> Self {
        Self {
            layout,
            limit_reached: BTreeMap::new(),
        }
    }

    /// Replaces everything with a freshly loaded layout.
    pub fn reset(&mut self, layout: FieldLayout) {
        self.layout = layout;
        self.limit_reached.clear();
    }

    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }

    pub fn snapshot(&self) -> FieldLayout {
        self.layout.clone()
    }

    pub fn into_layout(self) -> FieldLayout {
        self.layout
    }

    pub fn begin_drag(&self, key: &str) -> Option<DragToken> {
        placement::begin_drag(&self.layout, key)
    }

    pub fn drop_to_unplaced(&mut self, token: &DragToken) -> Outcome {
        let transition = placement::drop_to_unplaced(&self.layout, token);
        self.commit(transition)
    }

    pub fn drop_to_placed(&mut self, token: &DragToken, target: SlotPosition) -> Outcome {
        let transition = placement::drop_to_placed(&self.layout, token, target);
        self.commit(transition)
    }

    pub fn rename_custom_field(&mut self, key: &str, label: &str) -> Outcome {
        let transition = placement::rename_custom_field(&self.layout, key, label);
        if transition.outcome.is_applied() {
            self.limit_reached.insert(key.to_string(), transition.limit_reached);
        }
        self.commit(transition)
    }

    pub fn apply(&mut self, operation: &Operation) -> Outcome {
        match operation {
            Operation::RenameCustomField { key, label } => self.rename_custom_field(key, label),
            _ => {
                let transition = placement::apply(&self.layout, operation);
                self.commit(transition)
            }
        }
    }

    /// Whether the last rename of `key` had to be cut short.
    pub fn limit_reached(&self, key: &str) -> bool {
        self.limit_reached.get(key).copied().unwrap_or(false)
    }

    pub fn limit_reached_fields(&self) -> &BTreeMap<String, bool> {
        &self.limit_reached
    }

    fn commit(&mut self, transition: Transition) -> Outcome {
        if transition.outcome.is_applied() {
            self.layout = transition.layout;
        }
        transition.outcome
    }
}
