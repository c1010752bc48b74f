use proptest::prelude::*;
use std::collections::BTreeSet;
use storeform_fields::placement;
use storeform_fields::{
    CUSTOM_LABEL_LIMIT, DragToken, Field, FieldCategory, FieldLayout, FieldPlacementStore,
    Operation, SlotPosition,
};

const KEYS: [&str; 7] = ["email", "name", "phone", "company", "custom_1", "custom_2", "ghost"];

fn seed_layout() -> FieldLayout {
    let slot = |i| SlotPosition::new(i).unwrap();
    FieldLayout::from_fields(vec![
        Field::new("email", "Email", FieldCategory::Static).placed_at(slot(1)),
        Field::new("name", "Name", FieldCategory::Static).placed_at(slot(4)),
        Field::new("phone", "Phone", FieldCategory::Reusable)
            .with_label("Phone")
            .placed_at(slot(2)),
        Field::new("company", "Company", FieldCategory::Reusable).with_label("Company"),
        Field::new("custom_1", "Custom field 1", FieldCategory::Custom),
        Field::new("custom_2", "Custom field 2", FieldCategory::Custom),
    ])
    .unwrap()
}

fn arb_key() -> impl Strategy<Value = String> {
    prop::sample::select(KEYS.to_vec()).prop_map(str::to_string)
}

fn arb_slot() -> impl Strategy<Value = SlotPosition> {
    (1u8..=8).prop_map(|i| SlotPosition::new(i).unwrap())
}

fn arb_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        arb_key().prop_map(|k| Operation::DropToUnplaced(DragToken::from_key(k))),
        (arb_key(), arb_slot()).prop_map(|(k, p)| Operation::DropToPlaced(DragToken::from_key(k), p)),
        (arb_key(), "[a-zA-Z ]{0,30}")
            .prop_map(|(key, label)| Operation::RenameCustomField { key, label }),
    ]
}

fn key_set(layout: &FieldLayout) -> BTreeSet<String> {
    layout.keys().map(str::to_string).collect()
}

proptest! {
    #[test]
    fn operations_preserve_invariants(ops in prop::collection::vec(arb_operation(), 0..40)) {
        let seed = seed_layout();
        let keys = key_set(&seed);
        let mut store = FieldPlacementStore::new(seed.clone());

        for op in &ops {
            store.apply(op);
            let layout = store.layout();

            prop_assert!(layout.validate().is_ok());
            prop_assert_eq!(layout.field_count(), seed.field_count());
            prop_assert_eq!(key_set(layout), keys.clone());
            prop_assert!(layout.unplaced().values().all(|f| !f.is_static()));
            prop_assert!(layout.unplaced().values().all(|f| f.position.is_none()));
            prop_assert!(layout.placed().values().all(|f| f.position.is_some()));
        }
    }

    #[test]
    fn rejected_transitions_leave_layout_untouched(ops in prop::collection::vec(arb_operation(), 0..40)) {
        let mut layout = seed_layout();
        for op in &ops {
            let t = placement::apply(&layout, op);
            if !t.outcome.is_applied() {
                prop_assert_eq!(&t.layout, &layout);
            }
            layout = t.layout;
        }
    }

    #[test]
    fn rename_is_truncating_and_idempotent(label in "\\PC{0,40}") {
        let layout = seed_layout();
        let first = placement::rename_custom_field(&layout, "custom_1", &label);
        let stored = first.layout.unplaced()["custom_1"].custom_label.clone().unwrap();

        prop_assert_eq!(first.limit_reached, label.chars().count() > CUSTOM_LABEL_LIMIT);
        prop_assert_eq!(stored.clone(), label.chars().take(CUSTOM_LABEL_LIMIT).collect::<String>());

        let second = placement::rename_custom_field(&first.layout, "custom_1", &stored);
        prop_assert!(!second.limit_reached);
        prop_assert_eq!(second.layout, first.layout);
    }
}
