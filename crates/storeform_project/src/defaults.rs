use storeform_fields::{Field, FieldCategory, FieldLayout, LayoutResult, SlotPosition};

/// Fields a new form starts with: the email field pinned to the first slot,
/// customer fields the merchant can label, and three free custom fields.
pub fn default_fields() -> Vec<Field> {
    let mut fields =
        vec![Field::new("email", "Email", FieldCategory::Static).placed_at(SlotPosition::FIRST)];
    for (key, name) in [
        ("first_name", "First name"),
        ("last_name", "Last name"),
        ("phone", "Phone"),
        ("birthday", "Birthday"),
        ("company", "Company"),
    ] {
        fields.push(Field::new(key, name, FieldCategory::Reusable).with_label(name));
    }
    for n in 1..=3 {
        fields.push(Field::new(
            format!("custom_{n}"),
            format!("Custom field {n}"),
            FieldCategory::Custom,
        ));
    }
    fields
}

pub fn default_layout() -> LayoutResult<FieldLayout> {
    FieldLayout::from_fields(default_fields())
}
