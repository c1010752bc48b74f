use std::fmt::{self, Write};

use storeform_fields::{FieldLayout, FieldPlacementStore};
use storeform_project::FormRecord;

pub const LIMIT_NOTICE: &str = "Limit of 20 characters reached.";

pub fn form_line(form: &FormRecord, selected: bool) -> String {
    let marker = if selected { "*" } else { " " };
    format!(
        "{} {:>3}  {:<30} {:<8} {}",
        marker,
        form.id,
        form.name,
        form.status.as_str(),
        form.created_at.format("%Y-%m-%d")
    )
}

pub fn layout(layout: &FieldLayout) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_layout(&mut out, layout)?;
    Ok(out)
}

/// Slots 1..=8 first, then the unplaced pool in its stored order.
fn write_layout(out: &mut impl Write, layout: &FieldLayout) -> fmt::Result {
    writeln!(out, "Selected field area")?;
    for (position, field) in layout.slots() {
        match field {
            Some(field) => writeln!(out, "  [{}] {} ({})", position, field.display_name(), field.key)?,
            None => writeln!(out, "  [{}] -", position)?,
        }
    }
    writeln!(out, "Main area")?;
    for field in layout.unplaced().values() {
        writeln!(out, "  {} ({})", field.display_name(), field.key)?;
    }
    Ok(())
}

/// The banner under a field whose last rename was cut short.
pub fn limit_notice(store: &FieldPlacementStore, key: &str) -> Option<&'static str> {
    store.limit_reached(key).then_some(LIMIT_NOTICE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storeform_fields::{Field, FieldCategory, SlotPosition};

    #[test]
    fn renders_slots_then_pool() {
        let layout = FieldLayout::from_fields(vec![
            Field::new("email", "Email", FieldCategory::Static).placed_at(SlotPosition::FIRST),
            Field::new("custom_1", "Custom field 1", FieldCategory::Custom).with_label("Gift note"),
        ])
        .unwrap();

        let text = super::layout(&layout).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Selected field area");
        assert_eq!(lines[1], "  [1] Email (email)");
        assert_eq!(lines[2], "  [2] -");
        assert_eq!(lines[9], "Main area");
        assert_eq!(lines[10], "  Gift note [Custom field 1] (custom_1)");
    }

    #[test]
    fn limit_notice_follows_last_rename() {
        let layout = FieldLayout::from_fields(vec![Field::new(
            "custom_1",
            "Custom field 1",
            FieldCategory::Custom,
        )])
        .unwrap();
        let mut store = FieldPlacementStore::new(layout);

        store.rename_custom_field("custom_1", "This label keeps on going");
        assert_eq!(limit_notice(&store, "custom_1"), Some(LIMIT_NOTICE));

        store.rename_custom_field("custom_1", "Short");
        assert_eq!(limit_notice(&store, "custom_1"), None);
    }
}
