use crate::errors::{CatalogError, CatalogResult};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use storeform_fields::FieldLayout;

pub type FormId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Active,
    Archived,
}

impl FormStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormStatus::Active => "active",
            FormStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormRecord {
    pub id: FormId,
    pub name: String,
    #[serde(default)]
    pub status: FormStatus,
    pub layout: FieldLayout,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl FormRecord {
    pub fn is_archived(&self) -> bool {
        self.status == FormStatus::Archived
    }
}

/// Archive or recover, the two status changes a merchant confirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    Archive,
    Recover,
}

impl StatusAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusAction::Archive => "archive",
            StatusAction::Recover => "recover",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            StatusAction::Archive => "archived",
            StatusAction::Recover => "recovered",
        }
    }

    fn target(&self) -> FormStatus {
        match self {
            StatusAction::Archive => FormStatus::Archived,
            StatusAction::Recover => FormStatus::Active,
        }
    }
}

/// A status change waiting for confirmation. Dropping it cancels.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending action does nothing until confirmed"]
pub struct PendingAction {
    pub form_id: FormId,
    pub action: StatusAction,
}

impl PendingAction {
    pub fn question(&self) -> String {
        format!("Are you sure you want to {} this form?", self.action.as_str())
    }
}

/// All forms belonging to one store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormCatalog {
    pub store_name: String,
    #[serde(default)]
    pub forms: Vec<FormRecord>,
    #[serde(default)]
    pub selected_form_id: Option<FormId>,
    #[serde(default = "first_id")]
    next_id: FormId,
}

fn first_id() -> FormId {
    1
}

impl FormCatalog {
    pub fn new(store_name: impl Into<String>) -> Self {
        Self {
            store_name: store_name.into(),
            forms: Vec::new(),
            selected_form_id: None,
            next_id: first_id(),
        }
    }

    pub fn create_form(&mut self, name: &str, layout: FieldLayout) -> CatalogResult<FormId> {
        let name = normalize_name(name)?;
        layout.validate()?;

        let id = self
            .next_id
            .max(self.forms.iter().map(|f| f.id + 1).max().unwrap_or(1));
        self.next_id = id + 1;
        self.forms.push(FormRecord {
            id,
            name,
            status: FormStatus::Active,
            layout,
            created_at: Utc::now(),
            updated_at: None,
        });
        info!("created form {} in store '{}'", id, self.store_name);
        Ok(id)
    }

    /// Checks the rules the catalog's own operations keep: unique ids and a
    /// live form that exists and is active.
    pub fn validate(&self) -> CatalogResult<()> {
        let mut seen = HashSet::new();
        for form in &self.forms {
            if !seen.insert(form.id) {
                return Err(CatalogError::DuplicateFormId(form.id));
            }
            form.layout.validate()?;
        }
        if let Some(id) = self.selected_form_id {
            if self.require(id)?.is_archived() {
                return Err(CatalogError::FormArchived(id));
            }
        }
        Ok(())
    }

    pub fn get(&self, id: FormId) -> Option<&FormRecord> {
        self.forms.iter().find(|f| f.id == id)
    }

    pub fn get_mut(&mut self, id: FormId) -> Option<&mut FormRecord> {
        self.forms.iter_mut().find(|f| f.id == id)
    }

    fn require(&self, id: FormId) -> CatalogResult<&FormRecord> {
        self.get(id).ok_or(CatalogError::FormNotFound(id))
    }

    pub fn active_forms(&self) -> Vec<&FormRecord> {
        self.forms.iter().filter(|f| !f.is_archived()).collect()
    }

    pub fn archived_forms(&self) -> Vec<&FormRecord> {
        self.forms.iter().filter(|f| f.is_archived()).collect()
    }

    pub fn selected_form(&self) -> Option<&FormRecord> {
        self.selected_form_id.and_then(|id| self.get(id))
    }

    /// Makes `id` the store's live form.
    pub fn select_form(&mut self, id: FormId) -> CatalogResult<()> {
        if self.require(id)?.is_archived() {
            return Err(CatalogError::FormArchived(id));
        }
        self.selected_form_id = Some(id);
        info!("selected form {}", id);
        Ok(())
    }

    pub fn request_status_change(
        &self,
        id: FormId,
        action: StatusAction,
    ) -> CatalogResult<PendingAction> {
        let form = self.require(id)?;
        if form.status == action.target() {
            return Err(CatalogError::StatusUnchanged(id, form.status.as_str()));
        }
        Ok(PendingAction { form_id: id, action })
    }

    /// Carries out a confirmed status change and returns the notice to show.
    pub fn confirm(&mut self, pending: PendingAction) -> CatalogResult<String> {
        let PendingAction { form_id, action } = pending;
        let form = self
            .get_mut(form_id)
            .ok_or(CatalogError::FormNotFound(form_id))?;
        if form.status == action.target() {
            return Err(CatalogError::StatusUnchanged(form_id, form.status.as_str()));
        }
        form.status = action.target();
        form.updated_at = Some(Utc::now());

        if action == StatusAction::Archive && self.selected_form_id == Some(form_id) {
            self.selected_form_id = None;
        }
        info!("form {} {}", form_id, action.past_tense());
        Ok(format!("Form {}", action.past_tense()))
    }

    /// Stores an edited name and layout snapshot.
    pub fn save_form(&mut self, id: FormId, name: &str, layout: FieldLayout) -> CatalogResult<()> {
        let name = normalize_name(name)?;
        layout.validate()?;
        let form = self.get_mut(id).ok_or(CatalogError::FormNotFound(id))?;
        form.name = name;
        form.layout = layout;
        form.updated_at = Some(Utc::now());
        info!("saved form {}", id);
        Ok(())
    }
}

fn normalize_name(name: &str) -> CatalogResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CatalogError::EmptyFormName);
    }
    Ok(name.to_string())
}
