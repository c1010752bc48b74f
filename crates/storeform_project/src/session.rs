use crate::catalog::{FormCatalog, FormId};
use crate::errors::{CatalogError, CatalogResult};
use log::debug;
use storeform_fields::FieldPlacementStore;

/// One form opened for editing. The placement store is seeded from the
/// saved layout every time a form is opened.
#[derive(Debug, Clone)]
pub struct FormSession {
    form_id: FormId,
    pub form_name: String,
    pub fields: FieldPlacementStore,
}

impl FormSession {
    pub fn open(catalog: &FormCatalog, form_id: FormId) -> CatalogResult<Self> {
        let record = catalog
            .get(form_id)
            .ok_or(CatalogError::FormNotFound(form_id))?;
        debug!("opened form {} with {} fields", form_id, record.layout.field_count());
        Ok(Self {
            form_id,
            form_name: record.name.clone(),
            fields: FieldPlacementStore::new(record.layout.clone()),
        })
    }

    pub fn form_id(&self) -> FormId {
        self.form_id
    }

    /// Writes the form name and a snapshot of the layout back to the catalog.
    pub fn save(&self, catalog: &mut FormCatalog) -> CatalogResult<()> {
        catalog.save_form(self.form_id, &self.form_name, self.fields.snapshot())
    }
}
