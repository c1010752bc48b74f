use crate::catalog::FormCatalog;
use crate::errors::{CatalogError, CatalogResult};
use log::debug;
use std::fs;
use std::path::Path;

pub fn save_catalog(catalog: &FormCatalog, path: impl AsRef<Path>) -> CatalogResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    debug!("saved catalog to {}", path.display());
    Ok(())
}

/// Reads a catalog and checks it before handing it out.
pub fn load_catalog(path: impl AsRef<Path>) -> CatalogResult<FormCatalog> {
    let json = fs::read_to_string(path)?;
    let catalog: FormCatalog = serde_json::from_str(&json)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Creates the catalog file for a store. A store is activated once.
pub fn init_catalog(store_name: &str, path: impl AsRef<Path>) -> CatalogResult<FormCatalog> {
    let path = path.as_ref();
    if path.exists() {
        return Err(CatalogError::StoreExists(path.to_path_buf()));
    }
    let catalog = FormCatalog::new(store_name);
    save_catalog(&catalog, path)?;
    Ok(catalog)
}
