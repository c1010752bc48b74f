use crate::catalog::FormId;
use std::io;
use std::path::PathBuf;
use storeform_fields::LayoutError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Store already exists.")]
    StoreExists(PathBuf),

    #[error("Form {0} not found")]
    FormNotFound(FormId),

    #[error("Form id {0} is used more than once")]
    DuplicateFormId(FormId),

    #[error("Form name is required")]
    EmptyFormName,

    #[error("Form {0} is archived")]
    FormArchived(FormId),

    #[error("Form {0} is already {1}")]
    StatusUnchanged(FormId, &'static str),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
