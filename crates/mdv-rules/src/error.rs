use mdv_catalog::CatalogError;
use thiserror::Error;

/// Errors surfaced to callers of the rule and validation services.
///
/// Configuration gaps and per-table failures never appear here; they degrade
/// to a fallback or an empty result. Only a store that cannot answer at all
/// produces an error.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("service unavailable: {message}")]
    StoreUnavailable { message: String },
}

impl CoreError {
    pub(crate) fn from_catalog(error: &CatalogError) -> Self {
        Self::StoreUnavailable {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
