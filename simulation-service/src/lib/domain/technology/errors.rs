use thiserror::Error;

/// Error for technology catalog access
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Technology catalog unavailable: {0}")]
    Unavailable(String),
}

/// Top-level error for technology scoring operations
#[derive(Debug, Clone, Error)]
pub enum TechnologyError {
    /// Min/max statistics are undefined over an empty catalog.
    #[error("Technology catalog is empty")]
    EmptyCatalog,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
