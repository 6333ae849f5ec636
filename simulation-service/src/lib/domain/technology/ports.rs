use async_trait::async_trait;

use crate::domain::technology::errors::CatalogError;
use crate::domain::technology::models::TechnologyMetrics;

/// Source of the technology catalog.
///
/// `fetch_all` returns the current snapshot; callers derive statistics from
/// exactly the snapshot they received, so a catalog mutation between calls
/// can never mix with stale statistics.
#[async_trait]
pub trait TechnologyCatalog: Send + Sync + 'static {
    /// Retrieve the full catalog.
    ///
    /// # Errors
    /// * `Unavailable` - Catalog could not be read
    async fn fetch_all(&self) -> Result<Vec<TechnologyMetrics>, CatalogError>;
}
