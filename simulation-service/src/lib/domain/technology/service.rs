use std::sync::Arc;

use crate::domain::technology::errors::TechnologyError;
use crate::domain::technology::models::NormalizationStats;
use crate::domain::technology::models::NormalizedTechnology;
use crate::domain::technology::models::TechnologyMetrics;
use crate::domain::technology::ports::TechnologyCatalog;
use crate::domain::technology::scoring;
use crate::domain::technology::scoring::ScoringWeights;

/// Domain service ranking renewable technologies.
///
/// Statistics are recomputed from a fresh catalog snapshot on every call and
/// never cached, so scores always reflect the catalog the caller would see.
pub struct TechnologyService<C>
where
    C: TechnologyCatalog,
{
    catalog: Arc<C>,
    weights: ScoringWeights,
}

impl<C> TechnologyService<C>
where
    C: TechnologyCatalog,
{
    /// Create a service with the default equal-weight scoring policy.
    pub fn new(catalog: Arc<C>) -> Self {
        Self::with_weights(catalog, ScoringWeights::default())
    }

    /// Create a service with a configured weighting policy.
    pub fn with_weights(catalog: Arc<C>, weights: ScoringWeights) -> Self {
        Self { catalog, weights }
    }

    /// The raw catalog, unranked.
    pub async fn list_technologies(&self) -> Result<Vec<TechnologyMetrics>, TechnologyError> {
        Ok(self.catalog.fetch_all().await?)
    }

    /// Min/max statistics over the current catalog snapshot.
    ///
    /// # Errors
    /// * `EmptyCatalog` - The catalog holds no technologies
    pub async fn normalization_stats(&self) -> Result<NormalizationStats, TechnologyError> {
        let snapshot = self.catalog.fetch_all().await?;
        scoring::compute_stats(&snapshot)
    }

    /// Every technology normalized and scored, preserving catalog order.
    ///
    /// An empty catalog yields an empty list; statistics are simply never
    /// computed for it.
    pub async fn list_normalized(&self) -> Result<Vec<NormalizedTechnology>, TechnologyError> {
        let snapshot = self.catalog.fetch_all().await?;
        if snapshot.is_empty() {
            return Ok(Vec::new());
        }

        let stats = scoring::compute_stats(&snapshot)?;

        Ok(snapshot
            .iter()
            .map(|tech| scoring::normalize_technology(tech, &stats, &self.weights))
            .collect())
    }

    /// The highest-scoring technology, or `None` for an empty catalog.
    ///
    /// Ties resolve to the earliest catalog entry.
    pub async fn recommend_technology(
        &self,
    ) -> Result<Option<NormalizedTechnology>, TechnologyError> {
        let ranked = self.list_normalized().await?;

        let mut best: Option<NormalizedTechnology> = None;
        for candidate in ranked {
            match &best {
                Some(current) if candidate.score <= current.score => {}
                _ => best = Some(candidate),
            }
        }

        if let Some(recommended) = &best {
            tracing::debug!(technology = %recommended.name, score = recommended.score, "technology recommended");
        }

        Ok(best)
    }
}
