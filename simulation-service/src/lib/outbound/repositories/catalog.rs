use async_trait::async_trait;

use crate::domain::technology::errors::CatalogError;
use crate::domain::technology::models::TechnologyMetrics;
use crate::domain::technology::ports::TechnologyCatalog;

/// In-memory technology catalog.
///
/// The snapshot is fixed at construction; `fetch_all` hands out clones so a
/// caller's snapshot can never be mutated underneath its statistics.
pub struct InMemoryTechnologyCatalog {
    technologies: Vec<TechnologyMetrics>,
}

impl InMemoryTechnologyCatalog {
    pub fn new(technologies: Vec<TechnologyMetrics>) -> Self {
        Self { technologies }
    }

    /// Catalog seeded with the reference technologies.
    pub fn with_reference_catalog() -> Self {
        let technologies = vec![
            TechnologyMetrics {
                name: "Solar".to_string(),
                co2_reduction: 100.0,
                energy_production: 3000.0,
                installation_cost: 15000.0,
                efficiency: 0.18,
            },
            TechnologyMetrics {
                name: "Wind".to_string(),
                co2_reduction: 150.0,
                energy_production: 4500.0,
                installation_cost: 20000.0,
                efficiency: 0.30,
            },
            TechnologyMetrics {
                name: "Hydro".to_string(),
                co2_reduction: 200.0,
                energy_production: 5000.0,
                installation_cost: 10000.0,
                efficiency: 0.25,
            },
        ];

        tracing::info!(count = technologies.len(), "technology catalog seeded");

        Self::new(technologies)
    }
}

#[async_trait]
impl TechnologyCatalog for InMemoryTechnologyCatalog {
    async fn fetch_all(&self) -> Result<Vec<TechnologyMetrics>, CatalogError> {
        Ok(self.technologies.clone())
    }
}
