use serde::Deserialize;
use serde::Serialize;

/// Raw metrics for one renewable technology, as delivered by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnologyMetrics {
    pub name: String,
    pub co2_reduction: f64,
    pub energy_production: f64,
    pub installation_cost: f64,
    pub efficiency: f64,
}

/// Observed min/max of one metric across a catalog snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    /// Range covering a single observation (min == max).
    pub fn of(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Widen the range to include another observation.
    pub fn expand(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }
}

/// Min/max statistics per metric over one catalog snapshot.
///
/// Valid only for the snapshot they were computed from; recompute whenever
/// the catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationStats {
    pub co2_reduction: MetricRange,
    pub energy_production: MetricRange,
    pub installation_cost: MetricRange,
    pub efficiency: MetricRange,
}

impl NormalizationStats {
    /// Stats covering a single technology (every range collapses to a point).
    pub fn of(tech: &TechnologyMetrics) -> Self {
        Self {
            co2_reduction: MetricRange::of(tech.co2_reduction),
            energy_production: MetricRange::of(tech.energy_production),
            installation_cost: MetricRange::of(tech.installation_cost),
            efficiency: MetricRange::of(tech.efficiency),
        }
    }

    /// Widen every range to include another technology's metrics.
    pub fn expand(&mut self, tech: &TechnologyMetrics) {
        self.co2_reduction.expand(tech.co2_reduction);
        self.energy_production.expand(tech.energy_production);
        self.installation_cost.expand(tech.installation_cost);
        self.efficiency.expand(tech.efficiency);
    }
}

/// A technology with its metrics normalized to [0,1] and a composite score.
///
/// The metric fields hold normalized values; the cost inversion (lower is
/// better) happens inside the score only, so `installation_cost` stays a
/// plain normalization of the raw cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedTechnology {
    pub name: String,
    pub co2_reduction: f64,
    pub energy_production: f64,
    pub installation_cost: f64,
    pub efficiency: f64,
    pub score: f64,
}
