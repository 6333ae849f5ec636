//! Normalization and composite scoring over a technology catalog snapshot.

use crate::domain::technology::errors::TechnologyError;
use crate::domain::technology::models::NormalizationStats;
use crate::domain::technology::models::NormalizedTechnology;
use crate::domain::technology::models::TechnologyMetrics;

/// Normalized value reported when a metric's range collapses to a point.
pub const NEUTRAL_NORMALIZED: f64 = 0.5;

/// Relative weight of each metric in the composite score.
///
/// The default policy is the equal-weight average, 0.25 per metric. The
/// composite divides by the weight sum, so any positive weight vector keeps
/// scores within [0,1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub co2_reduction: f64,
    pub energy_production: f64,
    pub installation_cost: f64,
    pub efficiency: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.co2_reduction + self.energy_production + self.installation_cost + self.efficiency
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            co2_reduction: 0.25,
            energy_production: 0.25,
            installation_cost: 0.25,
            efficiency: 0.25,
        }
    }
}

/// Min/max per metric across the snapshot.
///
/// # Errors
/// * `EmptyCatalog` - min/max are undefined over an empty catalog
pub fn compute_stats(catalog: &[TechnologyMetrics]) -> Result<NormalizationStats, TechnologyError> {
    let (first, rest) = catalog.split_first().ok_or(TechnologyError::EmptyCatalog)?;

    let mut stats = NormalizationStats::of(first);
    for tech in rest {
        stats.expand(tech);
    }

    Ok(stats)
}

/// Linear rescaling of `value` from [min, max] onto [0,1].
///
/// When the range collapses (every catalog entry shares the value), returns
/// the neutral 0.5 instead of dividing by zero. The comparison is exact:
/// min and max come from the same snapshot, so a degenerate range is a true
/// equality, not a rounding artifact.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span == 0.0 {
        return NEUTRAL_NORMALIZED;
    }
    (value - min) / span
}

/// Normalize all four metrics of a technology and attach its composite score.
///
/// CO₂ reduction, energy production, and efficiency count as higher-is-better;
/// installation cost enters the score inverted (`1 - normalized`), since a
/// cheaper installation is the desirable end of that axis.
pub fn normalize_technology(
    tech: &TechnologyMetrics,
    stats: &NormalizationStats,
    weights: &ScoringWeights,
) -> NormalizedTechnology {
    let co2_reduction = normalize(
        tech.co2_reduction,
        stats.co2_reduction.min,
        stats.co2_reduction.max,
    );
    let energy_production = normalize(
        tech.energy_production,
        stats.energy_production.min,
        stats.energy_production.max,
    );
    let installation_cost = normalize(
        tech.installation_cost,
        stats.installation_cost.min,
        stats.installation_cost.max,
    );
    let efficiency = normalize(tech.efficiency, stats.efficiency.min, stats.efficiency.max);

    let weight_sum = weights.sum();
    debug_assert!(weight_sum > 0.0, "scoring weights must be positive");

    let score = (weights.co2_reduction * co2_reduction
        + weights.energy_production * energy_production
        + weights.installation_cost * (1.0 - installation_cost)
        + weights.efficiency * efficiency)
        / weight_sum;

    NormalizedTechnology {
        name: tech.name.clone(),
        co2_reduction,
        energy_production,
        installation_cost,
        efficiency,
        score,
    }
}

/// Composite score of one technology against snapshot statistics.
pub fn score(
    tech: &TechnologyMetrics,
    stats: &NormalizationStats,
    weights: &ScoringWeights,
) -> f64 {
    normalize_technology(tech, stats, weights).score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tech(name: &str, co2: f64, energy: f64, cost: f64, efficiency: f64) -> TechnologyMetrics {
        TechnologyMetrics {
            name: name.to_string(),
            co2_reduction: co2,
            energy_production: energy,
            installation_cost: cost,
            efficiency,
        }
    }

    #[test]
    fn test_normalize_endpoints() {
        assert_eq!(normalize(10.0, 10.0, 20.0), 0.0);
        assert_eq!(normalize(20.0, 10.0, 20.0), 1.0);
        assert_eq!(normalize(15.0, 10.0, 20.0), 0.5);
    }

    #[test]
    fn test_normalize_degenerate_range_is_neutral() {
        assert_eq!(normalize(10.0, 10.0, 10.0), NEUTRAL_NORMALIZED);
        // Neutral regardless of the probed value
        assert_eq!(normalize(-3.0, 10.0, 10.0), NEUTRAL_NORMALIZED);
    }

    #[test]
    fn test_compute_stats_empty_catalog() {
        let result = compute_stats(&[]);
        assert!(matches!(result, Err(TechnologyError::EmptyCatalog)));
    }

    #[test]
    fn test_compute_stats_finds_true_extremes() {
        let catalog = vec![
            tech("Solar", 100.0, 3000.0, 15000.0, 0.18),
            tech("Wind", 150.0, 4500.0, 20000.0, 0.30),
            tech("Hydro", 200.0, 5000.0, 10000.0, 0.25),
        ];

        let stats = compute_stats(&catalog).unwrap();

        assert_eq!(stats.co2_reduction.min, 100.0);
        assert_eq!(stats.co2_reduction.max, 200.0);
        assert_eq!(stats.energy_production.min, 3000.0);
        assert_eq!(stats.energy_production.max, 5000.0);
        assert_eq!(stats.installation_cost.min, 10000.0);
        assert_eq!(stats.installation_cost.max, 20000.0);
        assert_eq!(stats.efficiency.min, 0.18);
        assert_eq!(stats.efficiency.max, 0.30);
    }

    #[test]
    fn test_singleton_catalog_scores_neutral() {
        let catalog = vec![tech("Solar", 100.0, 3000.0, 15000.0, 0.18)];

        let stats = compute_stats(&catalog).unwrap();
        let normalized = normalize_technology(&catalog[0], &stats, &ScoringWeights::default());

        // Every range is a point, so every normalized value is 0.5, and the
        // cost inversion of 0.5 is still 0.5
        assert_eq!(normalized.co2_reduction, 0.5);
        assert_eq!(normalized.energy_production, 0.5);
        assert_eq!(normalized.installation_cost, 0.5);
        assert_eq!(normalized.efficiency, 0.5);
        assert_eq!(normalized.score, 0.5);
    }

    #[test]
    fn test_score_within_unit_interval() {
        let catalog = vec![
            tech("Solar", 100.0, 3000.0, 15000.0, 0.18),
            tech("Wind", 150.0, 4500.0, 20000.0, 0.30),
            tech("Hydro", 200.0, 5000.0, 10000.0, 0.25),
        ];
        let stats = compute_stats(&catalog).unwrap();

        for entry in &catalog {
            let s = score(entry, &stats, &ScoringWeights::default());
            assert!((0.0..=1.0).contains(&s), "score {} out of range", s);
        }
    }

    #[test]
    fn test_cheaper_technology_scores_higher() {
        // Identical on every axis except installation cost
        let cheap = tech("Cheap", 100.0, 3000.0, 10000.0, 0.20);
        let dear = tech("Dear", 100.0, 3000.0, 20000.0, 0.20);
        let stats = compute_stats(&[cheap.clone(), dear.clone()]).unwrap();

        let weights = ScoringWeights::default();
        assert!(score(&cheap, &stats, &weights) > score(&dear, &stats, &weights));
    }

    #[test]
    fn test_custom_weights_keep_score_in_range() {
        let catalog = vec![
            tech("Solar", 100.0, 3000.0, 15000.0, 0.18),
            tech("Wind", 150.0, 4500.0, 20000.0, 0.30),
        ];
        let stats = compute_stats(&catalog).unwrap();

        let weights = ScoringWeights {
            co2_reduction: 0.5,
            energy_production: 0.3,
            installation_cost: 0.1,
            efficiency: 0.1,
        };

        for entry in &catalog {
            let s = score(entry, &stats, &weights);
            assert!((0.0..=1.0).contains(&s));
        }
    }
}
