//! Analyzer configuration
//!
//! The defaults reproduce the published scoring and advice rules exactly;
//! changing them changes the score a roster receives.

use serde::{Deserialize, Serialize};
use typedex_chart::Type;

/// Point weights for the three score components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreWeights {
    /// Maximum points for offensive coverage
    pub coverage: u32,
    /// Maximum points for type diversity
    pub diversity: u32,
    /// Maximum points for defense
    pub defense: u32,
    /// Defense points lost per weakness entry
    pub weakness_penalty: u32,
    /// Defense points gained per resistance entry
    pub resistance_bonus: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            coverage: 40,
            diversity: 30,
            defense: 30,
            weakness_penalty: 2,
            resistance_bonus: 1,
        }
    }
}

/// Thresholds that decide when advice is emitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Thresholds {
    /// Average coverage per type that earns full coverage points
    pub full_coverage_per_type: f64,
    /// Members sharing one weakness before it is called out
    pub heavy_weakness: usize,
    /// Unique type count below which diversity is flagged
    pub low_diversity_unique: usize,
    /// Roster size from which low diversity is flagged
    pub low_diversity_min_roster: usize,
    /// Occurrences of one type above which it is over-concentrated
    pub over_concentration: usize,
    /// Roster size at which missing critical types are no longer suggested
    pub full_roster: usize,
    /// Members hitting a type super effectively to count as a strength
    pub strong_coverage: usize,
    /// Members resisting an attacking type to count as a strength
    pub shared_resistance: usize,
    /// Roster size from which balanced offense is reported
    pub balanced_offense_min_roster: usize,
    /// Average coverage per type for balanced offense
    pub balanced_offense_average: f64,
    /// Types named in the coverage-gap and strong-coverage messages
    pub max_listed_gaps: usize,
    /// Critical types named in the suggestion message
    pub max_listed_missing: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            full_coverage_per_type: 6.0,
            heavy_weakness: 3,
            low_diversity_unique: 6,
            low_diversity_min_roster: 4,
            over_concentration: 2,
            full_roster: 6,
            strong_coverage: 3,
            shared_resistance: 3,
            balanced_offense_min_roster: 5,
            balanced_offense_average: 2.0,
            max_listed_gaps: 3,
            max_listed_missing: 2,
        }
    }
}

/// Full analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzerConfig {
    pub weights: ScoreWeights,
    pub thresholds: Thresholds,
    /// Types every team is expected to field, in suggestion order
    pub critical_types: Vec<Type>,
}

impl AnalyzerConfig {
    /// Types suggested when absent, in the order they are suggested
    pub const DEFAULT_CRITICAL_TYPES: [Type; 6] = [
        Type::Water,
        Type::Fire,
        Type::Grass,
        Type::Electric,
        Type::Fighting,
        Type::Psychic,
    ];

    /// Load a configuration from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            thresholds: Thresholds::default(),
            critical_types: Self::DEFAULT_CRITICAL_TYPES.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_hundred() {
        let weights = ScoreWeights::default();
        assert_eq!(weights.coverage + weights.diversity + weights.defense, 100);
    }

    #[test]
    fn test_from_json_keeps_missing_defaults() {
        let config = AnalyzerConfig::from_json(
            r#"{"thresholds": {"heavyWeakness": 2}, "criticalTypes": ["dragon"]}"#,
        )
        .unwrap();

        assert_eq!(config.thresholds.heavy_weakness, 2);
        assert_eq!(config.thresholds.low_diversity_unique, 6);
        assert_eq!(config.weights, ScoreWeights::default());
        assert_eq!(config.critical_types, vec![Type::Dragon]);
    }

    #[test]
    fn test_from_json_rejects_unknown_types() {
        assert!(AnalyzerConfig::from_json(r#"{"criticalTypes": ["plasma"]}"#).is_err());
    }
}
