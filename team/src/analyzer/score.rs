//! Overall 0-100 score

use std::collections::BTreeMap;

use typedex_chart::Type;

use crate::analysis::{TypeDiversity, average};
use crate::config::AnalyzerConfig;

use super::profile::DefensiveProfile;

/// Score components, each clamped to its weight before summing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub coverage: u32,
    pub diversity: u32,
    pub defense: u32,
    pub total: u8,
}

/// Score a roster from its aggregated sub-results
///
/// - coverage: `round(clamp(avg coverage / full_coverage_per_type, 0, 1) * weight)`
/// - diversity: `round(clamp(unique types / 18, 0, 1) * weight)`
/// - defense: `clamp(weight - penalty * weaknesses + bonus * resistances, 0, weight)`
///
/// The sum is clamped to 0-100.
pub fn coverage_score(
    offensive_coverage: &BTreeMap<Type, usize>,
    diversity: &TypeDiversity,
    defense: &DefensiveProfile,
    config: &AnalyzerConfig,
) -> ScoreBreakdown {
    let weights = &config.weights;

    let coverage_ratio = ratio(
        average(offensive_coverage.values().copied()),
        config.thresholds.full_coverage_per_type,
    );
    let coverage = (coverage_ratio * f64::from(weights.coverage)).round() as u32;

    let diversity_ratio = ratio(diversity.unique_types as f64, Type::COUNT as f64);
    let diversity_points = (diversity_ratio * f64::from(weights.diversity)).round() as u32;

    let weakness_entries: usize = defense.weaknesses.values().map(Vec::len).sum();
    let resistance_entries: usize = defense.resistances.values().map(Vec::len).sum();
    let raw_defense = i64::from(weights.defense)
        - i64::from(weights.weakness_penalty) * weakness_entries as i64
        + i64::from(weights.resistance_bonus) * resistance_entries as i64;
    let defense_points = raw_defense.clamp(0, i64::from(weights.defense)) as u32;

    let total = (coverage + diversity_points + defense_points).min(100) as u8;

    ScoreBreakdown {
        coverage,
        diversity: diversity_points,
        defense: defense_points,
        total,
    }
}

/// `value / full`, clamped to 0..=1; a non-positive `full` yields 0
fn ratio(value: f64, full: f64) -> f64 {
    if full <= 0.0 {
        return 0.0;
    }
    (value / full).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coverage_of(count: usize) -> BTreeMap<Type, usize> {
        Type::all().iter().map(|t| (*t, count)).collect()
    }

    fn diversity_of(unique_types: usize) -> TypeDiversity {
        TypeDiversity {
            unique_types,
            ..TypeDiversity::default()
        }
    }

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("m{i}")).collect()
    }

    #[test]
    fn test_empty_roster_scores_full_defense_only() {
        let score = coverage_score(
            &coverage_of(0),
            &diversity_of(0),
            &DefensiveProfile::default(),
            &AnalyzerConfig::default(),
        );

        assert_eq!(score, ScoreBreakdown { coverage: 0, diversity: 0, defense: 30, total: 30 });
    }

    #[test]
    fn test_components_are_clamped() {
        let defense = DefensiveProfile {
            weaknesses: BTreeMap::new(),
            resistances: BTreeMap::from([(Type::Fire, names(20))]),
        };
        let config = AnalyzerConfig::default();
        let score = coverage_score(&coverage_of(9), &diversity_of(25), &defense, &config);

        assert_eq!(score.coverage, 40);
        assert_eq!(score.diversity, 30);
        assert_eq!(score.defense, 30);
        assert_eq!(score.total, 100);
    }

    #[test]
    fn test_defense_floors_at_zero() {
        let defense = DefensiveProfile {
            weaknesses: BTreeMap::from([(Type::Water, names(6)), (Type::Grass, names(6))]),
            resistances: BTreeMap::from([(Type::Electric, names(2))]),
        };
        let config = AnalyzerConfig::default();
        let score = coverage_score(&coverage_of(0), &diversity_of(0), &defense, &config);

        // 30 - 2 * 12 + 2 = 8
        assert_eq!(score.defense, 8);

        let heavier = DefensiveProfile {
            weaknesses: BTreeMap::from([(Type::Water, names(20))]),
            resistances: BTreeMap::new(),
        };
        let score = coverage_score(&coverage_of(0), &diversity_of(0), &heavier, &config);
        assert_eq!(score.defense, 0);
    }

    #[test]
    fn test_rounding_of_partial_components() {
        // avg 1.0 -> 1/6 * 40 = 6.67 -> 7; 5/18 * 30 = 8.33 -> 8
        let score = coverage_score(
            &coverage_of(1),
            &diversity_of(5),
            &DefensiveProfile::default(),
            &AnalyzerConfig::default(),
        );

        assert_eq!(score.coverage, 7);
        assert_eq!(score.diversity, 8);
        assert_eq!(score.total, 45);
    }

    #[test]
    fn test_exact_fractions() {
        let mut coverage = coverage_of(1);
        coverage.insert(Type::Fire, 10);
        // avg 27 / 18 = 1.5 -> 0.25 * 40 = 10; 9/18 * 30 = 15
        let defense = DefensiveProfile::default();
        let config = AnalyzerConfig::default();
        let score = coverage_score(&coverage, &diversity_of(9), &defense, &config);

        assert_eq!(score.coverage, 10);
        assert_eq!(score.diversity, 15);
        assert_eq!(score.total, 55);
    }

    #[test]
    fn test_ratio_guards() {
        assert_eq!(ratio(1.0, 0.0), 0.0);
        assert_eq!(ratio(-1.0, 2.0), 0.0);
        assert_eq!(ratio(3.0, 2.0), 1.0);
    }
}
