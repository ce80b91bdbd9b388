//! Analysis result types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use typedex_chart::Type;

/// Distribution of types across a roster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDiversity {
    /// Number of distinct types present
    pub unique_types: usize,

    /// Occurrences of each present type across all members
    pub type_distribution: BTreeMap<Type, usize>,

    /// Whether any type occurs more than once
    pub has_duplicates: bool,

    /// Critical types nobody on the roster has, in suggestion order
    pub missing_critical_types: Vec<Type>,
}

/// Result of analyzing one roster
///
/// Created fresh per call; it holds no reference back to the roster or
/// the chart it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAnalysis {
    /// Overall score (0-100)
    pub coverage_score: u8,

    /// For every defending type, how many members hit it super effectively
    pub offensive_coverage: BTreeMap<Type, usize>,

    /// Attacking type -> members taking at least 2x from it (roster order)
    pub defensive_weaknesses: BTreeMap<Type, Vec<String>>,

    /// Attacking type -> members taking at most 0.5x from it, immunities included
    pub resistances: BTreeMap<Type, Vec<String>>,

    pub type_diversity: TypeDiversity,

    /// Advice in fixed priority order; never empty
    pub recommendations: Vec<String>,

    /// Notable strengths; may be empty
    pub strengths: Vec<String>,
}

impl TeamAnalysis {
    /// Mean of the offensive coverage counts (0.0 when there are none)
    pub fn average_coverage(&self) -> f64 {
        average(self.offensive_coverage.values().copied())
    }

    /// Defending types no member hits super effectively
    pub fn uncovered_types(&self) -> Vec<Type> {
        self.offensive_coverage
            .iter()
            .filter(|&(_, count)| *count == 0)
            .map(|(t, _)| *t)
            .collect()
    }

    /// Members weak to an attacking type
    pub fn weak_to(&self, attacking: Type) -> &[String] {
        self.defensive_weaknesses
            .get(&attacking)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Members resisting (or immune to) an attacking type
    pub fn resisting(&self, attacking: Type) -> &[String] {
        self.resistances
            .get(&attacking)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total weakness entries across all attacking types
    pub fn total_weaknesses(&self) -> usize {
        self.defensive_weaknesses.values().map(Vec::len).sum()
    }

    /// Total resistance entries across all attacking types
    pub fn total_resistances(&self) -> usize {
        self.resistances.values().map(Vec::len).sum()
    }
}

/// Mean of a set of counts; an empty set averages to 0.0
pub(crate) fn average(values: impl IntoIterator<Item = usize>) -> f64 {
    let (sum, len) = values
        .into_iter()
        .fold((0usize, 0usize), |(sum, len), v| (sum + v, len + 1));
    if len == 0 { 0.0 } else { sum as f64 / len as f64 }
}
