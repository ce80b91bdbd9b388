//! Team analyzer
//!
//! Computes four independent sub-results (offensive coverage, defensive
//! profile, diversity, score), then derives advice from them.

mod advice;
mod profile;
mod score;

pub use advice::{BALANCED_TEAM, recommendations, strengths};
pub use profile::{DefensiveProfile, defensive_profile, offensive_coverage, type_diversity};
pub use score::{ScoreBreakdown, coverage_score};

use typedex_chart::TypeChart;

use crate::analysis::TeamAnalysis;
use crate::config::AnalyzerConfig;
use crate::roster::RosterMember;

/// Analyzes rosters against a borrowed, immutable chart
///
/// Holds no mutable state, so one analyzer can be shared freely across
/// threads and calls.
#[derive(Debug, Clone)]
pub struct TeamAnalyzer<'a> {
    chart: &'a TypeChart,
    config: AnalyzerConfig,
}

impl<'a> TeamAnalyzer<'a> {
    /// Create an analyzer with the default configuration
    pub fn new(chart: &'a TypeChart) -> Self {
        Self::with_config(chart, AnalyzerConfig::default())
    }

    /// Create an analyzer with a custom configuration
    pub fn with_config(chart: &'a TypeChart, config: AnalyzerConfig) -> Self {
        Self { chart, config }
    }

    pub fn chart(&self) -> &TypeChart {
        self.chart
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a roster of any length, including an empty one
    pub fn analyze(&self, roster: &[RosterMember]) -> TeamAnalysis {
        let offensive_coverage = offensive_coverage(self.chart, roster);
        let defense = defensive_profile(self.chart, roster);
        let type_diversity = type_diversity(roster, &self.config.critical_types);
        let score = coverage_score(&offensive_coverage, &type_diversity, &defense, &self.config);

        tracing::debug!(
            members = roster.len(),
            coverage = score.coverage,
            diversity = score.diversity,
            defense = score.defense,
            total = score.total,
            "Scored roster"
        );

        let mut analysis = TeamAnalysis {
            coverage_score: score.total,
            offensive_coverage,
            defensive_weaknesses: defense.weaknesses,
            resistances: defense.resistances,
            type_diversity,
            recommendations: Vec::new(),
            strengths: Vec::new(),
        };
        analysis.recommendations = recommendations(&analysis, roster.len(), &self.config);
        analysis.strengths = strengths(&analysis, roster.len(), &self.config);

        analysis
    }
}

/// Analyze a roster with the default configuration
pub fn analyze_team(chart: &TypeChart, roster: &[RosterMember]) -> TeamAnalysis {
    TeamAnalyzer::new(chart).analyze(roster)
}
