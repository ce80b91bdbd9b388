//! Team composition analysis for a creature catalog.
//!
//! Given a roster of up to six members, each with one or two elemental
//! types, the analyzer reports offensive coverage, shared weaknesses and
//! resistances, type diversity, a 0-100 score, and readable advice.
//!
//! ```text
//! typedex-chart (types + effectiveness)
//!        │
//!        ▼
//! typedex-team (roster analysis) ← THIS CRATE
//! ```
//!
//! # Main Types
//!
//! - [`RosterMember`] - A named member and its types
//! - [`TeamAnalyzer`] - Runs the analysis against an injected [`TypeChart`]
//! - [`TeamAnalysis`] - The immutable result handed back to the caller
//! - [`AnalyzerConfig`] - Score weights and advice thresholds
//!
//! # Example Usage
//!
//! ```
//! use typedex_team::{RosterMember, TeamAnalyzer, Type, TypeChart};
//!
//! let chart = TypeChart::new();
//! let analyzer = TeamAnalyzer::new(&chart);
//!
//! let roster = vec![
//!     RosterMember::dual("Garchomp", Type::Dragon, Type::Ground),
//!     RosterMember::mono("Pikachu", Type::Electric),
//! ];
//!
//! let analysis = analyzer.analyze(&roster);
//! assert!(analysis.coverage_score <= 100);
//! assert!(!analysis.recommendations.is_empty());
//! ```

pub mod analysis;
pub mod analyzer;
pub mod config;
pub mod roster;

pub use analysis::{TeamAnalysis, TypeDiversity};
pub use analyzer::{
    BALANCED_TEAM, DefensiveProfile, ScoreBreakdown, TeamAnalyzer, analyze_team, coverage_score,
    defensive_profile, offensive_coverage, type_diversity,
};
pub use config::{AnalyzerConfig, ScoreWeights, Thresholds};
pub use roster::{MAX_ROSTER_SIZE, RawRosterMember, RosterError, RosterMember, parse_roster_json};

// Re-export the chart types every caller needs
pub use typedex_chart::{Type, TypeChart};
