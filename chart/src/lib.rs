//! Type effectiveness chart for a creature catalog.
//!
//! This crate is the leaf of the `typedex` workspace: it owns the closed
//! set of 18 elemental types and the sparse effectiveness table that every
//! analysis reads from.
//!
//! ```text
//! typedex-chart (types + effectiveness) ← THIS CRATE
//!        │
//!        └─> typedex-team (roster analysis)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - Elemental types in fixed enumeration order
//! - [`TypeChart`] - Immutable effectiveness table, built once and passed by reference
//!
//! # Example Usage
//!
//! ```
//! use typedex_chart::{Type, TypeChart};
//!
//! let chart = TypeChart::new();
//! assert_eq!(chart.effectiveness(Type::Electric, Type::Ground), 0.0);
//!
//! let profile = chart.dual_defense(Type::Rock, Some(Type::Ground));
//! assert_eq!(profile[&Type::Water], 4.0);
//! ```

use thiserror::Error;

pub mod types;

pub use types::{
    EFFECTIVENESS_ENTRIES, NEUTRAL, NEUTRAL_COLOR, RESISTED, SUPER_EFFECTIVE, Type, TypeChart,
    type_color,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("Unknown type: {0}")]
    UnknownType(String),
}
