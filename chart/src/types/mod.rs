//! Domain types for type matchups

mod chart;
mod color;
mod elemental;

pub use chart::{EFFECTIVENESS_ENTRIES, NEUTRAL, RESISTED, SUPER_EFFECTIVE, TypeChart};
pub use color::{NEUTRAL_COLOR, type_color};
pub use elemental::Type;
