//! Display colors for type badges

use super::elemental::Type;

/// Color used for anything that is not a known type
pub const NEUTRAL_COLOR: &str = "#A8A8A8";

impl Type {
    /// Badge color as a `#RRGGBB` hex string
    pub fn color(&self) -> &'static str {
        match self {
            Type::Normal => "#A8A878",
            Type::Fire => "#F08030",
            Type::Water => "#6890F0",
            Type::Electric => "#F8D030",
            Type::Grass => "#78C850",
            Type::Ice => "#98D8D8",
            Type::Fighting => "#C03028",
            Type::Poison => "#A040A0",
            Type::Ground => "#E0C068",
            Type::Flying => "#A890F0",
            Type::Psychic => "#F85888",
            Type::Bug => "#A8B820",
            Type::Rock => "#B8A038",
            Type::Ghost => "#705898",
            Type::Dragon => "#7038F8",
            Type::Dark => "#705848",
            Type::Steel => "#B8B8D0",
            Type::Fairy => "#EE99AC",
        }
    }
}

/// Badge color for a raw type name, falling back to [`NEUTRAL_COLOR`]
pub fn type_color(name: &str) -> &'static str {
    Type::from_protocol(name)
        .map(|t| t.color())
        .unwrap_or(NEUTRAL_COLOR)
}
