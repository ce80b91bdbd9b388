//! Type effectiveness chart
//!
//! The chart is stored sparsely: only non-neutral interactions are kept,
//! and any pair without an entry is neutral (1.0).

use std::collections::{BTreeMap, HashMap};

use super::elemental::Type;

/// Neutral multiplier, returned for every pair without an explicit entry
pub const NEUTRAL: f32 = 1.0;

/// Lowest multiplier that counts as super effective
pub const SUPER_EFFECTIVE: f32 = 2.0;

/// Highest multiplier that counts as resisted (immunity included)
pub const RESISTED: f32 = 0.5;

/// Every non-neutral (attacking, defending, multiplier) interaction
#[rustfmt::skip]
pub static EFFECTIVENESS_ENTRIES: &[(Type, Type, f32)] = {
    use Type::*;
    &[
        // Normal
        (Normal, Rock, 0.5),
        (Normal, Ghost, 0.0),
        (Normal, Steel, 0.5),
        // Fire
        (Fire, Fire, 0.5),
        (Fire, Water, 0.5),
        (Fire, Grass, 2.0),
        (Fire, Ice, 2.0),
        (Fire, Bug, 2.0),
        (Fire, Rock, 0.5),
        (Fire, Dragon, 0.5),
        (Fire, Steel, 2.0),
        // Water
        (Water, Fire, 2.0),
        (Water, Water, 0.5),
        (Water, Grass, 0.5),
        (Water, Ground, 2.0),
        (Water, Rock, 2.0),
        (Water, Dragon, 0.5),
        // Electric
        (Electric, Water, 2.0),
        (Electric, Electric, 0.5),
        (Electric, Grass, 0.5),
        (Electric, Ground, 0.0),
        (Electric, Flying, 2.0),
        (Electric, Dragon, 0.5),
        // Grass
        (Grass, Fire, 0.5),
        (Grass, Water, 2.0),
        (Grass, Grass, 0.5),
        (Grass, Poison, 0.5),
        (Grass, Ground, 2.0),
        (Grass, Flying, 0.5),
        (Grass, Bug, 0.5),
        (Grass, Rock, 2.0),
        (Grass, Dragon, 0.5),
        (Grass, Steel, 0.5),
        // Ice
        (Ice, Fire, 0.5),
        (Ice, Water, 0.5),
        (Ice, Grass, 2.0),
        (Ice, Ice, 0.5),
        (Ice, Ground, 2.0),
        (Ice, Flying, 2.0),
        (Ice, Dragon, 2.0),
        (Ice, Steel, 0.5),
        // Fighting
        (Fighting, Normal, 2.0),
        (Fighting, Ice, 2.0),
        (Fighting, Poison, 0.5),
        (Fighting, Flying, 0.5),
        (Fighting, Psychic, 0.5),
        (Fighting, Bug, 0.5),
        (Fighting, Rock, 2.0),
        (Fighting, Ghost, 0.0),
        (Fighting, Dark, 2.0),
        (Fighting, Steel, 2.0),
        (Fighting, Fairy, 0.5),
        // Poison
        (Poison, Grass, 2.0),
        (Poison, Poison, 0.5),
        (Poison, Ground, 0.5),
        (Poison, Rock, 0.5),
        (Poison, Ghost, 0.5),
        (Poison, Steel, 0.0),
        (Poison, Fairy, 2.0),
        // Ground
        (Ground, Fire, 2.0),
        (Ground, Electric, 2.0),
        (Ground, Grass, 0.5),
        (Ground, Poison, 2.0),
        (Ground, Flying, 0.0),
        (Ground, Bug, 0.5),
        (Ground, Rock, 2.0),
        (Ground, Steel, 2.0),
        // Flying
        (Flying, Electric, 0.5),
        (Flying, Grass, 2.0),
        (Flying, Fighting, 2.0),
        (Flying, Bug, 2.0),
        (Flying, Rock, 0.5),
        (Flying, Steel, 0.5),
        // Psychic
        (Psychic, Fighting, 2.0),
        (Psychic, Poison, 2.0),
        (Psychic, Psychic, 0.5),
        (Psychic, Dark, 0.0),
        (Psychic, Steel, 0.5),
        // Bug
        (Bug, Fire, 0.5),
        (Bug, Grass, 2.0),
        (Bug, Fighting, 0.5),
        (Bug, Poison, 0.5),
        (Bug, Flying, 0.5),
        (Bug, Psychic, 2.0),
        (Bug, Ghost, 0.5),
        (Bug, Dark, 2.0),
        (Bug, Steel, 0.5),
        (Bug, Fairy, 0.5),
        // Rock
        (Rock, Fire, 2.0),
        (Rock, Ice, 2.0),
        (Rock, Fighting, 0.5),
        (Rock, Ground, 0.5),
        (Rock, Flying, 2.0),
        (Rock, Bug, 2.0),
        (Rock, Steel, 0.5),
        // Ghost
        (Ghost, Normal, 0.0),
        (Ghost, Psychic, 2.0),
        (Ghost, Ghost, 2.0),
        (Ghost, Dark, 0.5),
        // Dragon
        (Dragon, Dragon, 2.0),
        (Dragon, Steel, 0.5),
        (Dragon, Fairy, 0.0),
        // Dark
        (Dark, Fighting, 0.5),
        (Dark, Psychic, 2.0),
        (Dark, Ghost, 2.0),
        (Dark, Dark, 0.5),
        (Dark, Fairy, 0.5),
        // Steel
        (Steel, Fire, 0.5),
        (Steel, Water, 0.5),
        (Steel, Electric, 0.5),
        (Steel, Ice, 2.0),
        (Steel, Rock, 2.0),
        (Steel, Steel, 0.5),
        (Steel, Fairy, 2.0),
        // Fairy
        (Fairy, Fire, 0.5),
        (Fairy, Fighting, 2.0),
        (Fairy, Poison, 0.5),
        (Fairy, Dragon, 2.0),
        (Fairy, Dark, 2.0),
        (Fairy, Steel, 0.5),
    ]
};

/// Sparse 18x18 effectiveness table
///
/// Built once and shared by reference; nothing mutates it after
/// construction.
#[derive(Debug, Clone)]
pub struct TypeChart {
    /// attacking type -> defending type -> multiplier
    entries: HashMap<Type, HashMap<Type, f32>>,
}

impl TypeChart {
    /// Build the chart from [`EFFECTIVENESS_ENTRIES`]
    pub fn new() -> Self {
        Self::from_entries(EFFECTIVENESS_ENTRIES.iter().copied())
    }

    /// Build a chart from arbitrary entries; neutral ones are dropped
    pub fn from_entries(entries: impl IntoIterator<Item = (Type, Type, f32)>) -> Self {
        let mut table: HashMap<Type, HashMap<Type, f32>> = HashMap::new();
        for (attacking, defending, multiplier) in entries {
            if multiplier == NEUTRAL {
                continue;
            }
            table
                .entry(attacking)
                .or_default()
                .insert(defending, multiplier);
        }
        Self { entries: table }
    }

    /// Multiplier for an attacking type against a single defending type
    pub fn effectiveness(&self, attacking: Type, defending: Type) -> f32 {
        self.entries
            .get(&attacking)
            .and_then(|row| row.get(&defending))
            .copied()
            .unwrap_or(NEUTRAL)
    }

    /// Multiplier for an attacking type against several defending types (multiplied)
    pub fn effectiveness_multi(&self, attacking: Type, defenders: &[Type]) -> f32 {
        defenders
            .iter()
            .map(|t| self.effectiveness(attacking, *t))
            .product()
    }

    /// Defending types an attacking type hits super effectively, in enumeration order
    pub fn super_effective_targets(&self, attacking: Type) -> Vec<Type> {
        Type::all()
            .iter()
            .copied()
            .filter(|t| self.effectiveness(attacking, *t) >= SUPER_EFFECTIVE)
            .collect()
    }

    /// Non-neutral entries stored for one attacking type
    pub fn attacking_row(&self, attacking: Type) -> BTreeMap<Type, f32> {
        self.entries
            .get(&attacking)
            .map(|row| row.iter().map(|(t, m)| (*t, *m)).collect())
            .unwrap_or_default()
    }

    /// Defensive profile of a single or dual type
    ///
    /// For every attacking type the two single-type multipliers are
    /// multiplied; only net non-neutral results are reported.
    pub fn dual_defense(&self, type1: Type, type2: Option<Type>) -> BTreeMap<Type, f32> {
        Type::all()
            .iter()
            .filter_map(|&attacking| {
                let second = type2
                    .map(|t| self.effectiveness(attacking, t))
                    .unwrap_or(NEUTRAL);
                let multiplier = self.effectiveness(attacking, type1) * second;
                (multiplier != NEUTRAL).then_some((attacking, multiplier))
            })
            .collect()
    }

    /// Defensive profile for a type list (first two types are used)
    ///
    /// An empty list has no modifiers at all.
    pub fn defensive_profile(&self, types: &[Type]) -> BTreeMap<Type, f32> {
        match types {
            [] => BTreeMap::new(),
            [only] => self.dual_defense(*only, None),
            [first, second, ..] => self.dual_defense(*first, Some(*second)),
        }
    }

    /// Number of stored (non-neutral) interactions
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::new()
    }
}
