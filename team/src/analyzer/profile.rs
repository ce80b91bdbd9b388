//! Per-roster aggregation: offensive coverage, defensive profile, diversity

use std::collections::{BTreeMap, BTreeSet};

use typedex_chart::{RESISTED, SUPER_EFFECTIVE, Type, TypeChart};

use crate::analysis::TypeDiversity;
use crate::roster::RosterMember;

/// Members weak to and resisting each attacking type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefensiveProfile {
    pub weaknesses: BTreeMap<Type, Vec<String>>,
    pub resistances: BTreeMap<Type, Vec<String>>,
}

/// For every defending type, count members with a super effective type
///
/// A member counts at most once per defending type. All 18 types are
/// present in the result, zero counts included.
pub fn offensive_coverage(chart: &TypeChart, roster: &[RosterMember]) -> BTreeMap<Type, usize> {
    let mut coverage: BTreeMap<Type, usize> = Type::all().iter().map(|t| (*t, 0)).collect();

    for member in roster {
        let targets: BTreeSet<Type> = member
            .types
            .iter()
            .flat_map(|&attacking| chart.super_effective_targets(attacking))
            .collect();
        for defending in targets {
            *coverage.entry(defending).or_default() += 1;
        }
    }

    coverage
}

/// Collect, per attacking type, the members weak to it and resisting it
///
/// Immunities (0x) are recorded as resistances. Names are appended in
/// roster order.
pub fn defensive_profile(chart: &TypeChart, roster: &[RosterMember]) -> DefensiveProfile {
    let mut profile = DefensiveProfile::default();

    for member in roster {
        for (attacking, multiplier) in chart.defensive_profile(&member.types) {
            if multiplier >= SUPER_EFFECTIVE {
                profile
                    .weaknesses
                    .entry(attacking)
                    .or_default()
                    .push(member.name.clone());
            } else if multiplier <= RESISTED {
                profile
                    .resistances
                    .entry(attacking)
                    .or_default()
                    .push(member.name.clone());
            }
        }
    }

    profile
}

/// Count type occurrences across the roster and find missing critical types
pub fn type_diversity(roster: &[RosterMember], critical_types: &[Type]) -> TypeDiversity {
    let mut type_distribution: BTreeMap<Type, usize> = BTreeMap::new();
    for t in roster.iter().flat_map(|member| member.types.iter()) {
        *type_distribution.entry(*t).or_default() += 1;
    }

    let total: usize = type_distribution.values().sum();
    let unique_types = type_distribution.len();

    let mut seen = BTreeSet::new();
    let missing_critical_types = critical_types
        .iter()
        .copied()
        .filter(|t| !type_distribution.contains_key(t) && seen.insert(*t))
        .collect();

    TypeDiversity {
        unique_types,
        type_distribution,
        has_duplicates: total > unique_types,
        missing_critical_types,
    }
}
