//! Readable recommendations and strengths
//!
//! Every check is independent and contributes at most one message.
//! Messages always come out in check order.

use typedex_chart::Type;

use crate::analysis::TeamAnalysis;
use crate::config::AnalyzerConfig;

/// Message emitted when no other recommendation applies
pub const BALANCED_TEAM: &str = "Your team looks well balanced! Great job covering your bases.";

/// Recommendations in fixed priority order; never empty
///
/// An empty roster gets only the fallback message.
pub fn recommendations(
    analysis: &TeamAnalysis,
    roster_size: usize,
    config: &AnalyzerConfig,
) -> Vec<String> {
    if roster_size == 0 {
        return vec![BALANCED_TEAM.to_string()];
    }

    let thresholds = &config.thresholds;
    let mut out = Vec::new();

    let gaps = analysis.uncovered_types();
    if !gaps.is_empty() {
        out.push(format!(
            "Your team lacks super-effective coverage against {} types. \
             Consider adding members that can hit them hard.",
            join_types(gaps.iter().take(thresholds.max_listed_gaps))
        ));
    }

    if let Some((attacking, members)) = most_shared_weakness(analysis)
        && members >= thresholds.heavy_weakness
    {
        out.push(format!(
            "{members} team members are weak to {attacking} attacks. \
             Consider adding a member that resists {attacking}."
        ));
    }

    let diversity = &analysis.type_diversity;
    if diversity.unique_types < thresholds.low_diversity_unique
        && roster_size >= thresholds.low_diversity_min_roster
    {
        out.push(format!(
            "Your team only covers {} different types. \
             Mixing in more varied types will make it harder to counter.",
            diversity.unique_types
        ));
    }

    // First over-concentrated type in enumeration order
    if let Some((t, count)) = diversity
        .type_distribution
        .iter()
        .find(|&(_, count)| *count > thresholds.over_concentration)
    {
        out.push(format!(
            "{t} appears {count} times on your team. Diversifying would reduce shared weaknesses."
        ));
    }

    if !diversity.missing_critical_types.is_empty() && roster_size < thresholds.full_roster {
        let missing: Vec<&str> = diversity
            .missing_critical_types
            .iter()
            .take(thresholds.max_listed_missing)
            .map(Type::as_str)
            .collect();
        out.push(format!(
            "Consider adding a {} type to round out your team.",
            missing.join(" or ")
        ));
    }

    if out.is_empty() {
        out.push(BALANCED_TEAM.to_string());
    }

    out
}

/// Strengths in fixed check order; may be empty
pub fn strengths(
    analysis: &TeamAnalysis,
    roster_size: usize,
    config: &AnalyzerConfig,
) -> Vec<String> {
    let thresholds = &config.thresholds;
    let mut out = Vec::new();

    let strong: Vec<Type> = analysis
        .offensive_coverage
        .iter()
        .filter(|&(_, count)| *count >= thresholds.strong_coverage)
        .map(|(t, _)| *t)
        .collect();
    if !strong.is_empty() {
        out.push(format!(
            "Strong offensive coverage against {} types.",
            join_types(strong.iter().take(thresholds.max_listed_gaps))
        ));
    }

    // First widely resisted attacking type in enumeration order
    if let Some((attacking, _)) = analysis
        .resistances
        .iter()
        .find(|&(_, members)| members.len() >= thresholds.shared_resistance)
    {
        out.push(format!("Multiple team members resist {attacking} attacks."));
    }

    if roster_size >= thresholds.balanced_offense_min_roster
        && analysis.average_coverage() >= thresholds.balanced_offense_average
    {
        out.push("Well-rounded offense: most types are covered by several members.".to_string());
    }

    out
}

/// Attacking type with the longest weakness list; ties go to the earlier type
fn most_shared_weakness(analysis: &TeamAnalysis) -> Option<(Type, usize)> {
    analysis
        .defensive_weaknesses
        .iter()
        .map(|(t, members)| (*t, members.len()))
        .fold(None, |best, (t, len)| match best {
            Some((_, best_len)) if best_len >= len => best,
            _ => Some((t, len)),
        })
}

fn join_types<'a>(types: impl Iterator<Item = &'a Type>) -> String {
    types.map(Type::as_str).collect::<Vec<_>>().join(", ")
}
