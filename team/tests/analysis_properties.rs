use typedex_team::{
    BALANCED_TEAM, RosterMember, TeamAnalyzer, Type, TypeChart, analyze_team, parse_roster_json,
};

fn full_coverage_roster() -> Vec<RosterMember> {
    vec![
        RosterMember::dual("Swampert", Type::Water, Type::Ground),
        RosterMember::dual("Infernape", Type::Fire, Type::Fighting),
        RosterMember::dual("Mimikyu", Type::Ghost, Type::Fairy),
        RosterMember::dual("Zapdos", Type::Electric, Type::Flying),
        RosterMember::dual("Mamoswine", Type::Ice, Type::Ground),
        RosterMember::dual("Skuntank", Type::Poison, Type::Dark),
    ]
}

/// Every mono and dual typing, in enumeration order
fn all_typings() -> Vec<Vec<Type>> {
    let mut typings = Vec::new();
    for (i, &a) in Type::all().iter().enumerate() {
        typings.push(vec![a]);
        for &b in &Type::all()[i + 1..] {
            typings.push(vec![a, b]);
        }
    }
    typings
}

#[test]
fn test_determinism() {
    let chart = TypeChart::new();
    let roster = full_coverage_roster();

    let first = analyze_team(&chart, &roster);
    let second = analyze_team(&chart, &roster);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_empty_roster() {
    let chart = TypeChart::new();
    let analysis = analyze_team(&chart, &[]);

    assert!(analysis.offensive_coverage.values().all(|c| *c == 0));
    assert!(analysis.defensive_weaknesses.is_empty());
    assert!(analysis.resistances.is_empty());
    assert_eq!(analysis.type_diversity.unique_types, 0);
    assert_eq!(analysis.recommendations, vec![BALANCED_TEAM.to_string()]);
    assert!(analysis.strengths.is_empty());
    assert_eq!(analysis.coverage_score, 30);
}

#[test]
fn test_score_bounds_and_coverage_cap() {
    let chart = TypeChart::new();
    let analyzer = TeamAnalyzer::new(&chart);
    let typings = all_typings();
    assert_eq!(typings.len(), 171);

    for size in 0..=6 {
        for start in 0..typings.len() {
            let roster: Vec<RosterMember> = (0..size)
                .map(|i| {
                    let types = typings[(start + i * 29) % typings.len()].clone();
                    RosterMember::new(format!("member{i}"), types)
                })
                .collect();

            let analysis = analyzer.analyze(&roster);
            assert!(analysis.coverage_score <= 100);
            assert!(analysis.offensive_coverage.values().all(|c| *c <= roster.len()));
            assert!(!analysis.recommendations.is_empty());
        }
    }
}

#[test]
fn test_same_typing_six_times() {
    let chart = TypeChart::new();
    for typing in all_typings() {
        let roster: Vec<RosterMember> = (0..6)
            .map(|i| RosterMember::new(format!("clone{i}"), typing.clone()))
            .collect();
        let analysis = analyze_team(&chart, &roster);

        assert!(analysis.coverage_score <= 100);
        assert!(analysis.type_diversity.has_duplicates);
    }
}

#[test]
fn test_dual_defense_symmetry() {
    let chart = TypeChart::new();
    for typing in all_typings() {
        if let [a, b] = typing[..] {
            assert_eq!(chart.dual_defense(a, Some(b)), chart.dual_defense(b, Some(a)));
        }
    }
}

#[test]
fn test_duplicate_names_are_kept_in_roster_order() {
    let chart = TypeChart::new();
    let roster = vec![
        RosterMember::mono("Twin", Type::Ground),
        RosterMember::dual("Twin", Type::Rock, Type::Ground),
    ];
    let analysis = analyze_team(&chart, &roster);

    assert_eq!(
        analysis.resisting(Type::Electric),
        ["Twin".to_string(), "Twin".to_string()]
    );
    assert_eq!(analysis.weak_to(Type::Water).len(), 2);
    // Both members hit Fire and Electric super effectively
    assert_eq!(analysis.offensive_coverage[&Type::Fire], 2);
    assert_eq!(analysis.offensive_coverage[&Type::Electric], 2);
    assert_eq!(analysis.type_diversity.type_distribution[&Type::Ground], 2);
}

#[test]
fn test_ground_member_resists_electric() {
    let chart = TypeChart::new();
    let analysis = analyze_team(&chart, &[RosterMember::mono("Sandslash", Type::Ground)]);

    assert_eq!(analysis.resisting(Type::Electric), ["Sandslash".to_string()]);
    assert!(analysis.weak_to(Type::Electric).is_empty());
}

#[test]
fn test_rock_ground_quad_weaknesses() {
    let chart = TypeChart::new();
    let golem = RosterMember::dual("Golem", Type::Rock, Type::Ground);

    let profile = chart.dual_defense(Type::Rock, Some(Type::Ground));
    assert_eq!(profile[&Type::Water], 4.0);
    assert_eq!(profile[&Type::Grass], 4.0);

    let analysis = analyze_team(&chart, &[golem]);
    assert_eq!(analysis.weak_to(Type::Water), ["Golem".to_string()]);
    assert_eq!(analysis.weak_to(Type::Grass), ["Golem".to_string()]);
}

#[test]
fn test_dragon_and_fairy_interaction() {
    let chart = TypeChart::new();
    assert_eq!(chart.effectiveness(Type::Dragon, Type::Fairy), 0.0);

    let roster = vec![
        RosterMember::mono("Dragonite", Type::Dragon),
        RosterMember::mono("Sylveon", Type::Fairy),
    ];
    let analysis = analyze_team(&chart, &roster);

    // Fairy is immune to Dragon, so the immunity lands in resistances
    assert_eq!(analysis.resisting(Type::Dragon), ["Sylveon".to_string()]);
    assert_eq!(analysis.weak_to(Type::Fairy), ["Dragonite".to_string()]);
    assert_eq!(
        analysis.weak_to(Type::Dragon),
        ["Dragonite".to_string()]
    );
}

#[test]
fn test_full_roster_covers_every_type() {
    let chart = TypeChart::new();
    let analysis = analyze_team(&chart, &full_coverage_roster());

    assert!(analysis.offensive_coverage.values().all(|c| *c > 0));
    assert!(analysis.uncovered_types().is_empty());
    assert!(
        !analysis
            .recommendations
            .iter()
            .any(|r| r.contains("lacks super-effective coverage"))
    );
}

#[test]
fn test_recommendation_priority_order() {
    let chart = TypeChart::new();
    let roster: Vec<RosterMember> = ["Squirtle", "Psyduck", "Poliwag", "Goldeen"]
        .into_iter()
        .map(|name| RosterMember::mono(name, Type::Water))
        .collect();

    let recs = analyze_team(&chart, &roster).recommendations;
    assert_eq!(recs.len(), 5, "{recs:#?}");
    assert!(recs[0].contains("lacks super-effective coverage"));
    assert!(recs[1].starts_with("4 team members are weak to Electric attacks"));
    assert!(recs[2].contains("only covers 1 different types"));
    assert!(recs[3].starts_with("Water appears 4 times"));
    assert_eq!(recs[4], "Consider adding a Fire or Grass type to round out your team.");
}

#[test]
fn test_json_roster_end_to_end() {
    let json = r#"[
        {"name": "Lapras", "types": ["water", "ice"], "imageRef": "131.png"},
        {"name": "Snorlax", "types": ["Normal"]},
        {"name": "Gengar", "types": ["ghost", "poison"]}
    ]"#;
    let roster = parse_roster_json(json).unwrap();
    let chart = TypeChart::new();
    let analysis = analyze_team(&chart, &roster);

    let value = serde_json::to_value(&analysis).unwrap();
    assert_eq!(value["resistances"]["normal"][0], "Gengar");
    assert_eq!(value["resistances"]["fighting"][0], "Gengar");
    assert_eq!(value["typeDiversity"]["uniqueTypes"], 5);
    assert!(value["coverageScore"].as_u64().unwrap() <= 100);
}
