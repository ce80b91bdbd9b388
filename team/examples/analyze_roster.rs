use std::env;
use std::fs;
use std::process;

use anyhow::{Context, Result};
use typedex_team::{AnalyzerConfig, TeamAnalyzer, TypeChart, parse_roster_json};

const SAMPLE_ROSTER: &str = r#"[
    {"name": "Gyarados", "types": ["water", "flying"]},
    {"name": "Garchomp", "types": ["dragon", "ground"]},
    {"name": "Pikachu", "types": ["electric"]},
    {"name": "Gengar", "types": ["ghost", "poison"]}
]"#;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = env::args().skip(1);

    let roster_json = match args.next() {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read roster file {}", path))?,
        None => SAMPLE_ROSTER.to_string(),
    };

    let config = match args.next() {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path))?;
            AnalyzerConfig::from_json(&json).context("Invalid analyzer config")?
        }
        None => AnalyzerConfig::default(),
    };

    let roster = parse_roster_json(&roster_json).context("Invalid roster")?;
    let chart = TypeChart::new();
    let analysis = TeamAnalyzer::with_config(&chart, config).analyze(&roster);

    println!("\n=== Team Analysis ({} members) ===\n", roster.len());
    println!("Score: {}/100\n", analysis.coverage_score);

    println!("┌─ Offensive coverage");
    for (t, count) in &analysis.offensive_coverage {
        println!("│  {:<9} {}", t.as_str(), "■".repeat(*count));
    }
    println!("└─");

    println!("\n┌─ Weaknesses");
    for (t, members) in &analysis.defensive_weaknesses {
        println!("│  {:<9} {}", t.as_str(), members.join(", "));
    }
    println!("└─");

    println!("\n┌─ Resistances");
    for (t, members) in &analysis.resistances {
        println!("│  {:<9} {}", t.as_str(), members.join(", "));
    }
    println!("└─");

    println!("\nRecommendations:");
    for rec in &analysis.recommendations {
        println!("  • {}", rec);
    }

    if !analysis.strengths.is_empty() {
        println!("\nStrengths:");
        for strength in &analysis.strengths {
            println!("  • {}", strength);
        }
    }

    Ok(())
}
