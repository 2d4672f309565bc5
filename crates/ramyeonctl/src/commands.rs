//! Subcommand implementations.

use crate::client::DaemonClient;
use anyhow::Result;
use owo_colors::OwoColorize;
use ramyeon_common::{Language, TimerDirective};

pub async fn status(client: &DaemonClient) -> Result<()> {
    match client.health().await {
        Ok(health) => {
            println!("{} ramyeond v{} ({})", "●".green(), health.version, health.time);
        }
        Err(e) => {
            println!("{} daemon not reachable: {e}", "●".red());
        }
    }
    Ok(())
}

pub async fn catalog(client: &DaemonClient) -> Result<()> {
    let value = client.catalog().await?;
    let brands = value["brands"].as_array().cloned().unwrap_or_default();
    for brand in brands {
        let brand = brand.as_str().unwrap_or_default();
        println!("{}", brand.bold());
        if let Some(rows) = value["catalog"][brand].as_array() {
            for row in rows {
                println!(
                    "  {:<14} {}  spice {}  {}",
                    row["name"].as_str().unwrap_or_default(),
                    row["time"].as_str().unwrap_or_default(),
                    row["spice"],
                    if row["cup"].as_bool().unwrap_or(false) { "cup" } else { "" },
                );
            }
        }
    }
    Ok(())
}

pub async fn list(client: &DaemonClient) -> Result<()> {
    let response = client.guide_list().await?;
    for name in response.items {
        println!("{name}");
    }
    Ok(())
}

pub async fn guide(client: &DaemonClient, name: &str, lang: Language, quick: bool) -> Result<()> {
    if quick {
        let g = client.guide_quick(name, lang).await?;
        println!("{}", g.title.bold());
        for line in &g.quick {
            println!("  - {line}");
        }
        println!(
            "  ({}, {}ml, {}s)",
            g.meta.cook_type, g.meta.water_ml, g.meta.time_sec
        );
        return Ok(());
    }

    let g = client.guide(name, lang).await?;
    println!("{}", g.title.bold());
    for step in &g.steps {
        println!("  {step}");
    }
    if !g.notes.is_empty() {
        println!("  {} {}", "Tip)".dimmed(), g.notes.join(" · ").dimmed());
    }
    Ok(())
}

pub async fn parse(client: &DaemonClient, text: &str, lang: Language) -> Result<()> {
    let directive = client.parse(text, lang).await?;
    print_directive(&directive);
    Ok(())
}

/// The original manual endpoint-test cases, runnable against a live
/// daemon.
const SMOKE_CASES: &[&str] = &[
    "신라면 4분",
    "컵라면 3분인데 2분 50초만",
    "너구리",
    "불닭볶음면 5:30",
    "라면 2분",
];

pub async fn smoke(client: &DaemonClient) -> Result<()> {
    match client.health().await {
        Ok(health) => println!("{} daemon v{}", "✓".green(), health.version),
        Err(e) => {
            println!("{} daemon not reachable: {e}", "✗".red());
            return Ok(());
        }
    }

    for case in SMOKE_CASES {
        println!("\n{} {}", "case:".bold(), case);
        match client.parse(case, Language::Ko).await {
            Ok(directive) => print_directive(&directive),
            Err(e) => println!("  {} {e}", "✗".red()),
        }
    }
    Ok(())
}

fn print_directive(directive: &TimerDirective) {
    println!(
        "  name={} seconds={} ({}:{:02}) start={} control={}",
        directive.name.bold(),
        directive.seconds,
        directive.seconds / 60,
        directive.seconds % 60,
        directive.should_start,
        directive
            .control
            .map(|c| c.as_str())
            .unwrap_or("none"),
    );
    for line in directive.reply.lines() {
        println!("  {line}");
    }
    if !directive.suggestions.is_empty() {
        println!("  {} {}", "suggest:".dimmed(), directive.suggestions.join(" | ").dimmed());
    }
}
