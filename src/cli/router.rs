//! Command routing and execution

use crate::catalog::Catalog;
use crate::cli::args::Commands;
use crate::cli::script::{load_script, run_script};
use crate::config::ShopConfig;
use crate::error::ErrorExt;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Execute a CLI command against the loaded configuration
pub fn execute_command(command: Commands, config: &ShopConfig) -> Result<()> {
    match command {
        Commands::Catalog => {
            let catalog = config.load_catalog()?;
            print_catalog(&catalog);
            Ok(())
        }
        Commands::Run { script, json } => run_script_command(&script, json, config),
        Commands::CheckConfig => {
            let catalog = config.load_catalog()?;
            config.validate(&catalog)?;
            info!("Configuration is valid");
            println!(
                "Configuration OK: {} cookies, {} box sizes, delivering to {}",
                catalog.items.len(),
                catalog.tiers.len(),
                config.locality
            );
            Ok(())
        }
    }
}

fn run_script_command(path: &Path, json: bool, config: &ShopConfig) -> Result<()> {
    let catalog = config.load_catalog()?;
    config.validate(&catalog)?;
    let script = load_script(path)?;

    let report = run_script(&script, config, catalog);
    info!(
        "Replayed {} intents ({} applied)",
        report.steps.len(),
        report.applied_count()
    );

    if json {
        let rendered = serde_json::to_string_pretty(&report)
            .to_shop("Failed to render report as JSON")
            .context("Cannot print script result")?;
        println!("{rendered}");
    } else {
        for step in &report.steps {
            println!("{}. {}: {}", step.step, step.intent, step.outcome);
        }
        println!();
        print!("{}", report.view);
    }
    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    println!("Cookies:");
    for item in &catalog.items {
        println!("  {:<10} {:<24} {:>3} SEK", item.id, item.name, item.unit_price);
    }

    println!("Boxes:");
    for tier in &catalog.tiers {
        match (tier.fixed_price, catalog.starting_price()) {
            (Some(price), _) => println!("  {:>2}  {:<20} {} SEK", tier.size, tier.label, price),
            (None, Some(from)) => println!("  {:>2}  {:<20} From {} SEK", tier.size, tier.label, from),
            (None, None) => println!("  {:>2}  {}", tier.size, tier.label),
        }
    }

    if !catalog.testimonials.is_empty() {
        println!("Reviews:");
        for review in &catalog.testimonials {
            println!(
                "  {} {}: \"{}\"",
                "*".repeat(review.rating as usize),
                review.name,
                review.text
            );
        }
    }
}
