//! trade-values - Main entry point

use anyhow::{Context, Result};
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use trade_values::cli::{Cli, Commands};
use trade_values::format::format_value;
use trade_values::{AppConfig, Catalog, Game, Item, Resolution, TradeOffer, TradeVerdict};

/// Initialize logging. `RUST_LOG` wins over `--verbose`.
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);
    debug!("CLI arguments parsed");

    let config = match &cli.config {
        Some(path) => {
            let config = AppConfig::load_from_file(path)?;
            config
                .validate()
                .with_context(|| format!("Invalid configuration in {:?}", path))?;
            config
        }
        None => AppConfig::default(),
    };

    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| config.catalog_path.clone())
        .context("No catalog given: pass --catalog or set catalog_path in the config file")?;
    let catalog = Catalog::load_from_file(&catalog_path)?;
    info!(
        "Loaded {} items from {:?} ({} skipped)",
        catalog.len(),
        catalog_path,
        catalog.skipped()
    );

    let game = cli.game.or(config.default_game);

    match &cli.command {
        Commands::Resolve { item, selection } => {
            let item = catalog.get(item, game)?;
            let resolution = trade_values::resolve(item, &selection.selection());
            if cli.json {
                print_json(&ItemResolution { item, resolution })?;
            } else {
                println!("{}", describe(item, &resolution));
            }
        }
        Commands::Table { item } => {
            let item = catalog.get(item, game)?;
            let table = item.variant_table();
            if cli.json {
                print_json(&ItemTable { item, table })?;
            } else {
                println!("{} ({})", item.name, item.game.display_name());
                for resolution in &table {
                    println!("  {:<5} {}", resolution.label.to_string(), value_text(resolution));
                }
            }
        }
        Commands::Trade { offer } => {
            let offer = TradeOffer::load_from_file(offer)?;
            let summary = trade_values::evaluate(&offer, &catalog, game, config.fair_margin)?;
            if cli.json {
                print_json(&summary)?;
            } else {
                println!("Offering:");
                for entry in &summary.offering {
                    println!("  {} x{}  {}", entry.name, entry.quantity, format_value(entry.total));
                }
                println!("Requesting:");
                for entry in &summary.requesting {
                    println!("  {} x{}  {}", entry.name, entry.quantity, format_value(entry.total));
                }
                println!(
                    "Total: {} for {} ({})",
                    format_value(summary.offering_total),
                    format_value(summary.requesting_total),
                    match summary.verdict {
                        TradeVerdict::Win => "win",
                        TradeVerdict::Fair => "fair",
                        TradeVerdict::Lose => "lose",
                    }
                );
            }
        }
        Commands::Validate => {
            if catalog.is_empty() {
                anyhow::bail!("Catalog {:?} contains no valid items", catalog_path);
            }
            let counts: Vec<(Game, usize)> =
                Game::iter().map(|g| (g, catalog.by_game(g).count())).collect();
            if cli.json {
                let counts: serde_json::Map<String, serde_json::Value> = counts
                    .iter()
                    .map(|(g, n)| (g.to_string(), serde_json::Value::from(*n)))
                    .collect();
                print_json(&serde_json::json!({
                    "items": catalog.len(),
                    "skipped": catalog.skipped(),
                    "games": counts,
                }))?;
            } else {
                println!(
                    "✓ Catalog is valid: {} items, {} skipped",
                    catalog.len(),
                    catalog.skipped()
                );
                for (g, n) in counts {
                    println!("  {:<18} {}", g.display_name(), n);
                }
            }
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct ItemResolution<'a> {
    item: &'a Item,
    resolution: Resolution,
}

#[derive(Serialize)]
struct ItemTable<'a> {
    item: &'a Item,
    table: Vec<Resolution>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn describe(item: &Item, resolution: &Resolution) -> String {
    format!("{} [{}] {}", item.name, resolution.label, value_text(resolution))
}

fn value_text(resolution: &Resolution) -> String {
    match resolution.source {
        Some(source) if resolution.is_fallback() => {
            format!("{} (from {})", format_value(resolution.value), source)
        }
        Some(_) => format_value(resolution.value),
        None => "no value".to_string(),
    }
}
