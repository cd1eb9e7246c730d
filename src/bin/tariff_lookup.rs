//! Tariff Lookup
//!
//! Command-line front-end to the pricing engine: loads the configured
//! tariff table once and prints a single price, or lists the sizes, levels
//! or customer categories it contains.
//!
//! ```text
//! tariff-lookup --size 12x4 --category عادي --months 6
//! tariff-lookup --size 3x4 --level B --category شركات --daily
//! tariff-lookup --list sizes --config pricing.toml
//! ```

use anyhow::{Context, Result};
use billboard_pricing::application::services::PricingService;
use billboard_pricing::config::PricingConfig;
use billboard_pricing::telemetry::init_tracing;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tariff-lookup")]
#[command(about = "Look up billboard rental prices")]
struct Cli {
    /// Billboard size, e.g. 4x12, 12X4 or "4 × 12". Empty uses the configured default.
    #[arg(short, long, default_value = "")]
    size: String,

    /// Billboard level. Defaults to the configured default level.
    #[arg(short, long)]
    level: Option<String>,

    /// Customer category.
    #[arg(short, long, required_unless_present = "list")]
    category: Option<String>,

    /// Rental length in months (1, 2, 3, 6 or 12; anything else prices as 1).
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    months: i64,

    /// Print the daily rate instead of a term price.
    #[arg(short, long, conflicts_with = "months")]
    daily: bool,

    /// Configuration file (TOML, JSON or YAML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// List distinct values instead of looking up a price.
    #[arg(long, value_enum)]
    list: Option<Listing>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Listing {
    Sizes,
    Levels,
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config =
        PricingConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_tracing(config.log_format);

    let service = PricingService::from_config(&config).context("failed to set up tariff source")?;
    service
        .refresh()
        .await
        .context("failed to load tariff table")?;

    if let Some(listing) = cli.list {
        let values = match listing {
            Listing::Sizes => service.available_sizes(),
            Listing::Levels => service.available_levels(),
            Listing::Categories => service.load_customer_categories().await,
        };
        for value in values {
            println!("{value}");
        }
        return Ok(());
    }

    let category = cli.category.unwrap_or_default();
    let price = if cli.daily {
        service.daily_price(&cli.size, cli.level.as_deref(), &category)
    } else {
        service.term_price(&cli.size, cli.level.as_deref(), &category, cli.months)
    };

    match price {
        Some(price) => println!("{price}"),
        None => println!("not available"),
    }
    Ok(())
}
