use anyhow::Context;

use shipcalc_cli::{parse_orders, quote, render, QuoteConfig};

fn main() -> anyhow::Result<()> {
    shipcalc_observability::init();

    let orders = parse_orders(std::env::args().skip(1))?;
    if orders.is_empty() {
        tracing::warn!("no orders given; usage: shipcalc SKU:QTY [SKU:QTY ...]");
    }

    let config = QuoteConfig::from_env()?;
    let catalog = std::fs::read_to_string(&config.catalog_path)
        .with_context(|| format!("reading catalog {}", config.catalog_path.display()))?;

    let quote = quote(&config, &catalog, &orders)?;
    print!("{}", render(&quote, &config.currency));
    Ok(())
}
