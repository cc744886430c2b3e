//! `shipcalc` command-line front end: wires the reference collaborators from
//! configuration and prints a priced breakdown.

pub mod config;

use anyhow::Context;

use shipcalc_catalog::InMemoryProductStore;
use shipcalc_currency::CurrencyCode;
use shipcalc_pricing::{OrderCalculator, PricingMode, ProductOrder, Quote};

pub use config::QuoteConfig;

/// Parse `SKU:QTY` arguments into orders, keeping their order.
pub fn parse_orders<I, A>(args: I) -> anyhow::Result<Vec<ProductOrder>>
where
    I: IntoIterator<Item = A>,
    A: AsRef<str>,
{
    args.into_iter()
        .map(|arg| {
            let arg = arg.as_ref();
            arg.parse::<ProductOrder>()
                .with_context(|| format!("invalid order argument {arg:?}"))
        })
        .collect()
}

/// Price `orders` against the catalog document `catalog_json`.
pub fn quote(
    config: &QuoteConfig,
    catalog_json: &str,
    orders: &[ProductOrder],
) -> anyhow::Result<Quote> {
    let store = InMemoryProductStore::from_json_str(catalog_json)
        .with_context(|| format!("loading catalog {}", config.catalog_path.display()))?;
    let calculator = OrderCalculator::new(store, config.shipping()?, config.converter()?);
    let quote = calculator.quote(orders)?;
    Ok(quote)
}

/// Human-readable breakdown of a quote.
pub fn render(quote: &Quote, currency: &CurrencyCode) -> String {
    let mode = match quote.mode {
        PricingMode::Retail => "retail",
        PricingMode::Wholesale => "wholesale",
    };
    format!(
        "units:    {units} ({mode} pricing)\n\
         items:    {items}\n\
         parcel:   weight {weight} / volume {volume}\n\
         shipping: {shipping}\n\
         total:    {total:.2} {currency}\n",
        units = quote.total_quantity,
        items = quote.subtotal.normalize(),
        weight = quote.parcel.weight().normalize(),
        volume = quote.parcel.volume().normalize(),
        shipping = quote.shipping_cost.normalize(),
        total = quote.total,
    )
}
