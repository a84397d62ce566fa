//! Coffee order demo binary.
//!
//! Places the configured order against simulated hardware and prints each
//! result as a JSON line on stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin coffee-order
//! COFFEE_TYPE=cappuccino COFFEE_HEATER_WORKING=false cargo run --bin coffee-order
//! RUST_LOG=debug COFFEE_BEAN_STOCK=40 COFFEE_ORDER_COUNT=3 cargo run --bin coffee-order
//! ```

use anyhow::Context;
use coffee_order::{Config, Station};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        size = %config.order.size,
        coffee_type = %config.order.coffee_type,
        count = config.order.count,
        "Placing orders"
    );

    let station = Station::from_config(&config);
    let coffees = station.serve(&config);

    for coffee in &coffees {
        println!("{}", serde_json::to_string(coffee).context("Failed to encode result")?);
    }

    let ready = coffees.iter().filter(|coffee| coffee.is_ready()).count();
    info!(
        ready,
        failed = coffees.len() - ready,
        beans_left = station.hopper.remaining(),
        milk_left = station.tank.remaining(),
        "Done"
    );

    Ok(())
}
