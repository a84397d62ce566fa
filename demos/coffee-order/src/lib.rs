//! Coffee order demo.
//!
//! Runs the [`CoffeeMachine`] against simulated hardware configured from
//! environment variables:
//!
//! - `COFFEE_SIZE`, `COFFEE_TYPE`, `COFFEE_ORDER_COUNT`: what to order
//! - `COFFEE_BEAN_STOCK`, `COFFEE_BEAN_DOSE`, `COFFEE_GRINDER_JAMMED`: the grinder
//! - `COFFEE_MILK_STOCK`, `COFFEE_HEATER_WORKING`: the milk tank
//!
//! # Example Usage
//!
//! ```bash
//! COFFEE_TYPE=latte COFFEE_ORDER_COUNT=4 COFFEE_MILK_STOCK=500 cargo run --bin coffee-order
//! ```

pub mod config;
pub mod simulated;

pub use config::{Config, ConfigError};
pub use simulated::{BeanHopper, MilkTank};

use coffee_machine_core::{Coffee, CoffeeMachine, InMemoryRecipeCatalog, Order};
use std::sync::Arc;

/// Machine wired to simulated hardware and the standard menu
#[derive(Debug)]
pub struct Station {
    /// The machine taking orders
    pub machine: CoffeeMachine,
    /// Simulated grinder, kept for stock reporting
    pub hopper: Arc<BeanHopper>,
    /// Simulated milk tank, kept for stock reporting
    pub tank: Arc<MilkTank>,
}

impl Station {
    /// Builds a station from configuration
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let hopper = Arc::new(BeanHopper::from(&config.grinder));
        let tank = Arc::new(MilkTank::from(&config.milk));
        let machine = CoffeeMachine::new(
            hopper.clone(),
            tank.clone(),
            Arc::new(InMemoryRecipeCatalog::standard_menu()),
        );
        Self {
            machine,
            hopper,
            tank,
        }
    }

    /// Places the configured order `count` times, in sequence
    #[must_use]
    pub fn serve(&self, config: &Config) -> Vec<Coffee> {
        let order = Order::new(config.order.size, config.order.coffee_type);
        (0..config.order.count)
            .map(|_| self.machine.make(&order))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;
    use coffee_machine_core::{CoffeeSize, CoffeeType, Status};
    use coffee_machine_testing::assertions;
    use coffee_machine_testing::init_test_tracing;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
    }

    #[test]
    fn default_station_serves_an_espresso() {
        init_test_tracing();
        let config = config(&[]);
        let station = Station::from_config(&config);

        let coffees = station.serve(&config);
        assert_eq!(coffees.len(), 1);
        assertions::assert_ready(&coffees[0], 30, 0);
        assert_eq!(station.hopper.remaining(), 82);
        assert_eq!(station.tank.remaining(), 500);
    }

    #[test]
    fn beans_run_out_mid_run() {
        init_test_tracing();
        let config = config(&[("COFFEE_BEAN_STOCK", "40"), ("COFFEE_ORDER_COUNT", "3")]);
        let station = Station::from_config(&config);

        let statuses: Vec<Status> = station.serve(&config).iter().map(Coffee::status).collect();
        assert_eq!(statuses, vec![Status::Ready, Status::Ready, Status::Error]);
    }

    #[test]
    fn last_latte_gets_what_milk_is_left() {
        init_test_tracing();
        let config = config(&[
            ("COFFEE_TYPE", "latte"),
            ("COFFEE_SIZE", "small"),
            ("COFFEE_MILK_STOCK", "300"),
            ("COFFEE_ORDER_COUNT", "2"),
        ]);
        let station = Station::from_config(&config);

        let coffees = station.serve(&config);
        assertions::assert_ready(&coffees[0], 30, 200);
        assertions::assert_ready(&coffees[1], 30, 100);
        assert_eq!(station.tank.remaining(), 0);
    }

    #[test]
    fn broken_heater_fails_milk_drinks_only() {
        init_test_tracing();
        let mut config = config(&[("COFFEE_HEATER_WORKING", "false")]);
        let station = Station::from_config(&config);

        config.order.coffee_type = CoffeeType::Cappuccino;
        assertions::assert_error(&station.serve(&config)[0]);

        config.order.coffee_type = CoffeeType::Americano;
        config.order.size = CoffeeSize::Large;
        assertions::assert_ready(&station.serve(&config)[0], 240, 0);
    }
}
