//! Configuration management for the coffee order demo.
//!
//! Loads configuration from environment variables with sensible defaults.

use coffee_machine_core::{CoffeeSize, CoffeeType, ParseError};
use std::env;
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `COFFEE_SIZE` or `COFFEE_TYPE` holds an unknown value
    #[error("invalid {key}: {source}")]
    InvalidOrder {
        /// Variable that failed to parse
        key: &'static str,
        /// Underlying parse failure
        #[source]
        source: ParseError,
    },
}

/// Demo configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// What to order
    pub order: OrderConfig,
    /// Simulated grinder
    pub grinder: GrinderConfig,
    /// Simulated milk tank
    pub milk: MilkConfig,
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
}

/// Order configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfig {
    /// Cup size
    pub size: CoffeeSize,
    /// Drink type
    pub coffee_type: CoffeeType,
    /// How many identical orders to place, one after another
    pub count: u32,
}

/// Grinder configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrinderConfig {
    /// Beans in the hopper, in grams
    pub bean_stock: u32,
    /// Beans used per grind, in grams
    pub dose: u32,
    /// Simulate a mechanical jam
    pub jammed: bool,
}

/// Milk configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilkConfig {
    /// Milk in the tank, in ml
    pub stock: u32,
    /// Whether the heater works
    pub heater_working: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `COFFEE_SIZE` or `COFFEE_TYPE` is set to an
    /// unknown value. Other malformed values fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parsed = |key: &str, default: u32| -> u32 {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        };
        let flag = |key: &str, default: bool| -> bool {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        };

        let size = match lookup("COFFEE_SIZE") {
            Some(raw) => raw.parse().map_err(|source| ConfigError::InvalidOrder {
                key: "COFFEE_SIZE",
                source,
            })?,
            None => CoffeeSize::Standard,
        };
        let coffee_type = match lookup("COFFEE_TYPE") {
            Some(raw) => raw.parse().map_err(|source| ConfigError::InvalidOrder {
                key: "COFFEE_TYPE",
                source,
            })?,
            None => CoffeeType::Espresso,
        };

        Ok(Self {
            order: OrderConfig {
                size,
                coffee_type,
                count: parsed("COFFEE_ORDER_COUNT", 1),
            },
            grinder: GrinderConfig {
                bean_stock: parsed("COFFEE_BEAN_STOCK", 100),
                dose: parsed("COFFEE_BEAN_DOSE", 18),
                jammed: flag("COFFEE_GRINDER_JAMMED", false),
            },
            milk: MilkConfig {
                stock: parsed("COFFEE_MILK_STOCK", 500),
                heater_working: flag("COFFEE_HEATER_WORKING", true),
            },
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
