//! Core domain types for the coffee machine.
//!
//! An [`Order`] names a size and a drink type, a [`Recipe`] says how much
//! water and milk that drink needs, and a [`Coffee`] is what comes out of the
//! machine: either a ready beverage or an error message.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Cup size of an order
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoffeeSize {
    /// Small cup
    Small,
    /// Standard cup
    Standard,
    /// Large cup
    Large,
    /// Extra large cup
    ExtraLarge,
}

impl CoffeeSize {
    /// All sizes, smallest first
    pub const ALL: [Self; 4] = [Self::Small, Self::Standard, Self::Large, Self::ExtraLarge];

    /// Returns the snake_case name of the size
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Standard => "standard",
            Self::Large => "large",
            Self::ExtraLarge => "extra_large",
        }
    }
}

impl fmt::Display for CoffeeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoffeeSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownSize(s.to_string()))
    }
}

/// Kind of drink being ordered
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoffeeType {
    /// Straight espresso shot
    Espresso,
    /// Espresso diluted with hot water
    Americano,
    /// Espresso with steamed milk and foam
    Cappuccino,
    /// Espresso with a larger amount of steamed milk
    Latte,
}

impl CoffeeType {
    /// Every drink type the machine knows about
    pub const ALL: [Self; 4] = [Self::Espresso, Self::Americano, Self::Cappuccino, Self::Latte];

    /// Returns the snake_case name of the drink type
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Espresso => "espresso",
            Self::Americano => "americano",
            Self::Cappuccino => "cappuccino",
            Self::Latte => "latte",
        }
    }
}

impl fmt::Display for CoffeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoffeeType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownType(s.to_string()))
    }
}

/// Lowercases and maps `-` and spaces to `_` so `Extra-Large` parses
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c.to_ascii_lowercase() })
        .collect()
}

/// A customer request for one drink
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    size: CoffeeSize,
    coffee_type: CoffeeType,
}

impl Order {
    /// Creates a new order
    #[must_use]
    pub const fn new(size: CoffeeSize, coffee_type: CoffeeType) -> Self {
        Self { size, coffee_type }
    }

    /// Requested cup size
    #[must_use]
    pub const fn size(&self) -> CoffeeSize {
        self.size
    }

    /// Requested drink type
    #[must_use]
    pub const fn coffee_type(&self) -> CoffeeType {
        self.coffee_type
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.size, self.coffee_type)
    }
}

/// Water and milk quantities needed to prepare one drink type
///
/// Water depends on the cup size; milk does not. A milk amount of zero means
/// the drink is made without milk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    water_amounts: HashMap<CoffeeSize, u32>,
    milk_amount: u32,
}

impl Recipe {
    /// Creates a recipe from per-size water amounts and a milk amount
    #[must_use]
    pub const fn new(water_amounts: HashMap<CoffeeSize, u32>, milk_amount: u32) -> Self {
        Self {
            water_amounts,
            milk_amount,
        }
    }

    /// Creates a recipe that needs no milk
    #[must_use]
    pub const fn without_milk(water_amounts: HashMap<CoffeeSize, u32>) -> Self {
        Self::new(water_amounts, 0)
    }

    /// Water needed for the given size, if this recipe supports it
    #[must_use]
    pub fn water_amount(&self, size: CoffeeSize) -> Option<u32> {
        self.water_amounts.get(&size).copied()
    }

    /// Milk to pour, independent of size
    #[must_use]
    pub const fn milk_amount(&self) -> u32 {
        self.milk_amount
    }

    /// Whether milk has to be heated and poured
    #[must_use]
    pub const fn requires_milk(&self) -> bool {
        self.milk_amount > 0
    }

    /// Sizes this recipe has a water amount for, smallest first
    #[must_use]
    pub fn sizes(&self) -> Vec<CoffeeSize> {
        let mut sizes: Vec<CoffeeSize> = self.water_amounts.keys().copied().collect();
        sizes.sort_unstable();
        sizes
    }
}

/// Outcome of processing an order
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The drink was prepared
    Ready,
    /// The order failed; see the coffee's message
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "READY"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// What the machine hands back for an order
///
/// A message is present exactly when the status is [`Status::Error`]; the
/// constructors are the only way to build one, so that always holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Coffee {
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    water_amount: u32,
    milk_amount: u32,
}

impl Coffee {
    /// A prepared beverage
    #[must_use]
    pub const fn ready(water_amount: u32, milk_amount: u32) -> Self {
        Self {
            status: Status::Ready,
            message: None,
            water_amount,
            milk_amount,
        }
    }

    /// A failed order with a human-readable reason
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: Some(message.into()),
            water_amount: 0,
            milk_amount: 0,
        }
    }

    /// Final status of the order
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Error message, only set when the order failed
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Water in the cup (zero on error)
    #[must_use]
    pub const fn water_amount(&self) -> u32 {
        self.water_amount
    }

    /// Milk actually poured (zero on error or for black coffee)
    #[must_use]
    pub const fn milk_amount(&self) -> u32 {
        self.milk_amount
    }

    /// Checks if the coffee was prepared
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.status, Status::Ready)
    }
}

impl fmt::Display for Coffee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {message}", self.status),
            None => write!(
                f,
                "{} (water: {}, milk: {})",
                self.status, self.water_amount, self.milk_amount
            ),
        }
    }
}
