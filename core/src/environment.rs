//! Collaborator traits injected into the [`CoffeeMachine`](crate::CoffeeMachine).
//!
//! The machine never talks to hardware or storage directly. Everything it
//! needs is behind one of these traits, so tests substitute scripted doubles
//! and the demo substitutes simulated hardware.
//!
//! Implementations must be `Send + Sync`. When several orders are processed
//! concurrently on a shared machine, the implementations are responsible for
//! their own synchronization.

use crate::error::{GrinderFault, HeaterFault};
use crate::types::{CoffeeType, Order, Recipe};

/// Recipe lookup by drink type
///
/// Lookups should be free of side effects from the machine's point of view.
pub trait RecipeCatalog: Send + Sync {
    /// Returns the recipe for `coffee_type`, or `None` if the drink is not offered
    fn recipe(&self, coffee_type: CoffeeType) -> Option<Recipe>;
}

/// Bean grinder
pub trait BeanGrinder: Send + Sync {
    /// Grinds beans for `order`
    ///
    /// Returns `Ok(false)` when nothing could be ground (for example an empty
    /// hopper); that is an expected condition.
    ///
    /// # Errors
    ///
    /// Returns [`GrinderFault`] on an unexpected hardware failure.
    fn grind(&self, order: &Order) -> Result<bool, GrinderFault>;
}

/// Milk heater and dispenser
pub trait MilkProvider: Send + Sync {
    /// Heats the milk
    ///
    /// # Errors
    ///
    /// Returns [`HeaterFault`] if the milk could not be heated.
    fn heat(&self) -> Result<(), HeaterFault>;

    /// Pours up to `amount` of milk and returns what was actually poured
    ///
    /// The returned amount is never more than `amount`.
    fn pour(&self, amount: u32) -> u32;
}
