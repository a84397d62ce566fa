//! Scripted collaborator doubles for testing the coffee machine.
//!
//! Each double returns a preconfigured answer and records how it was called:
//! - [`StubRecipeCatalog`]: fixed recipe (or none), counts lookups
//! - [`ScriptedGrinder`]: fixed [`GrindOutcome`], records orders
//! - [`ScriptedMilkProvider`]: optional heater fault and [`PourBehavior`],
//!   records every call in order

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Locks only panic if a test thread already panicked

use coffee_machine_core::{
    BeanGrinder, CoffeeType, GrinderFault, HeaterFault, MilkProvider, Order, Recipe,
    RecipeCatalog,
};
use std::sync::Mutex;

/// Recipe catalog that answers every lookup with the same recipe.
///
/// # Example
///
/// ```
/// use coffee_machine_testing::{basic_recipe, StubRecipeCatalog};
/// use coffee_machine_core::{CoffeeType, RecipeCatalog};
///
/// let catalog = StubRecipeCatalog::returning(basic_recipe());
/// assert!(catalog.recipe(CoffeeType::Espresso).is_some());
/// assert_eq!(catalog.lookups(), vec![CoffeeType::Espresso]);
/// ```
#[derive(Debug, Default)]
pub struct StubRecipeCatalog {
    recipe: Mutex<Option<Recipe>>,
    lookups: Mutex<Vec<CoffeeType>>,
}

impl StubRecipeCatalog {
    /// Catalog that returns `recipe` for any drink
    #[must_use]
    pub fn returning(recipe: Recipe) -> Self {
        Self {
            recipe: Mutex::new(Some(recipe)),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Catalog with no recipes at all
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the recipe returned from now on
    pub fn set_recipe(&self, recipe: Option<Recipe>) {
        *self.recipe.lock().unwrap() = recipe;
    }

    /// Drink types looked up so far, in call order
    #[must_use]
    pub fn lookups(&self) -> Vec<CoffeeType> {
        self.lookups.lock().unwrap().clone()
    }

    /// Number of lookups so far
    #[must_use]
    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }
}

impl RecipeCatalog for StubRecipeCatalog {
    fn recipe(&self, coffee_type: CoffeeType) -> Option<Recipe> {
        self.lookups.lock().unwrap().push(coffee_type);
        self.recipe.lock().unwrap().clone()
    }
}

/// What a [`ScriptedGrinder`] answers
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GrindOutcome {
    /// Beans were ground (`Ok(true)`)
    Ground,
    /// Nothing to grind (`Ok(false)`)
    NoBeans,
    /// Hardware fault with the given reason
    Fault(String),
}

/// Grinder that always gives the same [`GrindOutcome`].
#[derive(Debug)]
pub struct ScriptedGrinder {
    outcome: Mutex<GrindOutcome>,
    orders: Mutex<Vec<Order>>,
}

impl ScriptedGrinder {
    /// Grinder with the given outcome
    #[must_use]
    pub const fn new(outcome: GrindOutcome) -> Self {
        Self {
            outcome: Mutex::new(outcome),
            orders: Mutex::new(Vec::new()),
        }
    }

    /// Grinder that always succeeds
    #[must_use]
    pub const fn grinding() -> Self {
        Self::new(GrindOutcome::Ground)
    }

    /// Change the outcome for later calls
    pub fn set_outcome(&self, outcome: GrindOutcome) {
        *self.outcome.lock().unwrap() = outcome;
    }

    /// Number of grind attempts
    #[must_use]
    pub fn grind_count(&self) -> usize {
        self.orders.lock().unwrap().len()
    }

    /// Orders passed to `grind`, in call order
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.orders.lock().unwrap().clone()
    }
}

impl Default for ScriptedGrinder {
    fn default() -> Self {
        Self::grinding()
    }
}

impl BeanGrinder for ScriptedGrinder {
    fn grind(&self, order: &Order) -> Result<bool, GrinderFault> {
        self.orders.lock().unwrap().push(*order);
        match &*self.outcome.lock().unwrap() {
            GrindOutcome::Ground => Ok(true),
            GrindOutcome::NoBeans => Ok(false),
            GrindOutcome::Fault(reason) => Err(GrinderFault::new(reason.clone())),
        }
    }
}

/// How much a [`ScriptedMilkProvider`] pours
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PourBehavior {
    /// Pour exactly what was requested
    Full,
    /// Return this amount regardless of the request
    Fixed(u32),
}

/// A call made on a [`ScriptedMilkProvider`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MilkCall {
    /// `heat()` was called
    Heat,
    /// `pour(amount)` was called
    Pour(u32),
}

/// Milk provider with a scripted heater and pour.
#[derive(Debug)]
pub struct ScriptedMilkProvider {
    heater_fault: Mutex<Option<String>>,
    pour: Mutex<PourBehavior>,
    calls: Mutex<Vec<MilkCall>>,
}

impl ScriptedMilkProvider {
    /// Provider that heats fine and pours in full
    #[must_use]
    pub const fn new() -> Self {
        Self {
            heater_fault: Mutex::new(None),
            pour: Mutex::new(PourBehavior::Full),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Provider whose heater always faults
    #[must_use]
    pub fn broken_heater(reason: impl Into<String>) -> Self {
        let provider = Self::new();
        provider.set_heater_fault(Some(reason.into()));
        provider
    }

    /// Set or clear the heater fault
    pub fn set_heater_fault(&self, reason: Option<String>) {
        *self.heater_fault.lock().unwrap() = reason;
    }

    /// Change how much gets poured
    pub fn set_pour(&self, behavior: PourBehavior) {
        *self.pour.lock().unwrap() = behavior;
    }

    /// Every call so far, in order
    #[must_use]
    pub fn calls(&self) -> Vec<MilkCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of `heat` calls
    #[must_use]
    pub fn heat_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, MilkCall::Heat))
            .count()
    }

    /// Amounts requested from `pour`, in call order
    #[must_use]
    pub fn pour_requests(&self) -> Vec<u32> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                MilkCall::Pour(amount) => Some(amount),
                MilkCall::Heat => None,
            })
            .collect()
    }

    /// Check if the provider was never touched
    #[must_use]
    pub fn untouched(&self) -> bool {
        self.calls.lock().unwrap().is_empty()
    }
}

impl Default for ScriptedMilkProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MilkProvider for ScriptedMilkProvider {
    fn heat(&self) -> Result<(), HeaterFault> {
        self.calls.lock().unwrap().push(MilkCall::Heat);
        match &*self.heater_fault.lock().unwrap() {
            Some(reason) => Err(HeaterFault::new(reason.clone())),
            None => Ok(()),
        }
    }

    fn pour(&self, amount: u32) -> u32 {
        self.calls.lock().unwrap().push(MilkCall::Pour(amount));
        match *self.pour.lock().unwrap() {
            PourBehavior::Full => amount,
            PourBehavior::Fixed(poured) => poured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffee_machine_core::CoffeeSize;

    #[test]
    fn empty_catalog_has_nothing() {
        let catalog = StubRecipeCatalog::empty();
        assert!(catalog.recipe(CoffeeType::Latte).is_none());
        assert_eq!(catalog.lookup_count(), 1);
    }

    #[test]
    fn grinder_follows_script() {
        let order = Order::new(CoffeeSize::Small, CoffeeType::Espresso);
        let grinder = ScriptedGrinder::grinding();
        assert_eq!(grinder.grind(&order), Ok(true));

        grinder.set_outcome(GrindOutcome::NoBeans);
        assert_eq!(grinder.grind(&order), Ok(false));

        grinder.set_outcome(GrindOutcome::Fault("jammed".to_string()));
        assert_eq!(grinder.grind(&order), Err(GrinderFault::new("jammed")));

        assert_eq!(grinder.grind_count(), 3);
        assert_eq!(grinder.orders(), vec![order; 3]);
    }

    #[test]
    fn milk_provider_records_calls_in_order() {
        let milk = ScriptedMilkProvider::new();
        assert!(milk.untouched());
        assert!(milk.heat().is_ok());
        assert_eq!(milk.pour(10), 10);

        milk.set_pour(PourBehavior::Fixed(4));
        assert_eq!(milk.pour(10), 4);

        assert_eq!(
            milk.calls(),
            vec![MilkCall::Heat, MilkCall::Pour(10), MilkCall::Pour(10)]
        );
        assert_eq!(milk.heat_count(), 1);
        assert_eq!(milk.pour_requests(), vec![10, 10]);
    }

    #[test]
    fn broken_heater_faults() {
        let milk = ScriptedMilkProvider::broken_heater("no power");
        assert_eq!(milk.heat(), Err(HeaterFault::new("no power")));
    }
}
