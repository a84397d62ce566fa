//! # Coffee Machine Testing
//!
//! Testing utilities and helpers for the coffee machine.
//!
//! This crate provides:
//! - Scripted doubles for the collaborator traits, recording every call
//! - A Given-When-Then harness for single orders
//! - Fixtures for the common order and recipe
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```
//! use coffee_machine_testing::{basic_order, ScriptedGrinder, ScriptedMilkProvider, StubRecipeCatalog};
//! use coffee_machine_testing::fixtures::recipe_with_milk;
//! use coffee_machine_core::CoffeeMachine;
//! use std::sync::Arc;
//!
//! let grinder = Arc::new(ScriptedGrinder::grinding());
//! let milk = Arc::new(ScriptedMilkProvider::new());
//! let catalog = Arc::new(StubRecipeCatalog::returning(recipe_with_milk(10)));
//! let machine = CoffeeMachine::new(grinder.clone(), milk.clone(), catalog);
//!
//! let coffee = machine.make(&basic_order());
//! assert!(coffee.is_ready());
//! assert_eq!(milk.heat_count(), 1);
//! assert_eq!(milk.pour_requests(), vec![10]);
//! ```

pub mod mocks;

/// Fixtures shared across tests
pub mod fixtures {
    use coffee_machine_core::{CoffeeSize, CoffeeType, Order, Recipe};
    use std::collections::HashMap;

    /// Water for a standard cup in [`basic_recipe`]
    pub const BASIC_WATER: u32 = 10;

    /// A standard espresso
    #[must_use]
    pub const fn basic_order() -> Order {
        Order::new(CoffeeSize::Standard, CoffeeType::Espresso)
    }

    /// Standard-size-only recipe with 10 water and no milk
    #[must_use]
    pub fn basic_recipe() -> Recipe {
        recipe_with_milk(0)
    }

    /// Standard-size-only recipe with 10 water and the given milk
    #[must_use]
    pub fn recipe_with_milk(milk_amount: u32) -> Recipe {
        Recipe::new(
            HashMap::from([(CoffeeSize::Standard, BASIC_WATER)]),
            milk_amount,
        )
    }
}

/// Test helpers and utilities
pub mod helpers {
    use tracing_subscriber::EnvFilter;

    /// Route `tracing` output through the test harness
    ///
    /// Honors `RUST_LOG`. Safe to call from every test; only the first call
    /// installs the subscriber.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use coffee_machine_core::{CoffeeSize, CoffeeType, Order, Recipe};
    use proptest::prelude::*;
    use std::collections::HashMap;

    /// Any cup size
    pub fn any_size() -> impl Strategy<Value = CoffeeSize> {
        prop::sample::select(CoffeeSize::ALL.to_vec())
    }

    /// Any drink type
    pub fn any_coffee_type() -> impl Strategy<Value = CoffeeType> {
        prop::sample::select(CoffeeType::ALL.to_vec())
    }

    /// Any order
    pub fn any_order() -> impl Strategy<Value = Order> {
        (any_size(), any_coffee_type()).prop_map(|(size, kind)| Order::new(size, kind))
    }

    /// Water amounts for every size
    pub fn full_water_amounts() -> impl Strategy<Value = HashMap<CoffeeSize, u32>> {
        prop::collection::vec(1u32..500, CoffeeSize::ALL.len())
            .prop_map(|amounts| CoffeeSize::ALL.into_iter().zip(amounts).collect())
    }

    /// Recipe covering every size, milk drawn from `milk`
    pub fn recipe_with_milk_in(
        milk: impl Strategy<Value = u32>,
    ) -> impl Strategy<Value = Recipe> {
        (full_water_amounts(), milk).prop_map(|(water, milk)| Recipe::new(water, milk))
    }

    /// Recipe covering every size, with or without milk
    pub fn any_recipe() -> impl Strategy<Value = Recipe> {
        recipe_with_milk_in(0u32..300)
    }
}

// Re-export commonly used items
pub use fixtures::{basic_order, basic_recipe};
pub use helpers::init_test_tracing;
pub use machine_test::{MachineTest, assertions};
pub use mocks::{
    GrindOutcome, MilkCall, PourBehavior, ScriptedGrinder, ScriptedMilkProvider,
    StubRecipeCatalog,
};
