//! The coffee machine: turns an [`Order`] into a [`Coffee`].
//!
//! Every order goes through the same single pass:
//!
//! 1. Look up the recipe for the drink type
//! 2. Grind beans, exactly once
//! 3. If the recipe needs milk, heat it and then pour it
//! 4. Resolve the water amount for the cup size
//!
//! The first failing step ends the order. Nothing is retried, and no fault
//! escapes [`CoffeeMachine::make`]; failures come back as an error coffee.

use crate::environment::{BeanGrinder, MilkProvider, RecipeCatalog};
use crate::error::MakeError;
use crate::types::{Coffee, Order};
use std::sync::Arc;

/// Order processor coordinating the grinder, milk provider and recipe catalog
#[derive(Clone)]
pub struct CoffeeMachine {
    grinder: Arc<dyn BeanGrinder>,
    milk_provider: Arc<dyn MilkProvider>,
    recipes: Arc<dyn RecipeCatalog>,
}

impl CoffeeMachine {
    /// Creates a new coffee machine from its collaborators
    pub fn new(
        grinder: Arc<dyn BeanGrinder>,
        milk_provider: Arc<dyn MilkProvider>,
        recipes: Arc<dyn RecipeCatalog>,
    ) -> Self {
        Self {
            grinder,
            milk_provider,
            recipes,
        }
    }

    /// Processes an order
    ///
    /// Always returns a coffee. On failure its status is
    /// [`Status::Error`](crate::Status::Error) and the message says why.
    #[tracing::instrument(skip(self), name = "make_coffee", fields(size = %order.size(), coffee_type = %order.coffee_type()))]
    pub fn make(&self, order: &Order) -> Coffee {
        match self.try_make(order) {
            Ok(coffee) => coffee,
            Err(error) => {
                if error.is_fault() {
                    tracing::warn!(%error, "Order failed");
                } else {
                    tracing::info!(%error, "Order could not be fulfilled");
                }
                Coffee::error(error.to_string())
            },
        }
    }

    /// Processes an order, keeping the failure kind
    ///
    /// Same procedure and side effects as [`make`](Self::make), but returns
    /// the typed error instead of folding it into the coffee. Does not log
    /// failures; that is left to the caller.
    ///
    /// # Errors
    ///
    /// - [`MakeError::RecipeMissing`] if the catalog has no recipe for the drink
    /// - [`MakeError::NoBeans`] if the grinder produced nothing
    /// - [`MakeError::Grinder`] if the grinder faulted
    /// - [`MakeError::Heater`] if heating the milk faulted
    /// - [`MakeError::MissingWaterAmount`] if the recipe lacks the ordered size
    pub fn try_make(&self, order: &Order) -> Result<Coffee, MakeError> {
        let coffee_type = order.coffee_type();
        let recipe = self
            .recipes
            .recipe(coffee_type)
            .ok_or(MakeError::RecipeMissing(coffee_type))?;

        if !self.grinder.grind(order)? {
            return Err(MakeError::NoBeans);
        }

        let milk_amount = if recipe.requires_milk() {
            self.milk_provider.heat()?;
            let requested = recipe.milk_amount();
            let poured = self.milk_provider.pour(requested);
            if poured < requested {
                tracing::debug!(requested, poured, "Poured less milk than requested");
            }
            poured
        } else {
            0
        };

        let size = order.size();
        let water_amount = recipe
            .water_amount(size)
            .ok_or(MakeError::MissingWaterAmount { coffee_type, size })?;

        tracing::debug!(water_amount, milk_amount, "Coffee ready");
        Ok(Coffee::ready(water_amount, milk_amount))
    }
}

impl std::fmt::Debug for CoffeeMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoffeeMachine").finish_non_exhaustive()
    }
}
