//! Property tests for order processing

#![allow(clippy::unwrap_used)] // Tests can unwrap

use coffee_machine_core::{CoffeeMachine, Status};
use coffee_machine_testing::properties::{any_order, any_recipe, recipe_with_milk_in};
use coffee_machine_testing::{
    GrindOutcome, MilkCall, PourBehavior, ScriptedGrinder, ScriptedMilkProvider,
    StubRecipeCatalog,
};
use proptest::prelude::*;
use std::sync::Arc;

fn machine(
    grinder: &Arc<ScriptedGrinder>,
    milk: &Arc<ScriptedMilkProvider>,
    catalog: &Arc<StubRecipeCatalog>,
) -> CoffeeMachine {
    CoffeeMachine::new(grinder.clone(), milk.clone(), catalog.clone())
}

fn any_grind_outcome() -> impl Strategy<Value = GrindOutcome> {
    prop_oneof![
        Just(GrindOutcome::Ground),
        Just(GrindOutcome::NoBeans),
        "[a-z ]{1,12}".prop_map(GrindOutcome::Fault),
    ]
}

proptest! {
    #[test]
    fn missing_recipe_never_reaches_hardware(order in any_order()) {
        let grinder = Arc::new(ScriptedGrinder::grinding());
        let milk = Arc::new(ScriptedMilkProvider::new());
        let catalog = Arc::new(StubRecipeCatalog::empty());

        let coffee = machine(&grinder, &milk, &catalog).make(&order);

        prop_assert_eq!(coffee.status(), Status::Error);
        prop_assert!(coffee.message().is_some_and(|m| !m.is_empty()));
        prop_assert_eq!(grinder.grind_count(), 0);
        prop_assert!(milk.untouched());
    }

    #[test]
    fn no_beans_has_fixed_message(order in any_order(), recipe in any_recipe()) {
        let grinder = Arc::new(ScriptedGrinder::new(GrindOutcome::NoBeans));
        let milk = Arc::new(ScriptedMilkProvider::new());
        let catalog = Arc::new(StubRecipeCatalog::returning(recipe));

        let coffee = machine(&grinder, &milk, &catalog).make(&order);

        prop_assert_eq!(coffee.status(), Status::Error);
        prop_assert_eq!(coffee.message(), Some("no coffee beans available"));
        prop_assert!(milk.untouched());
    }

    #[test]
    fn black_coffee_skips_milk(order in any_order(), recipe in recipe_with_milk_in(Just(0))) {
        let grinder = Arc::new(ScriptedGrinder::grinding());
        let milk = Arc::new(ScriptedMilkProvider::new());
        let catalog = Arc::new(StubRecipeCatalog::returning(recipe.clone()));

        let coffee = machine(&grinder, &milk, &catalog).make(&order);

        prop_assert_eq!(coffee.status(), Status::Ready);
        prop_assert_eq!(coffee.milk_amount(), 0);
        prop_assert_eq!(Some(coffee.water_amount()), recipe.water_amount(order.size()));
        prop_assert!(milk.untouched());
    }

    #[test]
    fn milk_is_heated_then_poured_once(
        order in any_order(),
        recipe in recipe_with_milk_in(1u32..300),
        poured_fraction in 0u32..=100,
    ) {
        let requested = recipe.milk_amount();
        let poured = requested * poured_fraction / 100;
        let grinder = Arc::new(ScriptedGrinder::grinding());
        let milk = Arc::new(ScriptedMilkProvider::new());
        milk.set_pour(PourBehavior::Fixed(poured));
        let catalog = Arc::new(StubRecipeCatalog::returning(recipe.clone()));

        let coffee = machine(&grinder, &milk, &catalog).make(&order);

        prop_assert_eq!(coffee.status(), Status::Ready);
        prop_assert_eq!(milk.calls(), vec![MilkCall::Heat, MilkCall::Pour(requested)]);
        prop_assert_eq!(coffee.milk_amount(), poured);
        prop_assert_eq!(coffee.water_amount(), recipe.water_amount(order.size()).unwrap());
    }

    #[test]
    fn heater_fault_never_pours(order in any_order(), recipe in recipe_with_milk_in(1u32..300)) {
        let grinder = Arc::new(ScriptedGrinder::grinding());
        let milk = Arc::new(ScriptedMilkProvider::broken_heater("element failure"));
        let catalog = Arc::new(StubRecipeCatalog::returning(recipe));

        let coffee = machine(&grinder, &milk, &catalog).make(&order);

        prop_assert_eq!(coffee.status(), Status::Error);
        prop_assert!(milk.pour_requests().is_empty());
    }

    #[test]
    fn grind_happens_exactly_once(
        order in any_order(),
        recipe in any_recipe(),
        outcome in any_grind_outcome(),
        heater_broken in any::<bool>(),
    ) {
        let grinder = Arc::new(ScriptedGrinder::new(outcome));
        let milk = Arc::new(ScriptedMilkProvider::new());
        if heater_broken {
            milk.set_heater_fault(Some("broken".to_string()));
        }
        let catalog = Arc::new(StubRecipeCatalog::returning(recipe));

        let _ = machine(&grinder, &milk, &catalog).make(&order);

        prop_assert_eq!(grinder.grind_count(), 1);
    }

    #[test]
    fn message_present_iff_error(
        order in any_order(),
        recipe in proptest::option::of(any_recipe()),
        outcome in any_grind_outcome(),
        heater_broken in any::<bool>(),
    ) {
        let grinder = Arc::new(ScriptedGrinder::new(outcome));
        let milk = Arc::new(ScriptedMilkProvider::new());
        if heater_broken {
            milk.set_heater_fault(Some("broken".to_string()));
        }
        let catalog = Arc::new(StubRecipeCatalog::empty());
        catalog.set_recipe(recipe);

        let coffee = machine(&grinder, &milk, &catalog).make(&order);

        prop_assert_eq!(coffee.message().is_some(), coffee.status() == Status::Error);
        if !coffee.is_ready() {
            prop_assert_eq!(coffee.water_amount(), 0);
            prop_assert_eq!(coffee.milk_amount(), 0);
        }
    }
}
