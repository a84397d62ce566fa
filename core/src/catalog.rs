//! In-memory recipe catalog.
//!
//! [`InMemoryRecipeCatalog`] keeps recipes in a `HashMap` behind an `RwLock`,
//! so it can be shared between machines and updated while in use.

use crate::environment::RecipeCatalog;
use crate::types::{CoffeeSize, CoffeeType, Recipe};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// HashMap-backed [`RecipeCatalog`]
///
/// # Example
///
/// ```
/// use coffee_machine_core::{CoffeeSize, CoffeeType, InMemoryRecipeCatalog, Recipe, RecipeCatalog};
/// use std::collections::HashMap;
///
/// let catalog = InMemoryRecipeCatalog::new();
/// catalog.insert(
///     CoffeeType::Espresso,
///     Recipe::without_milk(HashMap::from([(CoffeeSize::Standard, 30)])),
/// );
///
/// let recipe = catalog.recipe(CoffeeType::Espresso);
/// assert_eq!(recipe.and_then(|r| r.water_amount(CoffeeSize::Standard)), Some(30));
/// assert!(catalog.recipe(CoffeeType::Latte).is_none());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryRecipeCatalog {
    recipes: RwLock<HashMap<CoffeeType, Recipe>>,
}

impl InMemoryRecipeCatalog {
    /// Create a new empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with a recipe for every drink type
    ///
    /// Espresso and americano are black; cappuccino and latte take milk.
    #[must_use]
    pub fn standard_menu() -> Self {
        let catalog = Self::new();
        catalog.insert(
            CoffeeType::Espresso,
            Recipe::without_milk(water_by_size([25, 30, 45, 60])),
        );
        catalog.insert(
            CoffeeType::Americano,
            Recipe::without_milk(water_by_size([120, 180, 240, 300])),
        );
        catalog.insert(
            CoffeeType::Cappuccino,
            Recipe::new(water_by_size([30, 30, 60, 60]), 100),
        );
        catalog.insert(
            CoffeeType::Latte,
            Recipe::new(water_by_size([30, 30, 60, 60]), 200),
        );
        catalog
    }

    /// Add or replace the recipe for a drink type
    ///
    /// Returns the recipe it replaced, if any.
    pub fn insert(&self, coffee_type: CoffeeType, recipe: Recipe) -> Option<Recipe> {
        self.recipes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(coffee_type, recipe)
    }

    /// Take a drink off the menu
    pub fn remove(&self, coffee_type: CoffeeType) -> Option<Recipe> {
        self.recipes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&coffee_type)
    }

    /// Check if a drink type has a recipe
    #[must_use]
    pub fn contains(&self, coffee_type: CoffeeType) -> bool {
        self.recipes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&coffee_type)
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecipeCatalog for InMemoryRecipeCatalog {
    fn recipe(&self, coffee_type: CoffeeType) -> Option<Recipe> {
        self.recipes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&coffee_type)
            .cloned()
    }
}

fn water_by_size(amounts: [u32; 4]) -> HashMap<CoffeeSize, u32> {
    CoffeeSize::ALL.into_iter().zip(amounts).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let catalog = InMemoryRecipeCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.recipe(CoffeeType::Espresso).is_none());
    }

    #[test]
    fn insert_replace_and_remove() {
        let catalog = InMemoryRecipeCatalog::new();
        let first = Recipe::without_milk(HashMap::from([(CoffeeSize::Small, 20)]));
        let second = Recipe::without_milk(HashMap::from([(CoffeeSize::Small, 25)]));

        assert_eq!(catalog.insert(CoffeeType::Espresso, first.clone()), None);
        assert_eq!(catalog.insert(CoffeeType::Espresso, second.clone()), Some(first));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.recipe(CoffeeType::Espresso), Some(second.clone()));

        assert_eq!(catalog.remove(CoffeeType::Espresso), Some(second));
        assert!(!catalog.contains(CoffeeType::Espresso));
    }

    #[test]
    fn standard_menu_covers_every_type_and_size() {
        let catalog = InMemoryRecipeCatalog::standard_menu();
        assert_eq!(catalog.len(), CoffeeType::ALL.len());

        for kind in CoffeeType::ALL {
            let recipe = catalog.recipe(kind);
            assert!(recipe.is_some(), "missing recipe for {kind}");
            if let Some(recipe) = recipe {
                assert_eq!(recipe.sizes(), CoffeeSize::ALL.to_vec());
            }
        }
    }

    #[test]
    fn standard_menu_milk_drinks() {
        let catalog = InMemoryRecipeCatalog::standard_menu();
        let milky = |kind| catalog.recipe(kind).is_some_and(|r| r.requires_milk());

        assert!(!milky(CoffeeType::Espresso));
        assert!(!milky(CoffeeType::Americano));
        assert!(milky(CoffeeType::Cappuccino));
        assert!(milky(CoffeeType::Latte));
    }
}
