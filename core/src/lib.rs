//! # Coffee Machine Core
//!
//! Order fulfillment for a single coffee machine.
//!
//! An order (size and drink type) goes in, a [`Coffee`] comes out. Along the
//! way the [`CoffeeMachine`] consults three injected collaborators:
//!
//! - **[`RecipeCatalog`]**: water per size and milk per drink
//! - **[`BeanGrinder`]**: grinds beans, may report an empty hopper or a fault
//! - **[`MilkProvider`]**: heats milk (may fault) and pours it
//!
//! Every failure, expected or not, comes back as a coffee with
//! [`Status::Error`] and a message. Nothing panics and no error escapes
//! [`CoffeeMachine::make`].
//!
//! ## Example
//!
//! ```
//! use coffee_machine_core::{
//!     BeanGrinder, CoffeeMachine, CoffeeSize, CoffeeType, GrinderFault, HeaterFault,
//!     InMemoryRecipeCatalog, MilkProvider, Order, Status,
//! };
//! use std::sync::Arc;
//!
//! struct AlwaysGrinds;
//! impl BeanGrinder for AlwaysGrinds {
//!     fn grind(&self, _order: &Order) -> Result<bool, GrinderFault> {
//!         Ok(true)
//!     }
//! }
//!
//! struct EndlessMilk;
//! impl MilkProvider for EndlessMilk {
//!     fn heat(&self) -> Result<(), HeaterFault> {
//!         Ok(())
//!     }
//!     fn pour(&self, amount: u32) -> u32 {
//!         amount
//!     }
//! }
//!
//! let machine = CoffeeMachine::new(
//!     Arc::new(AlwaysGrinds),
//!     Arc::new(EndlessMilk),
//!     Arc::new(InMemoryRecipeCatalog::standard_menu()),
//! );
//!
//! let coffee = machine.make(&Order::new(CoffeeSize::Standard, CoffeeType::Latte));
//! assert_eq!(coffee.status(), Status::Ready);
//! assert_eq!(coffee.milk_amount(), 200);
//! ```

pub mod catalog;
pub mod environment;
pub mod error;
pub mod machine;
pub mod types;

// Re-export commonly used types
pub use catalog::InMemoryRecipeCatalog;
pub use environment::{BeanGrinder, MilkProvider, RecipeCatalog};
pub use error::{GrinderFault, HeaterFault, MakeError, ParseError};
pub use machine::CoffeeMachine;
pub use types::{Coffee, CoffeeSize, CoffeeType, Order, Recipe, Status};
