//! Error types for order processing.
//!
//! Collaborator faults ([`GrinderFault`], [`HeaterFault`]) are returned by the
//! hardware traits. [`MakeError`] is the full taxonomy of ways an order can
//! fail; the machine turns every variant into an error [`Coffee`](crate::Coffee).

use crate::types::{CoffeeSize, CoffeeType};
use thiserror::Error;

/// Unexpected hardware failure while grinding beans.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct GrinderFault {
    reason: String,
}

impl GrinderFault {
    /// Creates a new grinder fault with the given reason
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Description of the fault
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Unexpected failure while heating milk.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct HeaterFault {
    reason: String,
}

impl HeaterFault {
    /// Creates a new heater fault with the given reason
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Description of the fault
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Reasons an order can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MakeError {
    /// The catalog has no recipe for the requested drink.
    #[error("no recipe for {0}")]
    RecipeMissing(CoffeeType),

    /// The grinder ran but produced no grounds.
    ///
    /// Expected condition, usually an empty hopper.
    #[error("no coffee beans available")]
    NoBeans,

    /// The grinder reported a hardware fault.
    #[error("grinder failure: {0}")]
    Grinder(#[from] GrinderFault),

    /// Heating the milk failed.
    #[error("milk heating failure: {0}")]
    Heater(#[from] HeaterFault),

    /// The recipe has no water amount for the ordered size.
    #[error("recipe for {coffee_type} has no water amount for size {size}")]
    MissingWaterAmount {
        /// Drink whose recipe is incomplete
        coffee_type: CoffeeType,
        /// Size that was ordered
        size: CoffeeSize,
    },
}

impl MakeError {
    /// Whether this error came from a collaborator fault rather than a
    /// normal outcome like an empty hopper or unknown drink
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(
            self,
            Self::Grinder(_) | Self::Heater(_) | Self::MissingWaterAmount { .. }
        )
    }
}

/// Failure to parse a size or drink type from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not one of the known cup sizes
    #[error("unknown coffee size: {0}")]
    UnknownSize(String),

    /// Not one of the known drink types
    #[error("unknown coffee type: {0}")]
    UnknownType(String),
}
