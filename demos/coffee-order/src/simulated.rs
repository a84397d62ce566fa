//! Simulated hardware for running the machine without a real device.

use crate::config::{GrinderConfig, MilkConfig};
use coffee_machine_core::{BeanGrinder, GrinderFault, HeaterFault, MilkProvider, Order};
use std::sync::{Mutex, PoisonError};

/// Bean hopper and grinder with a finite bean stock
#[derive(Debug)]
pub struct BeanHopper {
    stock: Mutex<u32>,
    dose: u32,
    jammed: bool,
}

impl BeanHopper {
    /// Creates a hopper holding `stock` grams, using `dose` grams per grind
    #[must_use]
    pub const fn new(stock: u32, dose: u32, jammed: bool) -> Self {
        Self {
            stock: Mutex::new(stock),
            dose,
            jammed,
        }
    }

    /// Beans left, in grams
    #[must_use]
    pub fn remaining(&self) -> u32 {
        *self.stock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<&GrinderConfig> for BeanHopper {
    fn from(config: &GrinderConfig) -> Self {
        Self::new(config.bean_stock, config.dose, config.jammed)
    }
}

impl BeanGrinder for BeanHopper {
    fn grind(&self, order: &Order) -> Result<bool, GrinderFault> {
        if self.jammed {
            return Err(GrinderFault::new("burr mechanism jammed"));
        }

        let mut stock = self.stock.lock().unwrap_or_else(PoisonError::into_inner);
        if *stock < self.dose {
            tracing::debug!(remaining = *stock, dose = self.dose, %order, "Hopper too low to grind");
            return Ok(false);
        }
        *stock -= self.dose;
        tracing::debug!(remaining = *stock, %order, "Ground beans");
        Ok(true)
    }
}

/// Milk tank with a heater
#[derive(Debug)]
pub struct MilkTank {
    stock: Mutex<u32>,
    heater_working: bool,
}

impl MilkTank {
    /// Creates a tank holding `stock` ml of milk
    #[must_use]
    pub const fn new(stock: u32, heater_working: bool) -> Self {
        Self {
            stock: Mutex::new(stock),
            heater_working,
        }
    }

    /// Milk left, in ml
    #[must_use]
    pub fn remaining(&self) -> u32 {
        *self.stock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<&MilkConfig> for MilkTank {
    fn from(config: &MilkConfig) -> Self {
        Self::new(config.stock, config.heater_working)
    }
}

impl MilkProvider for MilkTank {
    fn heat(&self) -> Result<(), HeaterFault> {
        if self.heater_working {
            Ok(())
        } else {
            Err(HeaterFault::new("heating element not responding"))
        }
    }

    fn pour(&self, amount: u32) -> u32 {
        let mut stock = self.stock.lock().unwrap_or_else(PoisonError::into_inner);
        let poured = amount.min(*stock);
        *stock -= poured;
        poured
    }
}
