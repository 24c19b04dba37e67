//! # Subsystems
//!
//! Models of the robot mechanisms commanded by autonomous actions and the mode handlers. Each
//! subsystem holds the latest demand set on it and emits it once per cycle from
//! [`Subsystem::periodic`]. Talking to the motor controllers is left to the hardware layer.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

mod drive;
mod hood;
mod intake;

pub use drive::{Drive, DriveDemand};
pub use hood::{Hood, HoodDemand, HoodParams};
pub use intake::{Intake, IntakeDemand};

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::info;
use serde::Deserialize;

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// Common interface of all subsystems.
pub trait Subsystem {
    /// Name used in log messages.
    fn name(&self) -> &'static str;

    /// Cyclic processing, called once per control period in every mode.
    fn periodic(&mut self);

    /// Zero any sensors, called at the start of autonomous.
    fn zero_sensors(&mut self) {}

    /// Put the subsystem into a safe, unpowered state.
    fn stop(&mut self);
}

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Parameters for all subsystems.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SubsystemParams {
    pub hood: HoodParams,
}

/// All the subsystems of the robot.
#[derive(Debug)]
pub struct Subsystems {
    pub drive: Drive,
    pub hood: Hood,
    pub intake: Intake,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Default for Subsystems {
    fn default() -> Self {
        Self::new(&SubsystemParams::default())
    }
}

impl Subsystems {
    pub fn new(params: &SubsystemParams) -> Self {
        Self {
            drive: Drive::new(),
            hood: Hood::new(params.hood),
            intake: Intake::new(),
        }
    }

    pub fn periodic_all(&mut self) {
        for s in self.all_mut().iter_mut() {
            s.periodic();
        }
    }

    pub fn zero_sensors_all(&mut self) {
        for s in self.all_mut().iter_mut() {
            s.zero_sensors();
        }
    }

    pub fn stop_all(&mut self) {
        for s in self.all_mut().iter_mut() {
            s.stop();
            info!("{} stopped", s.name());
        }
    }

    fn all_mut(&mut self) -> [&mut dyn Subsystem; 3] {
        [&mut self.drive, &mut self.hood, &mut self.intake]
    }
}
