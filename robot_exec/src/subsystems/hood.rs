//! # Turret hood subsystem

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::{debug, warn};
use serde::Deserialize;
use util::maths;

use super::Subsystem;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HoodParams {
    /// Lowest angle the hood can be commanded to
    pub min_position_deg: f64,

    /// Highest angle the hood can be commanded to
    pub max_position_deg: f64,
}

/// Adjustable hood setting the shot angle.
#[derive(Debug)]
pub struct Hood {
    params: HoodParams,

    demand: HoodDemand,

    last_emitted: Option<HoodDemand>,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoodDemand {
    /// Retracted below the frame perimeter
    Stowed,

    /// Raised to the given angle
    Position(f64),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Default for HoodParams {
    fn default() -> Self {
        Self {
            min_position_deg: 0.0,
            max_position_deg: 70.0,
        }
    }
}

impl Hood {
    pub fn new(params: HoodParams) -> Self {
        Self {
            params,
            demand: HoodDemand::Stowed,
            last_emitted: None,
        }
    }

    /// Raise the hood to an angle, clamped to the travel of the hood.
    pub fn set_want_position(&mut self, position_deg: f64) {
        let clamped = maths::clamp(
            position_deg,
            self.params.min_position_deg,
            self.params.max_position_deg,
        );

        if clamped != position_deg {
            warn!(
                "Hood position {:.1} deg outside of travel, limited to {:.1} deg",
                position_deg, clamped
            );
        }

        self.demand = HoodDemand::Position(clamped);
    }

    pub fn set_want_stow(&mut self) {
        self.demand = HoodDemand::Stowed;
    }

    pub fn demand(&self) -> HoodDemand {
        self.demand
    }
}

impl Subsystem for Hood {
    fn name(&self) -> &'static str {
        "Hood"
    }

    fn periodic(&mut self) {
        if self.last_emitted != Some(self.demand) {
            debug!("Hood demand: {:?}", self.demand);
            self.last_emitted = Some(self.demand);
        }
    }

    fn stop(&mut self) {
        self.set_want_stow();
    }
}
