//! # Drive subsystem

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use util::maths;

use super::Subsystem;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Open loop demand on each side of the drive, as a fraction of full output in [-1, 1].
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DriveDemand {
    pub left: f64,
    pub right: f64,
}

/// Differential drive base.
#[derive(Debug, Default)]
pub struct Drive {
    demand: DriveDemand,

    /// Demand emitted by the last periodic call
    last_emitted: Option<DriveDemand>,

    /// Set while the robot should be holding its heading on the target
    orient_for_shot: bool,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl DriveDemand {
    /// Create a new demand, clamping each side into [-1, 1].
    pub fn new(left: f64, right: f64) -> Self {
        Self {
            left: maths::clamp(left, -1.0, 1.0),
            right: maths::clamp(right, -1.0, 1.0),
        }
    }

    pub fn neutral() -> Self {
        Self::default()
    }
}

impl Drive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drive each side at a fixed output.
    pub fn set_want_raw_open_loop(&mut self, demand: DriveDemand) {
        self.orient_for_shot = false;
        self.demand = DriveDemand::new(demand.left, demand.right);
    }

    /// Hold the robot still and pointed at the target.
    pub fn set_want_orient_for_shot(&mut self) {
        if !self.orient_for_shot {
            debug!("Drive orienting for shot");
        }
        self.orient_for_shot = true;
        self.demand = DriveDemand::neutral();
    }

    pub fn demand(&self) -> DriveDemand {
        self.demand
    }

    pub fn is_orienting_for_shot(&self) -> bool {
        self.orient_for_shot
    }
}

impl Subsystem for Drive {
    fn name(&self) -> &'static str {
        "Drive"
    }

    fn periodic(&mut self) {
        if self.last_emitted != Some(self.demand) {
            debug!("Drive demand: {:?}", self.demand);
        } else {
            trace!("Drive demand: {:?}", self.demand);
        }
        self.last_emitted = Some(self.demand);
    }

    fn zero_sensors(&mut self) {
        debug!("Drive sensors zeroed");
    }

    fn stop(&mut self) {
        self.orient_for_shot = false;
        self.demand = DriveDemand::neutral();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_demand_clamped() {
        let mut drive = Drive::new();
        drive.set_want_raw_open_loop(DriveDemand { left: 2.0, right: -3.0 });

        assert_eq!(drive.demand(), DriveDemand { left: 1.0, right: -1.0 });
    }

    #[test]
    fn test_orient_for_shot() {
        let mut drive = Drive::new();
        drive.set_want_raw_open_loop(DriveDemand::new(0.3, 0.3));
        drive.set_want_orient_for_shot();

        assert!(drive.is_orienting_for_shot());
        assert_eq!(drive.demand(), DriveDemand::neutral());

        drive.set_want_raw_open_loop(DriveDemand::new(0.3, 0.3));
        assert!(!drive.is_orienting_for_shot());
    }
}
