//! # Robot Executable Parameters
//!
//! This module provide parameters for the robot executable.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Deserialize;

use crate::{
    auto::AutoMode,
    robot::RobotMode,
    state::{OdometryParams, Pose2d},
    subsystems::SubsystemParams,
};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct RobotExecParams {
    /// Target period of one control cycle
    pub cycle_period_s: f64,

    /// Autonomous routine selected at start up
    pub auto_mode: AutoMode,

    /// Hood angle commanded on entry to autonomous
    pub hood_auto_position_deg: f64,

    /// Pose the robot is placed at before the match
    pub starting_pose: Pose2d,

    pub match_timing: MatchTiming,

    pub subsystems: SubsystemParams,

    pub odometry: OdometryParams,
}

/// Length of each period of a simulated match.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MatchTiming {
    pub pre_match_disabled_s: f64,

    pub autonomous_s: f64,

    pub post_match_disabled_s: f64,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum RobotExecError {
    #[error("Cycle period must be positive and finite, found {0} s")]
    InvalidCyclePeriod(f64),

    #[error("Match period {0} has invalid length {1} s")]
    InvalidMatchPeriod(&'static str, f64),

    #[error("Odometry parameter {0} must be positive and finite, found {1}")]
    InvalidOdometry(&'static str, f64),

    #[error("Hood travel is empty, min {0} deg is above max {1} deg")]
    InvalidHoodTravel(f64, f64),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl RobotExecParams {
    /// Check the parameters can be used to run the executable.
    pub fn validate(&self) -> Result<(), RobotExecError> {
        if !(self.cycle_period_s.is_finite() && self.cycle_period_s > 0.0) {
            return Err(RobotExecError::InvalidCyclePeriod(self.cycle_period_s));
        }

        let periods = [
            ("pre_match_disabled_s", self.match_timing.pre_match_disabled_s),
            ("autonomous_s", self.match_timing.autonomous_s),
            ("post_match_disabled_s", self.match_timing.post_match_disabled_s),
        ];

        for (name, length_s) in periods.iter() {
            if !(length_s.is_finite() && *length_s >= 0.0) {
                return Err(RobotExecError::InvalidMatchPeriod(*name, *length_s));
            }
        }

        let odometry = [
            ("max_speed_mps", self.odometry.max_speed_mps),
            ("track_width_m", self.odometry.track_width_m),
        ];

        for (name, value) in odometry.iter() {
            if !(value.is_finite() && *value > 0.0) {
                return Err(RobotExecError::InvalidOdometry(*name, *value));
            }
        }

        let hood = &self.subsystems.hood;
        if !(hood.min_position_deg <= hood.max_position_deg) {
            return Err(RobotExecError::InvalidHoodTravel(
                hood.min_position_deg,
                hood.max_position_deg,
            ));
        }

        Ok(())
    }
}

impl MatchTiming {
    /// Get the mode the robot should be in at `match_time_s` after start up, or `None` once the
    /// match is over.
    pub fn mode_at(&self, match_time_s: f64) -> Option<RobotMode> {
        let auto_start_s = self.pre_match_disabled_s;
        let auto_end_s = auto_start_s + self.autonomous_s;
        let match_end_s = auto_end_s + self.post_match_disabled_s;

        if match_time_s < auto_start_s {
            Some(RobotMode::Disabled)
        } else if match_time_s < auto_end_s {
            Some(RobotMode::Autonomous)
        } else if match_time_s < match_end_s {
            Some(RobotMode::Disabled)
        } else {
            None
        }
    }
}
