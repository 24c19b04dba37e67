//! # Dead-reckoning odometry
//!
//! Integrates the drive demand into a pose estimate. There are no wheel encoders on the simulated
//! robot, so the demand is taken as the achieved wheel speed.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::warn;
use serde::Deserialize;

use super::Pose2d;
use crate::subsystems::DriveDemand;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OdometryParams {
    /// Ground speed of one side of the drive at a demand of 1.0
    pub max_speed_mps: f64,

    /// Distance between the left and right wheels
    pub track_width_m: f64,
}

#[derive(Debug, Clone)]
pub struct Odometry {
    params: OdometryParams,

    pose: Pose2d,

    last_time_s: Option<f64>,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Default for OdometryParams {
    fn default() -> Self {
        Self {
            max_speed_mps: 3.0,
            track_width_m: 0.6,
        }
    }
}

impl Odometry {
    pub fn new(params: OdometryParams) -> Self {
        Self {
            params,
            pose: Pose2d::default(),
            last_time_s: None,
        }
    }

    /// Restart integration from the given pose.
    pub fn reset(&mut self, pose: Pose2d, now_s: f64) {
        self.pose = pose;
        self.last_time_s = Some(now_s);
    }

    /// Integrate the demand applied since the last update and return the new pose.
    pub fn update(&mut self, now_s: f64, demand: &DriveDemand) -> Pose2d {
        let dt_s = match self.last_time_s {
            Some(t) if now_s >= t => now_s - t,
            Some(t) => {
                warn!("Odometry time went backwards ({:.4} s -> {:.4} s)", t, now_s);
                0.0
            }
            None => 0.0,
        };
        self.last_time_s = Some(now_s);

        let left_mps = demand.left * self.params.max_speed_mps;
        let right_mps = demand.right * self.params.max_speed_mps;

        let distance_m = 0.5 * (left_mps + right_mps) * dt_s;
        let delta_heading_rad = (right_mps - left_mps) / self.params.track_width_m * dt_s;

        self.pose = self.pose.advance(distance_m, delta_heading_rad);
        self.pose
    }

    pub fn pose(&self) -> Pose2d {
        self.pose
    }
}
