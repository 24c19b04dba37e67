//! # Field-relative robot pose

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use util::{interp_map::Interpolate, maths};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// The pose (position and heading in the field frame) of the robot.
///
/// The default pose is the identity: the field origin, facing along the field X axis.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PoseFields")]
pub struct Pose2d {
    /// Position of the robot in the field frame
    pub position_m: Vector2<f64>,

    /// Heading of the robot, the anticlockwise angle from the field X axis, in the range
    /// [-pi, pi).
    pub heading_rad: f64,
}

/// Pose as written in parameter files, before the heading is wrapped.
#[derive(Deserialize)]
struct PoseFields {
    position_m: Vector2<f64>,
    heading_rad: f64,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl From<PoseFields> for Pose2d {
    fn from(fields: PoseFields) -> Self {
        Self::new(fields.position_m.x, fields.position_m.y, fields.heading_rad)
    }
}

impl Default for Pose2d {
    fn default() -> Self {
        Self {
            position_m: Vector2::zeros(),
            heading_rad: 0.0,
        }
    }
}

impl Pose2d {
    /// Create a new pose, wrapping the heading into [-pi, pi).
    pub fn new(x_m: f64, y_m: f64, heading_rad: f64) -> Self {
        Self {
            position_m: Vector2::new(x_m, y_m),
            heading_rad: maths::wrap_pi(heading_rad),
        }
    }

    pub fn x_m(&self) -> f64 {
        self.position_m.x
    }

    pub fn y_m(&self) -> f64 {
        self.position_m.y
    }

    /// Straight line distance between the positions of two poses.
    pub fn distance_to(&self, other: &Pose2d) -> f64 {
        (other.position_m - self.position_m).norm()
    }

    /// Move the pose by a distance along an arc, in the robot frame.
    ///
    /// `distance_m` is travelled along the robot's heading while it rotates by `delta_heading_rad`.
    /// The chord is taken along the mean heading of the arc.
    pub fn advance(&self, distance_m: f64, delta_heading_rad: f64) -> Self {
        let mid_heading = self.heading_rad + 0.5 * delta_heading_rad;

        Self {
            position_m: self.position_m
                + Vector2::new(mid_heading.cos(), mid_heading.sin()) * distance_m,
            heading_rad: maths::wrap_pi(self.heading_rad + delta_heading_rad),
        }
    }
}

impl Interpolate for Pose2d {
    fn interpolate(&self, other: &Self, f: f64) -> Self {
        let dh = maths::get_ang_dist_pi(self.heading_rad, other.heading_rad);

        Self {
            position_m: self.position_m.lerp(&other.position_m, f),
            heading_rad: maths::wrap_pi(self.heading_rad + dh * f),
        }
    }
}
