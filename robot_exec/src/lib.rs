//! # Robot library.
//!
//! This library allows other crates in the workspace, and the benchmarks, to access items defined
//! inside the robot crate.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Autonomy module - builds and runs the autonomous routines
pub mod auto;

/// Executable parameters
pub mod params;

/// Robot module - dispatches the mode handlers each cycle
pub mod robot;

/// State module - time history of where the robot is on the field
pub mod state;

/// Subsystems module - the actuated parts of the robot
pub mod subsystems;
