//! Utility library for the robot control software

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod host;
pub mod interp_map;
pub mod logger;
pub mod maths;
pub mod params;
pub mod session;
pub mod time;
