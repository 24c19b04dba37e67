//! # Autonomous routine parameters

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Deserialize;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Parameters shared by all autonomous routines.
#[derive(Debug, Clone, Deserialize)]
pub struct AutoParams {
    /// Time to wait at the start of a routine, to let alliance partners clear
    pub start_delay_s: f64,

    /// Open loop demand applied to both sides of the drive when driving off the line
    pub drive_demand: f64,

    /// Distance to drive to clear the initiation line
    pub off_line_distance_m: f64,

    /// Hood angle for the preloaded shot
    pub shot_hood_position_deg: f64,

    /// Time allowed for the preloaded shot
    pub shot_duration_s: f64,

    /// Open loop demand applied to both sides of the drive while collecting balls, negative
    /// drives backwards
    pub collect_demand: f64,

    /// Time to drive while collecting balls
    pub collect_duration_s: f64,
}

impl Default for AutoParams {
    fn default() -> Self {
        Self {
            start_delay_s: 0.0,
            drive_demand: 0.4,
            off_line_distance_m: 1.5,
            shot_hood_position_deg: 40.0,
            shot_duration_s: 3.0,
            collect_demand: -0.3,
            collect_duration_s: 2.0,
        }
    }
}
