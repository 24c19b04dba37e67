//! # Autonomous mode selection
//!
//! The drive team picks the routine to run while the robot is disabled, the selection is read
//! once on entry to autonomous.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::info;
use serde::Deserialize;
use std::{fmt::Display, str::FromStr};

use super::{
    action::{Action, EmptyAction},
    actions::{
        DriveOpenLoopAction, DriveToDistanceAction, IntakeAction, OrientForShotAction,
        SetHoodAction, WaitAction,
    },
    params::AutoParams,
    parallel::ParallelAction,
    sequential::SequentialAction,
};
use crate::subsystems::{DriveDemand, HoodDemand};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Holds the currently selected autonomous routine.
#[derive(Debug)]
pub struct AutoModeSelector {
    selected: AutoMode,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// The autonomous routines available to the drive team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AutoMode {
    /// Sit still for the whole of autonomous
    DoNothing,

    /// Drive forward far enough to clear the initiation line
    DriveOffLine,

    /// Shoot the preloaded balls, then back up collecting more
    ShootThenDrive,
}

#[derive(Debug, thiserror::Error)]
pub enum AutoModeParseError {
    #[error("Unknown autonomous mode \"{0}\"")]
    UnknownMode(String),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl AutoModeSelector {
    pub fn new(default_mode: AutoMode) -> Self {
        info!("Autonomous mode selected: {}", default_mode);
        Self {
            selected: default_mode,
        }
    }

    /// Change the selected routine.
    pub fn update_selection(&mut self, mode: AutoMode) {
        if mode != self.selected {
            info!("Autonomous mode changed: {} -> {}", self.selected, mode);
            self.selected = mode;
        }
    }

    pub fn selected_mode(&self) -> AutoMode {
        self.selected
    }

    /// Build the action tree for the selected routine.
    pub fn get_selected_action(&self, params: &AutoParams) -> Box<dyn Action> {
        self.selected.build(params)
    }
}

impl AutoMode {
    pub const ALL: [AutoMode; 3] = [
        AutoMode::DoNothing,
        AutoMode::DriveOffLine,
        AutoMode::ShootThenDrive,
    ];

    /// Build the action tree for this routine.
    pub fn build(&self, params: &AutoParams) -> Box<dyn Action> {
        match self {
            AutoMode::DoNothing => Box::new(EmptyAction::new()),

            AutoMode::DriveOffLine => Box::new(SequentialAction::new(vec![
                Box::new(WaitAction::new(params.start_delay_s)),
                Box::new(DriveToDistanceAction::new(
                    DriveDemand::new(params.drive_demand, params.drive_demand),
                    params.off_line_distance_m,
                )),
            ])),

            AutoMode::ShootThenDrive => Box::new(SequentialAction::new(vec![
                Box::new(WaitAction::new(params.start_delay_s)),
                Box::new(ParallelAction::new(vec![
                    Box::new(SetHoodAction::new(HoodDemand::Position(
                        params.shot_hood_position_deg,
                    ))),
                    Box::new(OrientForShotAction::new()),
                    Box::new(WaitAction::new(params.shot_duration_s)),
                ])),
                Box::new(SetHoodAction::new(HoodDemand::Stowed)),
                Box::new(IntakeAction::new(true)),
                Box::new(DriveOpenLoopAction::new(
                    DriveDemand::new(params.collect_demand, params.collect_demand),
                    params.collect_duration_s,
                )),
                Box::new(IntakeAction::new(false)),
            ])),
        }
    }
}

impl Display for AutoMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AutoMode::DoNothing => write!(f, "DoNothing"),
            AutoMode::DriveOffLine => write!(f, "DriveOffLine"),
            AutoMode::ShootThenDrive => write!(f, "ShootThenDrive"),
        }
    }
}

impl FromStr for AutoMode {
    type Err = AutoModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AutoMode::ALL
            .iter()
            .copied()
            .find(|m| m.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AutoModeParseError::UnknownMode(s.to_string()))
    }
}
