//! # Autonomy Module
//!
//! This module runs the autonomous routines of the robot. A routine is a tree of [`Action`]s:
//! leaf actions command the subsystems, while [`SequentialAction`] and [`ParallelAction`] combine
//! other actions. The [`AutoExecutor`] steps the root of the tree once per control cycle.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Action interface and the shared action context
pub mod action;

/// Leaf actions commanding subsystems
pub mod actions;

/// Steps a routine once per cycle
pub mod executor;

/// Runs child actions together
pub mod parallel;

/// Parameters of the routines
pub mod params;

/// Routine selection and construction
pub mod selector;

/// Runs child actions one after another
pub mod sequential;

#[cfg(test)]
mod mock;

// ------------------------------------------------------------------------------------------------
// EXPORTS
// ------------------------------------------------------------------------------------------------

pub use action::{Action, ActionContext, ActionStatus, EmptyAction};
pub use executor::AutoExecutor;
pub use parallel::ParallelAction;
pub use params::AutoParams;
pub use selector::{AutoMode, AutoModeParseError, AutoModeSelector};
pub use sequential::SequentialAction;
