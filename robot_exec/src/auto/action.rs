//! # Action interface
//!
//! An action is one unit of autonomous behaviour. Every action moves through the same states:
//!
//! ```text
//! NotStarted --start--> Running --(goal reached)--> Finished
//!      |                   |
//!      +------stop---------+-----stop-----> Finished
//! ```
//!
//! The caller guarantees `start` is called once before any `update`, and `update` is then called
//! once per cycle until `done` returns true. `stop` may be called in any state, any number of
//! times, and always leaves the action finished.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::{fmt::Debug, sync::Arc};

use crate::{state::RobotState, subsystems::Subsystems};

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// A unit of autonomous behaviour.
///
/// None of these functions may block, they are all called from the control loop.
pub trait Action: Debug {
    /// One-time set up, called before the first `update`.
    fn start(&mut self, ctx: &mut ActionContext);

    /// Advance the action, called once per cycle while running.
    fn update(&mut self, ctx: &mut ActionContext);

    /// True once the goal of the action has been met, or the action has been stopped.
    fn done(&self) -> bool;

    /// Terminate the action early.
    fn stop(&mut self, ctx: &mut ActionContext);
}

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Everything an action may read or command.
#[derive(Debug)]
pub struct ActionContext {
    /// Robot time at the start of the current cycle
    pub now_s: f64,

    pub subsystems: Subsystems,

    pub robot_state: Arc<RobotState>,
}

/// Action which does nothing and finishes as soon as it is started.
#[derive(Debug)]
pub struct EmptyAction {
    status: ActionStatus,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    NotStarted,
    Running,
    Finished,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl ActionContext {
    pub fn new(subsystems: Subsystems, robot_state: Arc<RobotState>) -> Self {
        Self {
            now_s: 0.0,
            subsystems,
            robot_state,
        }
    }
}

impl Default for ActionContext {
    fn default() -> Self {
        Self::new(Subsystems::default(), Arc::new(RobotState::new()))
    }
}

impl Default for ActionStatus {
    fn default() -> Self {
        ActionStatus::NotStarted
    }
}

impl ActionStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, ActionStatus::Running)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, ActionStatus::Finished)
    }
}

impl EmptyAction {
    pub fn new() -> Self {
        Self {
            status: ActionStatus::NotStarted,
        }
    }
}

impl Default for EmptyAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for EmptyAction {
    fn start(&mut self, _ctx: &mut ActionContext) {
        self.status = ActionStatus::Finished;
    }

    fn update(&mut self, _ctx: &mut ActionContext) {}

    fn done(&self) -> bool {
        self.status.is_finished()
    }

    fn stop(&mut self, _ctx: &mut ActionContext) {
        self.status = ActionStatus::Finished;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_action() {
        let mut ctx = ActionContext::default();
        let mut empty = EmptyAction::new();

        assert!(!empty.done());
        empty.start(&mut ctx);
        assert!(empty.done());

        empty.update(&mut ctx);
        assert!(empty.done());
    }

    #[test]
    fn test_empty_action_stop() {
        let mut ctx = ActionContext::default();
        let mut empty = EmptyAction::new();

        empty.stop(&mut ctx);
        empty.stop(&mut ctx);
        assert!(empty.done());
    }
}
