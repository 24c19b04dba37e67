//! # Robot mode handling
//!
//! [`Robot`] owns the subsystems, the pose estimate and the autonomous executor, and runs the
//! handlers for the current mode once per control cycle:
//!
//! - `Disabled` - Subsystems are stopped and the autonomous routine can be changed.
//! - `Autonomous` - The selected routine is built on entry and stepped every cycle.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::info;
use std::sync::Arc;

use crate::{
    auto::{ActionContext, AutoExecutor, AutoMode, AutoModeSelector, AutoParams, EmptyAction},
    params::RobotExecParams,
    state::{Odometry, Pose2d, RobotState},
    subsystems::{DriveDemand, Subsystems},
};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

pub struct Robot {
    /// Subsystems and robot state, shared with the running actions
    ctx: ActionContext,

    odometry: Odometry,

    selector: AutoModeSelector,

    /// Selection made since the last disabled cycle
    requested_auto_mode: Option<AutoMode>,

    auto_params: AutoParams,

    auto_executor: AutoExecutor,

    hood_auto_position_deg: f64,

    starting_pose: Pose2d,

    mode: Option<RobotMode>,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotMode {
    Disabled,
    Autonomous,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Robot {
    pub fn new(
        params: &RobotExecParams,
        auto_params: AutoParams,
        robot_state: Arc<RobotState>,
    ) -> Self {
        Self {
            ctx: ActionContext::new(Subsystems::new(&params.subsystems), robot_state),
            odometry: Odometry::new(params.odometry),
            selector: AutoModeSelector::new(params.auto_mode),
            requested_auto_mode: None,
            auto_params,
            auto_executor: AutoExecutor::new(Box::new(EmptyAction::new())),
            hood_auto_position_deg: params.hood_auto_position_deg,
            starting_pose: params.starting_pose,
            mode: None,
        }
    }

    pub fn mode(&self) -> Option<RobotMode> {
        self.mode
    }

    pub fn context(&self) -> &ActionContext {
        &self.ctx
    }

    pub fn robot_state(&self) -> &Arc<RobotState> {
        &self.ctx.robot_state
    }

    pub fn selected_auto_mode(&self) -> AutoMode {
        self.selector.selected_mode()
    }

    /// Request a new autonomous routine, which is applied on the next disabled cycle.
    pub fn request_auto_mode(&mut self, mode: AutoMode) {
        self.requested_auto_mode = Some(mode);
    }

    /// Switch to a new mode, running the init handler of the mode if it differs from the current
    /// one.
    pub fn set_mode(&mut self, mode: RobotMode, now_s: f64) {
        if self.mode == Some(mode) {
            return;
        }

        info!("Robot mode change: {:?} -> {:?}", self.mode, mode);

        self.ctx.now_s = now_s;
        self.mode = Some(mode);

        match mode {
            RobotMode::Disabled => self.disabled_init(),
            RobotMode::Autonomous => self.autonomous_init(),
        }
    }

    /// Run one control cycle.
    pub fn periodic(&mut self, now_s: f64) {
        self.ctx.now_s = now_s;

        self.robot_periodic();

        match self.mode {
            Some(RobotMode::Disabled) => self.disabled_periodic(),
            Some(RobotMode::Autonomous) => self.autonomous_periodic(),
            None => (),
        }

        self.ctx.subsystems.periodic_all();
    }

    /// Processing common to all modes, run before the mode handler.
    fn robot_periodic(&mut self) {
        let demand = self.ctx.subsystems.drive.demand();
        let pose = self.odometry.update(self.ctx.now_s, &demand);
        self.ctx.robot_state.observe_field_to_robot(self.ctx.now_s, pose);
    }

    fn autonomous_init(&mut self) {
        self.ctx.subsystems.zero_sensors_all();

        self.ctx.robot_state.reset_field_to_robot();
        self.odometry.reset(self.starting_pose, self.ctx.now_s);
        self.ctx
            .robot_state
            .observe_field_to_robot(self.ctx.now_s, self.starting_pose);

        info!("Running autonomous mode {}", self.selector.selected_mode());
        self.auto_executor =
            AutoExecutor::new(self.selector.get_selected_action(&self.auto_params));

        self.ctx
            .subsystems
            .hood
            .set_want_position(self.hood_auto_position_deg);
    }

    fn autonomous_periodic(&mut self) {
        self.auto_executor.periodic(&mut self.ctx);
    }

    fn disabled_init(&mut self) {
        self.auto_executor.stop(&mut self.ctx);
        self.ctx
            .subsystems
            .drive
            .set_want_raw_open_loop(DriveDemand::neutral());
        self.ctx.subsystems.stop_all();
    }

    fn disabled_periodic(&mut self) {
        if let Some(mode) = self.requested_auto_mode.take() {
            self.selector.update_selection(mode);
        }
    }
}
