//! # Drive actions

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::{debug, info};

use crate::{
    auto::action::{Action, ActionContext, ActionStatus},
    state::Pose2d,
    subsystems::DriveDemand,
};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Drives open loop at a fixed demand for a fixed time, then stops the drive.
#[derive(Debug)]
pub struct DriveOpenLoopAction {
    demand: DriveDemand,

    duration_s: f64,

    start_time_s: f64,

    status: ActionStatus,
}

/// Drives open loop at a fixed demand until the robot is a given distance from where it started.
///
/// The distance is measured from the latest pose in the robot state, so the action keeps driving
/// until a pose is available. There is no timeout.
#[derive(Debug)]
pub struct DriveToDistanceAction {
    demand: DriveDemand,

    distance_m: f64,

    start_pose: Option<Pose2d>,

    status: ActionStatus,
}

/// Holds the robot still and pointed at the target, finishing immediately.
///
/// The drive keeps orienting until it is given an open loop demand or stopped.
#[derive(Debug)]
pub struct OrientForShotAction {
    status: ActionStatus,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl DriveOpenLoopAction {
    pub fn new(demand: DriveDemand, duration_s: f64) -> Self {
        Self {
            demand,
            duration_s,
            start_time_s: 0.0,
            status: ActionStatus::NotStarted,
        }
    }

    fn finish(&mut self, ctx: &mut ActionContext) {
        ctx.subsystems.drive.set_want_raw_open_loop(DriveDemand::neutral());
        self.status = ActionStatus::Finished;
    }
}

impl Action for DriveOpenLoopAction {
    fn start(&mut self, ctx: &mut ActionContext) {
        debug!("DriveOpenLoopAction: {:?} for {} s", self.demand, self.duration_s);

        self.start_time_s = ctx.now_s;
        self.status = ActionStatus::Running;

        if self.duration_s > 0.0 {
            ctx.subsystems.drive.set_want_raw_open_loop(self.demand);
        } else {
            self.finish(ctx);
        }
    }

    fn update(&mut self, ctx: &mut ActionContext) {
        if !self.status.is_running() {
            return;
        }

        if ctx.now_s - self.start_time_s >= self.duration_s {
            self.finish(ctx);
        } else {
            ctx.subsystems.drive.set_want_raw_open_loop(self.demand);
        }
    }

    fn done(&self) -> bool {
        self.status.is_finished()
    }

    fn stop(&mut self, ctx: &mut ActionContext) {
        // The drive is only commanded while running, an unstarted or finished action leaves it
        // alone.
        if self.status.is_running() {
            self.finish(ctx);
        }
        self.status = ActionStatus::Finished;
    }
}

impl DriveToDistanceAction {
    pub fn new(demand: DriveDemand, distance_m: f64) -> Self {
        Self {
            demand,
            distance_m,
            start_pose: None,
            status: ActionStatus::NotStarted,
        }
    }

    fn finish(&mut self, ctx: &mut ActionContext) {
        ctx.subsystems.drive.set_want_raw_open_loop(DriveDemand::neutral());
        self.status = ActionStatus::Finished;
    }
}

impl Action for DriveToDistanceAction {
    fn start(&mut self, ctx: &mut ActionContext) {
        self.start_pose = ctx.robot_state.get_latest_field_to_robot().map(|(_, p)| p);
        self.status = ActionStatus::Running;

        debug!(
            "DriveToDistanceAction: {:?} for {} m from {:?}",
            self.demand, self.distance_m, self.start_pose
        );

        ctx.subsystems.drive.set_want_raw_open_loop(self.demand);
    }

    fn update(&mut self, ctx: &mut ActionContext) {
        if !self.status.is_running() {
            return;
        }

        let latest = ctx.robot_state.get_latest_field_to_robot().map(|(_, p)| p);

        let travelled_m = match (self.start_pose, latest) {
            (Some(start), Some(current)) => start.distance_to(&current),
            (None, Some(current)) => {
                self.start_pose = Some(current);
                0.0
            }
            (_, None) => 0.0,
        };

        if travelled_m >= self.distance_m {
            info!("DriveToDistanceAction travelled {:.3} m", travelled_m);
            self.finish(ctx);
        } else {
            ctx.subsystems.drive.set_want_raw_open_loop(self.demand);
        }
    }

    fn done(&self) -> bool {
        self.status.is_finished()
    }

    fn stop(&mut self, ctx: &mut ActionContext) {
        if self.status.is_running() {
            self.finish(ctx);
        }
        self.status = ActionStatus::Finished;
    }
}

impl OrientForShotAction {
    pub fn new() -> Self {
        Self {
            status: ActionStatus::NotStarted,
        }
    }
}

impl Default for OrientForShotAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for OrientForShotAction {
    fn start(&mut self, ctx: &mut ActionContext) {
        ctx.subsystems.drive.set_want_orient_for_shot();
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
