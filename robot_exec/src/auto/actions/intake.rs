//! # [`IntakeAction`] implementation

use log::debug;

use crate::auto::action::{Action, ActionContext, ActionStatus};

/// Deploys and starts the intake, or stops and retracts it. Finishes immediately.
#[derive(Debug)]
pub struct IntakeAction {
    running: bool,

    status: ActionStatus,
}

impl IntakeAction {
    pub fn new(running: bool) -> Self {
        Self {
            running,
            status: ActionStatus::NotStarted,
        }
    }
}

impl Action for IntakeAction {
    fn start(&mut self, ctx: &mut ActionContext) {
        debug!("IntakeAction: running = {}", self.running);

        let intake = &mut ctx.subsystems.intake;
        intake.set_want_deployed(self.running);
        intake.set_want_running(self.running);

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
