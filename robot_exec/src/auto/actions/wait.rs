//! # [`WaitAction`] implementation

use crate::auto::action::{Action, ActionContext, ActionStatus};

/// Does nothing for a fixed amount of time.
#[derive(Debug)]
pub struct WaitAction {
    duration_s: f64,

    start_time_s: f64,

    status: ActionStatus,
}

impl WaitAction {
    pub fn new(duration_s: f64) -> Self {
        Self {
            duration_s,
            start_time_s: 0.0,
            status: ActionStatus::NotStarted,
        }
    }
}

impl Action for WaitAction {
    fn start(&mut self, ctx: &mut ActionContext) {
        self.start_time_s = ctx.now_s;
        self.status = if self.duration_s > 0.0 {
            ActionStatus::Running
        } else {
            ActionStatus::Finished
        };
    }

    fn update(&mut self, ctx: &mut ActionContext) {
        if self.status.is_running() && ctx.now_s - self.start_time_s >= self.duration_s {
            self.status = ActionStatus::Finished;
        }
    }

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
    fn test_wait() {
        let mut ctx = ActionContext::default();
        ctx.now_s = 10.0;

        let mut wait = WaitAction::new(0.5);
        wait.start(&mut ctx);

        ctx.now_s = 10.25;
        wait.update(&mut ctx);
        assert!(!wait.done());

        ctx.now_s = 10.5;
        wait.update(&mut ctx);
        assert!(wait.done());
    }

    #[test]
    fn test_zero_wait_done_on_start() {
        let mut ctx = ActionContext::default();

        let mut wait = WaitAction::new(0.0);
        wait.start(&mut ctx);
        assert!(wait.done());
    }

    #[test]
    fn test_stop() {
        let mut ctx = ActionContext::default();

        let mut wait = WaitAction::new(100.0);
        wait.stop(&mut ctx);
        assert!(wait.done());

        let mut wait = WaitAction::new(100.0);
        wait.start(&mut ctx);
        wait.stop(&mut ctx);
        wait.stop(&mut ctx);
        assert!(wait.done());
    }
}
