//! # Autonomous executor
//!
//! Drives a single root action through its lifecycle, one step per control cycle.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::info;

use super::action::{Action, ActionContext};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Runs one autonomous routine.
///
/// A new executor is built for each autonomous period. Dropping or replacing an executor does
/// not stop its routine, call [`AutoExecutor::stop`] first if the routine must be cleaned up.
#[derive(Debug)]
pub struct AutoExecutor {
    root: Box<dyn Action>,

    started: bool,

    /// Set once completion of the routine has been reported
    completion_logged: bool,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl AutoExecutor {
    pub fn new(root: Box<dyn Action>) -> Self {
        Self {
            root,
            started: false,
            completion_logged: false,
        }
    }

    /// Step the routine, called once per cycle while in autonomous.
    ///
    /// The first call starts the root action. Every call, including the first, then updates the
    /// root if it has not finished.
    pub fn periodic(&mut self, ctx: &mut ActionContext) {
        if !self.started {
            info!("Starting autonomous routine");
            self.root.start(ctx);
            self.started = true;
        }

        if !self.root.done() {
            self.root.update(ctx);
        }

        if self.root.done() && !self.completion_logged {
            info!("Autonomous routine complete at {:.3} s", ctx.now_s);
            self.completion_logged = true;
        }
    }

    /// Stop the routine. Does nothing if the routine was never started.
    pub fn stop(&mut self, ctx: &mut ActionContext) {
        if self.started {
            if !self.root.done() {
                info!("Stopping autonomous routine");
            }
            self.root.stop(ctx);
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// True once the routine has been started and has finished.
    pub fn is_done(&self) -> bool {
        self.started && self.root.done()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::auto::{
        action::EmptyAction,
        mock::{count, new_log, Event, MockAction},
        sequential::SequentialAction,
    };

    #[test]
    fn test_first_tick_starts_then_updates() {
        let mut ctx = ActionContext::default();
        let log = new_log();

        let mut exec = AutoExecutor::new(MockAction::boxed("root", 2, &log));
        assert!(!exec.is_started());
        assert!(log.borrow().is_empty());

        exec.periodic(&mut ctx);
        assert_eq!(*log.borrow(), vec![Event::Start("root"), Event::Update("root")]);
        assert!(exec.is_started());
        assert!(!exec.is_done());

        exec.periodic(&mut ctx);
        assert!(exec.is_done());

        // No more updates, and never a second start
        exec.periodic(&mut ctx);
        assert_eq!(count(&log, Event::Start("root")), 1);
        assert_eq!(count(&log, Event::Update("root")), 2);
    }

    #[test]
    fn test_sequential_root() {
        let mut ctx = ActionContext::default();
        let log = new_log();

        let mut exec = AutoExecutor::new(Box::new(SequentialAction::new(vec![
            MockAction::boxed("a", 1, &log),
            MockAction::boxed("b", 2, &log),
        ])));

        exec.periodic(&mut ctx);
        assert_eq!(
            *log.borrow(),
            vec![Event::Start("a"), Event::Update("a"), Event::Start("b")]
        );
        exec.periodic(&mut ctx);
        assert!(!exec.is_done());
        exec.periodic(&mut ctx);
        assert!(exec.is_done());
    }

    #[test]
    fn test_stop_before_first_tick() {
        let mut ctx = ActionContext::default();
        let log = new_log();

        let mut exec = AutoExecutor::new(MockAction::boxed("root", 2, &log));
        exec.stop(&mut ctx);
        exec.stop(&mut ctx);

        assert!(log.borrow().is_empty());
        assert!(!exec.is_done());
    }

    #[test]
    fn test_stop_running() {
        let mut ctx = ActionContext::default();
        let log = new_log();

        let mut exec = AutoExecutor::new(MockAction::boxed("root", 5, &log));
        exec.periodic(&mut ctx);
        exec.stop(&mut ctx);

        assert!(exec.is_done());
        assert_eq!(count(&log, Event::Stop("root")), 1);

        exec.periodic(&mut ctx);
        assert_eq!(count(&log, Event::Update("root")), 1);
    }

    #[test]
    fn test_replacing_does_not_stop_old_root() {
        let mut ctx = ActionContext::default();
        let log = new_log();

        let mut exec = AutoExecutor::new(MockAction::boxed("old", 5, &log));
        exec.periodic(&mut ctx);

        exec = AutoExecutor::new(Box::new(EmptyAction::new()));
        exec.periodic(&mut ctx);

        assert!(exec.is_done());
        assert_eq!(count(&log, Event::Stop("old")), 0);
    }
}
