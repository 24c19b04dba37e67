//! # [`ParallelAction`] implementation

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use super::action::{Action, ActionContext, ActionStatus};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Runs all of its children together, finishing once every child has finished.
///
/// Children are interleaved within the cycle in the order given, not run on separate threads.
/// A child which finishes early receives no more updates.
#[derive(Debug)]
pub struct ParallelAction {
    actions: Vec<Box<dyn Action>>,

    status: ActionStatus,

    /// Set once the children have been stopped
    stopped: bool,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl ParallelAction {
    pub fn new(actions: Vec<Box<dyn Action>>) -> Self {
        Self {
            actions,
            status: ActionStatus::NotStarted,
            stopped: false,
        }
    }

    fn all_done(&self) -> bool {
        self.actions.iter().all(|a| a.done())
    }
}

impl Action for ParallelAction {
    fn start(&mut self, ctx: &mut ActionContext) {
        for action in self.actions.iter_mut() {
            action.start(ctx);
        }

        self.status = if self.all_done() {
            ActionStatus::Finished
        } else {
            ActionStatus::Running
        };
    }

    fn update(&mut self, ctx: &mut ActionContext) {
        if !self.status.is_running() {
            return;
        }

        for action in self.actions.iter_mut().filter(|a| !a.done()) {
            action.update(ctx);
        }

        if self.all_done() {
            self.status = ActionStatus::Finished;
        }
    }

    fn done(&self) -> bool {
        self.status.is_finished()
    }

    fn stop(&mut self, ctx: &mut ActionContext) {
        if self.stopped {
            return;
        }

        for action in self.actions.iter_mut() {
            action.stop(ctx);
        }

        self.stopped = true;
        self.status = ActionStatus::Finished;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::auto::mock::{count, new_log, Event, MockAction};

    #[test]
    fn test_done_when_all_done() {
        let mut ctx = ActionContext::default();
        let log = new_log();

        let mut par = ParallelAction::new(vec![
            MockAction::boxed("a", 1, &log),
            MockAction::boxed("b", 3, &log),
        ]);

        par.start(&mut ctx);
        assert_eq!(*log.borrow(), vec![Event::Start("a"), Event::Start("b")]);

        par.update(&mut ctx);
        assert!(!par.done());
        par.update(&mut ctx);
        assert!(!par.done());
        par.update(&mut ctx);
        assert!(par.done());

        // a is not updated after it finished on the first tick
        assert_eq!(count(&log, Event::Update("a")), 1);
        assert_eq!(count(&log, Event::Update("b")), 3);
    }

    #[test]
    fn test_all_children_finish_on_start() {
        let mut ctx = ActionContext::default();
        let log = new_log();

        let mut par = ParallelAction::new(vec![
            MockAction::boxed("a", 0, &log),
            MockAction::boxed("b", 0, &log),
        ]);

        par.start(&mut ctx);
        assert!(par.done());

        let mut empty = ParallelAction::new(Vec::new());
        empty.start(&mut ctx);
        assert!(empty.done());
    }

    #[test]
    fn test_stop_stops_every_child() {
        let mut ctx = ActionContext::default();
        let log = new_log();

        let mut par = ParallelAction::new(vec![
            MockAction::boxed("a", 1, &log),
            MockAction::boxed("b", 3, &log),
        ]);

        par.start(&mut ctx);
        par.update(&mut ctx);
        par.stop(&mut ctx);

        assert!(par.done());
        assert_eq!(count(&log, Event::Stop("a")), 1);
        assert_eq!(count(&log, Event::Stop("b")), 1);

        let events_before = log.borrow().len();
        par.stop(&mut ctx);
        par.update(&mut ctx);
        assert!(par.done());
        assert_eq!(log.borrow().len(), events_before);
    }

    #[test]
    fn test_stop_before_start() {
        let mut ctx = ActionContext::default();
        let log = new_log();

        let mut par = ParallelAction::new(vec![MockAction::boxed("a", 1, &log)]);
        par.stop(&mut ctx);

        assert!(par.done());
        assert_eq!(count(&log, Event::Start("a")), 0);
    }
}
