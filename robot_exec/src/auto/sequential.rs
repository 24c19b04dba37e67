//! # [`SequentialAction`] implementation

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::debug;

use super::action::{Action, ActionContext, ActionStatus};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Runs its children one at a time, in order.
///
/// When a child finishes the next one is started in the same cycle, and any children which
/// finish as soon as they are started are skipped over in that cycle too. A newly started child
/// gets its first update in the following cycle.
#[derive(Debug)]
pub struct SequentialAction {
    actions: Vec<Box<dyn Action>>,

    /// Index of the child currently running
    current: usize,

    status: ActionStatus,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl SequentialAction {
    pub fn new(actions: Vec<Box<dyn Action>>) -> Self {
        Self {
            actions,
            current: 0,
            status: ActionStatus::NotStarted,
        }
    }

    /// Start each child whose predecessor has finished, until one is left running.
    fn advance(&mut self, ctx: &mut ActionContext) {
        let num_actions = self.actions.len();

        while let Some(child) = self.actions.get(self.current) {
            if !child.done() {
                return;
            }

            self.current += 1;

            if let Some(next) = self.actions.get_mut(self.current) {
                debug!(
                    "SequentialAction starting child {} of {}",
                    self.current + 1,
                    num_actions
                );
                next.start(ctx);
            }
        }

        self.status = ActionStatus::Finished;
    }
}

impl Action for SequentialAction {
    fn start(&mut self, ctx: &mut ActionContext) {
        self.status = ActionStatus::Running;

        match self.actions.first_mut() {
            Some(first) => first.start(ctx),
            None => self.status = ActionStatus::Finished,
        }
    }

    fn update(&mut self, ctx: &mut ActionContext) {
        if !self.status.is_running() {
            return;
        }

        if let Some(child) = self.actions.get_mut(self.current) {
            if !child.done() {
                child.update(ctx);
            }
        }

        self.advance(ctx);
    }

    fn done(&self) -> bool {
        self.status.is_finished()
    }

    fn stop(&mut self, ctx: &mut ActionContext) {
        // Children after the current one were never started, so only the current one needs
        // stopping.
        if self.status.is_running() {
            if let Some(child) = self.actions.get_mut(self.current) {
                child.stop(ctx);
            }
        }

        self.status = ActionStatus::Finished;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::auto::{
        action::EmptyAction,
        mock::{count, new_log, Event, MockAction},
    };

    #[test]
    fn test_children_run_in_order() {
        let mut ctx = ActionContext::default();
        let log = new_log();

        let mut seq = SequentialAction::new(vec![
            MockAction::boxed("a", 1, &log),
            MockAction::boxed("b", 2, &log),
        ]);

        seq.start(&mut ctx);
        assert_eq!(*log.borrow(), vec![Event::Start("a")]);

        // Tick 1: a finishes and b is started in the same tick
        seq.update(&mut ctx);
        assert_eq!(
            *log.borrow(),
            vec![Event::Start("a"), Event::Update("a"), Event::Start("b")]
        );
        assert!(!seq.done());

        // Tick 2
        seq.update(&mut ctx);
        assert!(!seq.done());

        // Tick 3
        seq.update(&mut ctx);
        assert!(seq.done());

        assert_eq!(count(&log, Event::Update("a")), 1);
        assert_eq!(count(&log, Event::Update("b")), 2);

        // Further updates do nothing
        seq.update(&mut ctx);
        assert_eq!(count(&log, Event::Update("b")), 2);
    }

    #[test]
    fn test_zero_duration_children_cascade() {
        let mut ctx = ActionContext::default();
        let log = new_log();

        let mut seq = SequentialAction::new(vec![
            MockAction::boxed("a", 1, &log),
            MockAction::boxed("b", 0, &log),
            Box::new(EmptyAction::new()),
            MockAction::boxed("c", 1, &log),
        ]);

        seq.start(&mut ctx);
        seq.update(&mut ctx);

        // b and the empty action finish on start, so c is started on the first tick
        assert_eq!(
            *log.borrow(),
            vec![
                Event::Start("a"),
                Event::Update("a"),
                Event::Start("b"),
                Event::Start("c"),
            ]
        );
        assert_eq!(count(&log, Event::Update("b")), 0);

        seq.update(&mut ctx);
        assert!(seq.done());
    }

    #[test]
    fn test_empty_sequence() {
        let mut ctx = ActionContext::default();
        let mut seq = SequentialAction::new(Vec::new());

        assert!(!seq.done());
        seq.start(&mut ctx);
        assert!(seq.done());
    }

    #[test]
    fn test_stop_discards_remaining() {
        let mut ctx = ActionContext::default();
        let log = new_log();

        let mut seq = SequentialAction::new(vec![
            MockAction::boxed("a", 3, &log),
            MockAction::boxed("b", 1, &log),
        ]);

        seq.start(&mut ctx);
        seq.update(&mut ctx);
        seq.stop(&mut ctx);

        assert!(seq.done());
        assert_eq!(count(&log, Event::Stop("a")), 1);
        assert_eq!(count(&log, Event::Start("b")), 0);
        assert_eq!(count(&log, Event::Stop("b")), 0);

        // Stopping again changes nothing
        let events_before = log.borrow().len();
        seq.stop(&mut ctx);
        seq.update(&mut ctx);
        assert!(seq.done());
        assert_eq!(log.borrow().len(), events_before);
    }

    #[test]
    fn test_stop_before_start() {
        let mut ctx = ActionContext::default();
        let log = new_log();

        let mut seq = SequentialAction::new(vec![MockAction::boxed("a", 1, &log)]);

        seq.stop(&mut ctx);
        seq.stop(&mut ctx);

        assert!(seq.done());
        assert!(log.borrow().is_empty());
    }
}
