//! Scripted action used to test the composites and the executor.

use std::{cell::RefCell, rc::Rc};

use super::action::{Action, ActionContext, ActionStatus};

/// Calls made on mock actions, in the order they happened.
pub type EventLog = Rc<RefCell<Vec<Event>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Start(&'static str),
    Update(&'static str),
    Stop(&'static str),
}

/// Action which finishes after a fixed number of updates.
#[derive(Debug)]
pub struct MockAction {
    name: &'static str,
    updates_to_finish: usize,
    num_updates: usize,
    status: ActionStatus,
    log: EventLog,
}

pub fn new_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Number of times `event` appears in the log.
pub fn count(log: &EventLog, event: Event) -> usize {
    log.borrow().iter().filter(|e| **e == event).count()
}

impl MockAction {
    pub fn new(name: &'static str, updates_to_finish: usize, log: &EventLog) -> Self {
        Self {
            name,
            updates_to_finish,
            num_updates: 0,
            status: ActionStatus::NotStarted,
            log: log.clone(),
        }
    }

    pub fn boxed(name: &'static str, updates_to_finish: usize, log: &EventLog) -> Box<dyn Action> {
        Box::new(Self::new(name, updates_to_finish, log))
    }
}

impl Action for MockAction {
    fn start(&mut self, _ctx: &mut ActionContext) {
        self.log.borrow_mut().push(Event::Start(self.name));
        self.status = if self.updates_to_finish == 0 {
            ActionStatus::Finished
        } else {
            ActionStatus::Running
        };
    }

    fn update(&mut self, _ctx: &mut ActionContext) {
        self.log.borrow_mut().push(Event::Update(self.name));
        self.num_updates += 1;
        if self.num_updates >= self.updates_to_finish {
            self.status = ActionStatus::Finished;
        }
    }

    fn done(&self) -> bool {
        self.status.is_finished()
    }

    fn stop(&mut self, _ctx: &mut ActionContext) {
        self.log.borrow_mut().push(Event::Stop(self.name));
        self.status = ActionStatus::Finished;
    }
}
