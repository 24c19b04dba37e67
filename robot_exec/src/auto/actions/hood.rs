//! # [`SetHoodAction`] implementation

use log::debug;

use crate::{
    auto::action::{Action, ActionContext, ActionStatus},
    subsystems::HoodDemand,
};

/// Commands the hood to a position, finishing immediately.
///
/// The hood moves to its demand on its own, this action does not wait for it to arrive.
#[derive(Debug)]
pub struct SetHoodAction {
    demand: HoodDemand,

    status: ActionStatus,
}

impl SetHoodAction {
    pub fn new(demand: HoodDemand) -> Self {
        Self {
            demand,
            status: ActionStatus::NotStarted,
        }
    }
}

impl Action for SetHoodAction {
    fn start(&mut self, ctx: &mut ActionContext) {
        debug!("SetHoodAction: {:?}", self.demand);

        match self.demand {
            HoodDemand::Stowed => ctx.subsystems.hood.set_want_stow(),
            HoodDemand::Position(deg) => ctx.subsystems.hood.set_want_position(deg),
        }

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
    fn test_set_hood() {
        let mut ctx = ActionContext::default();

        let mut action = SetHoodAction::new(HoodDemand::Position(35.0));
        action.start(&mut ctx);

        assert!(action.done());
        assert_eq!(ctx.subsystems.hood.demand(), HoodDemand::Position(35.0));

        let mut action = SetHoodAction::new(HoodDemand::Stowed);
        action.start(&mut ctx);
        assert_eq!(ctx.subsystems.hood.demand(), HoodDemand::Stowed);
    }

    #[test]
    fn test_stop_before_start_commands_nothing() {
        let mut ctx = ActionContext::default();

        let mut action = SetHoodAction::new(HoodDemand::Position(35.0));
        action.stop(&mut ctx);

        assert!(action.done());
        assert_eq!(ctx.subsystems.hood.demand(), HoodDemand::Stowed);
    }
}
