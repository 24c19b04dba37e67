//! # Intake subsystem

use log::debug;

use super::Subsystem;

/// Demand on the intake.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntakeDemand {
    /// Arm deployed outside the frame perimeter
    pub deployed: bool,

    /// Rollers running inwards
    pub running: bool,
}

/// Ground intake for collecting balls.
#[derive(Debug, Default)]
pub struct Intake {
    demand: IntakeDemand,

    last_emitted: Option<IntakeDemand>,
}

impl Intake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_want_deployed(&mut self, deployed: bool) {
        self.demand.deployed = deployed;

        // Rollers only run while deployed
        if !deployed {
            self.demand.running = false;
        }
    }

    pub fn set_want_running(&mut self, running: bool) {
        self.demand.running = running && self.demand.deployed;
    }

    pub fn demand(&self) -> IntakeDemand {
        self.demand
    }
}

impl Subsystem for Intake {
    fn name(&self) -> &'static str {
        "Intake"
    }

    fn periodic(&mut self) {
        if self.last_emitted != Some(self.demand) {
            debug!("Intake demand: {:?}", self.demand);
            self.last_emitted = Some(self.demand);
        }
    }

    fn stop(&mut self) {
        self.demand = IntakeDemand::default();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rollers_need_deploy() {
        let mut intake = Intake::new();

        intake.set_want_running(true);
        assert!(!intake.demand().running);

        intake.set_want_deployed(true);
        intake.set_want_running(true);
        assert_eq!(intake.demand(), IntakeDemand { deployed: true, running: true });

        intake.set_want_deployed(false);
        assert_eq!(intake.demand(), IntakeDemand::default());
    }
}
