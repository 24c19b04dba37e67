//! # Leaf actions
//!
//! Actions which command subsystems directly, the building blocks of autonomous routines.

mod drive;
mod hood;
mod intake;
mod wait;

pub use drive::{DriveOpenLoopAction, DriveToDistanceAction, OrientForShotAction};
pub use hood::SetHoodAction;
pub use intake::IntakeAction;
pub use wait::WaitAction;
