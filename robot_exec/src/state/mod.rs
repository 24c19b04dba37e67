//! # Robot state
//!
//! This module tracks where the robot is on the field over time. Localisation sources (odometry,
//! vision) record timestamped pose observations, and consumers such as targeting or autonomous
//! actions query the pose at any point in time.
//!
//! A [`RobotState`] is constructed once at start up and shared by [`std::sync::Arc`] handle
//! between everything that needs it. Observations may come from a different thread to the control
//! loop, so the history is guarded by a lock.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

mod odometry;
mod pose;

pub use odometry::{Odometry, OdometryParams};
pub use pose::Pose2d;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::{debug, warn};
use std::sync::{Mutex, MutexGuard, PoisonError};
use util::interp_map::InterpMap;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Time history of the robot's pose in the field frame.
///
/// The history is not bounded, it grows by one entry per observation until it is reset.
#[derive(Debug, Default)]
pub struct RobotState {
    field_to_robot: Mutex<InterpMap<Pose2d>>,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl RobotState {
    /// Create a new state with no pose history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the robot was at `pose` at `timestamp_s`.
    ///
    /// Observations may arrive in any order. An observation at a timestamp which has already been
    /// observed replaces the earlier one. Non-finite timestamps cannot be ordered and are dropped.
    pub fn observe_field_to_robot(&self, timestamp_s: f64, pose: Pose2d) {
        if !timestamp_s.is_finite() {
            warn!("Pose observation with non-finite timestamp {} dropped", timestamp_s);
            return;
        }

        if self.history().insert(timestamp_s, pose).is_some() {
            debug!("Pose observation at {:.4} s replaced", timestamp_s);
        }
    }

    /// Get the pose of the robot at `timestamp_s`.
    ///
    /// Between two observations the pose is interpolated. Before the first or after the last
    /// observation the nearest observation is returned. With no observations the identity pose is
    /// returned.
    pub fn get_field_to_robot(&self, timestamp_s: f64) -> Pose2d {
        self.history().get(timestamp_s).unwrap_or_default()
    }

    /// Get the chronologically latest observation, or `None` if there are no observations.
    pub fn get_latest_field_to_robot(&self) -> Option<(f64, Pose2d)> {
        self.history().latest().map(|(t, p)| (t, *p))
    }

    /// Clear the pose history.
    pub fn reset_field_to_robot(&self) {
        self.history().clear();
        debug!("Pose history reset");
    }

    /// Number of observations currently held.
    pub fn num_observations(&self) -> usize {
        self.history().len()
    }

    /// Lock the history.
    ///
    /// A panic while holding the lock cannot leave the map half-modified, so a poisoned lock is
    /// still used.
    fn history(&self) -> MutexGuard<'_, InterpMap<Pose2d>> {
        self.field_to_robot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::{f64::consts::PI, sync::Arc, thread};

    const EPS: f64 = 1e-9;

    fn assert_pose_eq(a: &Pose2d, b: &Pose2d) {
        assert!(
            a.distance_to(b) < EPS && (a.heading_rad - b.heading_rad).abs() < EPS,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_interpolated_query() {
        let state = RobotState::new();
        state.observe_field_to_robot(0.0, Pose2d::new(0.0, 0.0, 0.0));
        state.observe_field_to_robot(2.0, Pose2d::new(4.0, 2.0, PI / 2.0));

        assert_pose_eq(
            &state.get_field_to_robot(1.0),
            &Pose2d::new(2.0, 1.0, PI / 4.0)
        );
        assert_pose_eq(
            &state.get_field_to_robot(0.5),
            &Pose2d::new(1.0, 0.5, PI / 8.0)
        );
    }

    #[test]
    fn test_clamped_query() {
        let state = RobotState::new();
        let first = Pose2d::new(1.0, 1.0, 0.5);
        let last = Pose2d::new(3.0, -1.0, -0.5);
        state.observe_field_to_robot(10.0, first);
        state.observe_field_to_robot(12.0, last);

        assert_eq!(state.get_field_to_robot(0.0), first);
        assert_eq!(state.get_field_to_robot(10.0), first);
        assert_eq!(state.get_field_to_robot(12.0), last);
        assert_eq!(state.get_field_to_robot(100.0), last);
    }

    #[test]
    fn test_empty_and_reset() {
        let state = RobotState::new();

        assert_eq!(state.get_latest_field_to_robot(), None);
        assert_eq!(state.get_field_to_robot(3.0), Pose2d::default());

        state.observe_field_to_robot(1.0, Pose2d::new(1.0, 2.0, 3.0));
        assert_eq!(state.num_observations(), 1);

        state.reset_field_to_robot();

        assert_eq!(state.num_observations(), 0);
        assert_eq!(state.get_latest_field_to_robot(), None);
        assert_eq!(state.get_field_to_robot(1.0), Pose2d::default());
    }

    #[test]
    fn test_overwrite() {
        let state = RobotState::new();
        let second = Pose2d::new(5.0, 5.0, 1.0);
        state.observe_field_to_robot(1.0, Pose2d::new(1.0, 1.0, 0.0));
        state.observe_field_to_robot(1.0, second);

        assert_eq!(state.num_observations(), 1);
        assert_eq!(state.get_field_to_robot(1.0), second);
        assert_eq!(state.get_latest_field_to_robot(), Some((1.0, second)));
    }

    #[test]
    fn test_latest_is_chronological() {
        let state = RobotState::new();
        let newest = Pose2d::new(9.0, 0.0, 0.0);
        state.observe_field_to_robot(5.0, newest);
        state.observe_field_to_robot(1.0, Pose2d::new(1.0, 0.0, 0.0));
        state.observe_field_to_robot(3.0, Pose2d::new(3.0, 0.0, 0.0));

        assert_eq!(state.get_latest_field_to_robot(), Some((5.0, newest)));
        assert_pose_eq(&state.get_field_to_robot(4.0), &Pose2d::new(6.0, 0.0, 0.0));
    }

    #[test]
    fn test_non_finite_timestamp_dropped() {
        let state = RobotState::new();
        state.observe_field_to_robot(f64::NAN, Pose2d::new(1.0, 0.0, 0.0));
        state.observe_field_to_robot(f64::INFINITY, Pose2d::new(1.0, 0.0, 0.0));

        assert_eq!(state.num_observations(), 0);
    }

    #[test]
    fn test_observe_from_other_thread() {
        let state = Arc::new(RobotState::new());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let state = state.clone();
                thread::spawn(move || {
                    for j in 0..100 {
                        let t = (i * 100 + j) as f64;
                        state.observe_field_to_robot(t, Pose2d::new(t, 0.0, 0.0));
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(state.num_observations(), 400);
        assert_eq!(
            state.get_latest_field_to_robot().map(|(t, _)| t),
            Some(399.0)
        );
    }
}
