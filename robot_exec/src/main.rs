//! Main robot-side executable entry point.
//!
//! # Architecture
//!
//! The executable simulates a single match on a robot with no real hardware attached. The match
//! consists of:
//!
//!     - A disabled period, during which the autonomous routine can be chosen
//!     - The autonomous period, running the selected routine
//!     - A disabled period, after which the executable exits
//!
//! Each control cycle:
//!
//!     - Determines the current mode from the match clock
//!     - Integrates the drive demand into a pose estimate
//!     - Runs the handler of the current mode
//!     - Runs the subsystem periodics
//!
//! # Usage
//!
//! `robot_exec [AUTO_MODE]`, where `AUTO_MODE` overrides the routine given in the parameters.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{
    eyre::{eyre, WrapErr},
    Report,
};
use log::{debug, info, warn};
use std::env;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

// Internal
use robot_lib::{
    auto::{AutoMode, AutoParams},
    params::RobotExecParams,
    robot::{Robot, RobotMode},
    state::RobotState,
};
use util::{
    logger::{logger_init, LevelFilter},
    session::{self, Session},
    time::seconds_to_std_duration,
};

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    color_eyre::install()?;

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session =
        Session::new("robot_exec", "sessions").wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Debug, &session).wrap_err("Failed to initialise logging")?;

    info!("Robot Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let params: RobotExecParams =
        util::params::load("robot_exec.toml").wrap_err("Could not load exec params")?;
    params.validate().wrap_err("Invalid exec params")?;

    let auto_params: AutoParams =
        util::params::load("auto.toml").wrap_err("Could not load autonomous params")?;

    info!("Exec parameters loaded");

    // ---- COMMAND LINE ----

    let args: Vec<String> = env::args().collect();

    debug!("CLI arguments: {:?}", args);

    let cli_auto_mode = match args.len() {
        1 => None,
        2 => Some(
            args[1]
                .parse::<AutoMode>()
                .wrap_err("Failed to parse the autonomous mode argument")?,
        ),
        n => {
            return Err(eyre!(
                "Expected either zero or one argument, found {}",
                n - 1
            ))
        }
    };

    // ---- INITIALISE ROBOT ----

    let robot_state = Arc::new(RobotState::new());
    let mut robot = Robot::new(&params, auto_params, robot_state.clone());

    // The selection is applied like one from the drive station, during the pre-match disabled
    // period.
    if let Some(mode) = cli_auto_mode {
        if params.match_timing.pre_match_disabled_s < params.cycle_period_s {
            return Err(eyre!(
                "Selecting {} needs a pre-match disabled period of at least one cycle",
                mode
            ));
        }

        info!("Autonomous mode {} requested from the command line", mode);
        robot.request_auto_mode(mode);
    }

    info!("Robot initialised\n");

    // ---- MAIN LOOP ----

    info!("Beginning main loop\n");

    let match_start_s = session::get_elapsed_seconds();
    let mut num_cycles: u64 = 0;

    loop {
        // Get cycle start time
        let cycle_start_instant = Instant::now();

        let now_s = session::get_elapsed_seconds();

        // ---- MODE SELECTION ----

        let mode = match params.match_timing.mode_at(now_s - match_start_s) {
            Some(m) => m,
            None => break,
        };

        robot.set_mode(mode, now_s);

        // ---- ROBOT PROCESSING ----

        robot.periodic(now_s);

        // ---- CYCLE MANAGEMENT ----

        let cycle_dur = Instant::now() - cycle_start_instant;
        let cycle_period = seconds_to_std_duration(params.cycle_period_s);

        // Get sleep duration
        match cycle_period.checked_sub(cycle_dur) {
            Some(d) => thread::sleep(d),
            None => warn!(
                "Cycle overran by {:.06} s",
                cycle_dur.as_secs_f64() - cycle_period.as_secs_f64()
            ),
        }

        num_cycles += 1;
    }

    // ---- SHUTDOWN ----

    if robot.mode() != Some(RobotMode::Disabled) {
        robot.set_mode(RobotMode::Disabled, session::get_elapsed_seconds());
    }

    info!("Match complete after {} cycles", num_cycles);
    match robot_state.get_latest_field_to_robot() {
        Some((t, pose)) => info!(
            "Final pose at {:.3} s: ({:.3}, {:.3}) m, {:.3} rad",
            t,
            pose.x_m(),
            pose.y_m(),
            pose.heading_rad
        ),
        None => warn!("No pose was recorded"),
    }

    info!("End of execution");

    Ok(())
}
