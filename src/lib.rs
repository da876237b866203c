// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! # om-path-rs
//! om-path-rs generates minimum-jerk trajectories for robot manipulators. It is meant to be
//! called once per control tick from a real-time control loop to obtain the next setpoint.
//!
//! ## Design
//! Every path is built on the quintic polynomial of [`MinimumJerk`], which connects two
//! boundary states (position, velocity and acceleration) in a given move time:
//! * [`JointTrajectory`] - one polynomial per joint, sampled in joint space.
//! * [`Line`] - a straight Cartesian line, the progress along it follows a minimum-jerk profile.
//! * [`Circle`] - one revolution of a circle with a minimum-jerk angular profile.
//!
//! Paths are configured once per motion segment with `init` and then sampled with the elapsed
//! time since the start of the segment. Sampling does not advance any internal clock. The
//! [`JointMotionGenerator`] and [`CartesianMotionGenerator`] wrap a path for control loops
//! which only know the period since their last call.
//!
//! # Example:
//!```
//! use om_path::{BoundaryState, JointTrajectory, PathResult};
//! fn main() -> PathResult<()> {
//!     let mut trajectory = JointTrajectory::new(2);
//!     let start = [BoundaryState::rest(0.), BoundaryState::rest(0.5)];
//!     let goal = [BoundaryState::rest(10.), BoundaryState::rest(-0.5)];
//!     trajectory.init(&start, &goal, 2.0, 0.01)?;
//!     let velocity = trajectory.get_velocity(1.0)?;
//!     assert!((velocity[0] - 9.375).abs() < 1e-9);
//!     let position = trajectory.get_position(2.0)?;
//!     assert!((position[1] + 0.5).abs() < 1e-9);
//!     Ok(())
//! }
//! ```
//!
//! The functions return a [`PathResult`] which is either Ok or a
//! [`PathException`](`crate::exception::PathException`). All errors are detected when a path
//! is initialized. Once initialized, sampling always succeeds.
//!
//! A Cartesian path inside a control loop:
//!```
//! use std::time::Duration;
//! use om_path::{CartesianMotionGenerator, Finishable, Line, PathResult};
//! use nalgebra::Vector3;
//! fn main() -> PathResult<()> {
//!     let mut line = Line::new(4);
//!     line.set_two_points(Vector3::new(0.3, 0., 0.5), Vector3::new(0.3, 0.1, 0.4));
//!     line.init(1.0, 0.001)?;
//!     let mut motion_generator = CartesianMotionGenerator::new(line.into())?;
//!     let mut period = Duration::from_secs(0);
//!     loop {
//!         let setpoint = motion_generator.generate_motion(&period)?;
//!         // send setpoint.pose to the pose manager here
//!         if setpoint.is_finished() {
//!             break;
//!         }
//!         period = Duration::from_millis(1);
//!     }
//!     Ok(())
//! }
//! ```
pub mod exception;
pub mod path;
pub mod utils;

pub use exception::{PathException, PathResult};
pub use path::circle::Circle;
pub use path::control_types::*;
pub use path::joint_trajectory::JointTrajectory;
pub use path::line::Line;
pub use path::minimum_jerk::{MinimumJerk, QuinticCoefficients};
pub use path::motion_generator::{CartesianMotionGenerator, JointMotionGenerator};
pub use path::path_generator::{PathDescription, PathGenerator};
pub use path::timing::MotionTiming;
pub use utils::*;
