// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains control loop adapters which turn a path into one setpoint per control period.
use std::time::Duration;

use crate::path::control_types::{BoundaryState, CartesianSetpoint, Finishable, JointSetpoint};
use crate::path::joint_trajectory::JointTrajectory;
use crate::path::path_generator::PathGenerator;
use crate::path::timing::MotionTiming;
use crate::PathResult;

/// Generates a joint motion between two sets of boundary states.
///
/// Call [`generate_motion`](`Self::generate_motion`) once per control period with the time
/// which passed since the last call (zero for the first call). The elapsed time is clamped to
/// the move time, so after the motion has finished the goal is held.
#[derive(Debug, Clone)]
pub struct JointMotionGenerator {
    trajectory: JointTrajectory,
    move_time: f64,
    time: Duration,
}

impl JointMotionGenerator {
    /// Creates a new JointMotionGenerator.
    ///
    /// # Arguments
    /// * `joint_num` - Number of joints.
    /// * `start` - State of each joint at the beginning of the motion.
    /// * `goal` - State of each joint at the end of the motion.
    /// * `timing` - Move time and control period.
    /// # Errors
    /// Same as [`JointTrajectory::init`](`crate::JointTrajectory::init`).
    /// # Panics
    /// If `joint_num` is zero.
    pub fn new(
        joint_num: usize,
        start: &[BoundaryState],
        goal: &[BoundaryState],
        timing: &MotionTiming,
    ) -> PathResult<Self> {
        let mut trajectory = JointTrajectory::new(joint_num);
        trajectory.init(start, goal, timing.move_time, timing.control_time)?;
        Ok(JointMotionGenerator {
            trajectory,
            move_time: timing.move_time,
            time: Duration::ZERO,
        })
    }

    /// Sends the joint setpoint for the current control period.
    ///
    /// # Arguments
    /// * `period` - Time since the last call.
    /// # Errors
    /// None in practice, the trajectory is initialized in [`new`](`Self::new`).
    pub fn generate_motion(&mut self, period: &Duration) -> PathResult<JointSetpoint> {
        self.time += *period;
        let time = self.time.as_secs_f64();
        let mut output = self
            .trajectory
            .get_sample(f64::min(time, self.move_time))?;
        output.set_motion_finished(time >= self.move_time);
        Ok(output)
    }

    /// Restarts the motion from the beginning.
    pub fn reset(&mut self) {
        self.time = Duration::ZERO;
    }

    /// Elapsed time in \[s\] since the start of the motion.
    pub fn time(&self) -> f64 {
        self.time.as_secs_f64()
    }

    /// The underlying trajectory.
    pub fn trajectory(&self) -> &JointTrajectory {
        &self.trajectory
    }
}

/// Generates a Cartesian motion along a [`PathGenerator`](`crate::PathGenerator`).
#[derive(Debug, Clone)]
pub struct CartesianMotionGenerator {
    path: PathGenerator,
    time: Duration,
}

impl CartesianMotionGenerator {
    /// Creates a new CartesianMotionGenerator for an initialized path.
    ///
    /// # Errors
    /// * [`NotInitialized`](`crate::exception::PathException::NotInitialized`) if the path was
    /// built by hand and not initialized.
    pub fn new(path: PathGenerator) -> PathResult<Self> {
        path.get_pose(0.)?;
        Ok(CartesianMotionGenerator {
            path,
            time: Duration::ZERO,
        })
    }

    /// Sends the Cartesian setpoint for the current control period.
    ///
    /// Never fails for a generator created with [`new`](`Self::new`).
    ///
    /// # Arguments
    /// * `period` - Time since the last call.
    pub fn generate_motion(&mut self, period: &Duration) -> PathResult<CartesianSetpoint> {
        self.time += *period;
        let time = self.time.as_secs_f64();
        let move_time = self.path.move_time();
        let tick = f64::min(time, move_time);
        let mut output = CartesianSetpoint::new(
            self.path.get_pose(tick)?,
            self.path.get_velocity(tick)?,
        );
        output.set_motion_finished(time >= move_time);
        Ok(output)
    }

    /// Restarts the motion from the beginning.
    pub fn reset(&mut self) {
        self.time = Duration::ZERO;
    }

    /// Elapsed time in \[s\] since the start of the motion.
    pub fn time(&self) -> f64 {
        self.time.as_secs_f64()
    }

    /// The underlying path.
    pub fn path(&self) -> &PathGenerator {
        &self.path
    }
}
