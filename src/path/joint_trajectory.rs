// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the joint space trajectory sampler.
use log::debug;
use nalgebra::{Matrix6xX, Vector6};

use crate::exception::{check_durations, create_not_initialized_exception, PathException};
use crate::path::control_types::{BoundaryState, JointSetpoint};
use crate::path::minimum_jerk::{MinimumJerk, QuinticCoefficients};
use crate::PathResult;

/// Minimum-jerk trajectory for every joint of a manipulator.
///
/// All joints share the same move time, so they start and stop together.
#[derive(Debug, Clone)]
pub struct JointTrajectory {
    path_generator: MinimumJerk,
    joint_num: usize,
    /// column `i` holds the coefficients of joint `i`
    coefficient: Matrix6xX<f64>,
    move_time: Option<f64>,
}

impl JointTrajectory {
    /// Creates a new JointTrajectory for a fixed number of joints.
    /// # Panics
    /// If `joint_num` is zero.
    pub fn new(joint_num: usize) -> Self {
        assert!(joint_num > 0, "a joint trajectory needs at least one joint");
        JointTrajectory {
            path_generator: MinimumJerk::new(),
            joint_num,
            coefficient: Matrix6xX::zeros(joint_num),
            move_time: None,
        }
    }

    /// Computes the coefficients of all joints.
    ///
    /// # Arguments
    /// * `start` - State of each joint at the beginning of the motion.
    /// * `goal` - State of each joint at the end of the motion.
    /// * `move_time` - Duration of the motion in \[s\].
    /// * `control_time` - Intended control period in \[s\].
    /// # Errors
    /// * [`DimensionMismatch`](`crate::exception::PathException::DimensionMismatch`) if
    /// `start` or `goal` does not have one entry per joint.
    /// * [`InvalidDuration`](`crate::exception::PathException::InvalidDuration`) if one of the
    /// durations is not positive and finite.
    ///
    /// On error the previously computed trajectory stays untouched.
    pub fn init(
        &mut self,
        start: &[BoundaryState],
        goal: &[BoundaryState],
        move_time: f64,
        control_time: f64,
    ) -> PathResult<()> {
        if start.len() != self.joint_num || goal.len() != self.joint_num {
            return Err(PathException::DimensionMismatch {
                joint_num: self.joint_num,
                start: start.len(),
                goal: goal.len(),
            });
        }
        check_durations(move_time, control_time)?;

        let mut coefficient = Matrix6xX::zeros(self.joint_num);
        for (i, (start, goal)) in start.iter().zip(goal.iter()).enumerate() {
            self.path_generator
                .calc_coefficient(start, goal, move_time, control_time)?;
            let joint: Vector6<f64> = self.path_generator.get_coefficient().into();
            coefficient.set_column(i, &joint);
        }
        self.coefficient = coefficient;
        self.move_time = Some(move_time);
        debug!(
            "joint trajectory for {} joints initialized, move time {} s",
            self.joint_num, move_time
        );
        Ok(())
    }

    fn evaluate_into<F: Fn(&QuinticCoefficients) -> f64>(
        &self,
        function: F,
        out: &mut [f64],
    ) -> PathResult<()> {
        if self.move_time.is_none() {
            return Err(create_not_initialized_exception(
                "joint trajectory sampled before init",
            ));
        }
        if out.len() != self.joint_num {
            return Err(PathException::DimensionMismatch {
                joint_num: self.joint_num,
                start: out.len(),
                goal: out.len(),
            });
        }
        for (value, column) in out.iter_mut().zip(self.coefficient.column_iter()) {
            *value = function(&QuinticCoefficients::from(column.clone_owned()));
        }
        Ok(())
    }

    fn evaluate<F: Fn(&QuinticCoefficients) -> f64>(&self, function: F) -> PathResult<Vec<f64>> {
        let mut out = vec![0.; self.joint_num];
        self.evaluate_into(function, &mut out)?;
        Ok(out)
    }

    /// Desired joint positions `tick` seconds after the start of the motion.
    ///
    /// `tick` is not clamped. Past the move time the polynomials are extrapolated.
    pub fn get_position(&self, tick: f64) -> PathResult<Vec<f64>> {
        self.evaluate(|c| c.position(tick))
    }

    /// Desired joint velocities `tick` seconds after the start of the motion.
    pub fn get_velocity(&self, tick: f64) -> PathResult<Vec<f64>> {
        self.evaluate(|c| c.velocity(tick))
    }

    /// Desired joint accelerations `tick` seconds after the start of the motion.
    pub fn get_acceleration(&self, tick: f64) -> PathResult<Vec<f64>> {
        self.evaluate(|c| c.acceleration(tick))
    }

    /// Writes the joint positions at `tick` into `out` without allocating.
    ///
    /// # Errors
    /// * [`NotInitialized`](`crate::exception::PathException::NotInitialized`) before the first
    /// successful [`init`](`Self::init`).
    /// * [`DimensionMismatch`](`crate::exception::PathException::DimensionMismatch`) if `out`
    /// does not have one entry per joint.
    pub fn position_into(&self, tick: f64, out: &mut [f64]) -> PathResult<()> {
        self.evaluate_into(|c| c.position(tick), out)
    }

    /// Writes the joint velocities at `tick` into `out`, see [`position_into`](`Self::position_into`).
    pub fn velocity_into(&self, tick: f64, out: &mut [f64]) -> PathResult<()> {
        self.evaluate_into(|c| c.velocity(tick), out)
    }

    /// Writes the joint accelerations at `tick` into `out`, see [`position_into`](`Self::position_into`).
    pub fn acceleration_into(&self, tick: f64, out: &mut [f64]) -> PathResult<()> {
        self.evaluate_into(|c| c.acceleration(tick), out)
    }

    /// Positions, velocities and accelerations of all joints at `tick`.
    pub fn get_sample(&self, tick: f64) -> PathResult<JointSetpoint> {
        Ok(JointSetpoint::new(
            self.get_position(tick)?,
            self.get_velocity(tick)?,
            self.get_acceleration(tick)?,
        ))
    }

    /// Coefficients of all joints. Column `i` belongs to joint `i`.
    pub fn get_coefficient(&self) -> &Matrix6xX<f64> {
        &self.coefficient
    }

    /// Number of joints.
    pub fn joint_num(&self) -> usize {
        self.joint_num
    }

    /// Move time of the current trajectory, `None` before the first successful init.
    pub fn move_time(&self) -> Option<f64> {
        self.move_time
    }
}
