// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the value types exchanged with the pose manager and the control loop.

use serde::Deserialize;
use serde::Serialize;

use crate::utils::{homogeneous_to_isometry, isometry_to_homogeneous, CartesianPoint};
use nalgebra::{Isometry3, Translation3, UnitQuaternion};

/// Kinematic state of one scalar degree of freedom at a point in time.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq)]
pub struct BoundaryState {
    /// Position, e.g. a joint angle in \[rad\].
    pub position: f64,
    /// Velocity, e.g. in \[rad/s\].
    pub velocity: f64,
    /// Acceleration, e.g. in \[rad/s^2\].
    pub acceleration: f64,
}

impl BoundaryState {
    /// Creates a new BoundaryState.
    pub fn new(position: f64, velocity: f64, acceleration: f64) -> Self {
        BoundaryState {
            position,
            velocity,
            acceleration,
        }
    }
    /// Creates a BoundaryState at rest, i.e. with zero velocity and acceleration.
    pub fn rest(position: f64) -> Self {
        BoundaryState::new(position, 0., 0.)
    }
}

/// End effector pose in the base frame.
///
/// The path generators only write the position. The orientation is carried through
/// unchanged so the pose manager can decide what to do with it.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Pose {
    /// Position in \[m\].
    pub position: CartesianPoint,
    /// Orientation of the end effector.
    pub orientation: UnitQuaternion<f64>,
}

impl Default for Pose {
    fn default() -> Self {
        Pose::new(CartesianPoint::zeros(), UnitQuaternion::identity())
    }
}

impl Pose {
    /// Creates a new Pose.
    pub fn new(position: CartesianPoint, orientation: UnitQuaternion<f64>) -> Self {
        Pose {
            position,
            orientation,
        }
    }
    /// Column-major homogeneous transformation from the end effector frame to the base frame.
    pub fn to_homogeneous(&self) -> [f64; 16] {
        isometry_to_homogeneous(&self.to_isometry())
    }
    /// Converts the pose into an Isometry.
    pub fn to_isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(Translation3::from(self.position), self.orientation)
    }
}

impl From<Isometry3<f64>> for Pose {
    fn from(isometry: Isometry3<f64>) -> Self {
        Pose::new(isometry.translation.vector, isometry.rotation)
    }
}

impl From<[f64; 16]> for Pose {
    fn from(array: [f64; 16]) -> Self {
        homogeneous_to_isometry(&array).into()
    }
}

/// Helper type for motion generation loops.
///
/// Used to determine whether to terminate a loop after the setpoint has been sent.
pub trait Finishable {
    /// Determines whether to finish a currently running motion.
    fn is_finished(&self) -> bool;
    /// Sets the attribute which decide if the currently running motion should be finished
    fn set_motion_finished(&mut self, finished: bool);
    /// Helper method to indicate that a motion should stop after processing this setpoint.
    fn motion_finished(self) -> Self;
}

/// Joint space setpoint for one control tick.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JointSetpoint {
    motion_finished: bool,
    /// Desired joint positions.
    pub q: Vec<f64>,
    /// Desired joint velocities.
    pub dq: Vec<f64>,
    /// Desired joint accelerations.
    pub ddq: Vec<f64>,
}

impl JointSetpoint {
    /// Creates a new JointSetpoint instance.
    /// # Panics
    /// If the three vectors do not have the same length.
    pub fn new(q: Vec<f64>, dq: Vec<f64>, ddq: Vec<f64>) -> Self {
        assert!(q.len() == dq.len() && q.len() == ddq.len());
        JointSetpoint {
            motion_finished: false,
            q,
            dq,
            ddq,
        }
    }
}

impl Finishable for JointSetpoint {
    fn is_finished(&self) -> bool {
        self.motion_finished
    }
    fn set_motion_finished(&mut self, finished: bool) {
        self.motion_finished = finished;
    }
    fn motion_finished(mut self) -> Self {
        self.set_motion_finished(true);
        self
    }
}

/// Cartesian setpoint for one control tick.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct CartesianSetpoint {
    motion_finished: bool,
    /// Desired end effector pose in base frame.
    pub pose: Pose,
    /// Desired translational velocity of the end effector in \[m/s\].
    pub velocity: CartesianPoint,
}

impl CartesianSetpoint {
    /// Creates a new CartesianSetpoint instance.
    pub fn new(pose: Pose, velocity: CartesianPoint) -> Self {
        CartesianSetpoint {
            motion_finished: false,
            pose,
            velocity,
        }
    }
}

impl From<Pose> for CartesianSetpoint {
    fn from(pose: Pose) -> Self {
        CartesianSetpoint::new(pose, CartesianPoint::zeros())
    }
}

impl Finishable for CartesianSetpoint {
    fn is_finished(&self) -> bool {
        self.motion_finished
    }
    fn set_motion_finished(&mut self, finished: bool) {
        self.motion_finished = finished;
    }
    fn motion_finished(mut self) -> Self {
        self.set_motion_finished(true);
        self
    }
}
