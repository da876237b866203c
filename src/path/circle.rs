// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the circular Cartesian path.
use log::debug;
use nalgebra::UnitQuaternion;
use std::f64::consts::PI;

use crate::exception::{create_not_initialized_exception, PathException};
use crate::path::control_types::Pose;
use crate::path::minimum_jerk::{MinimumJerk, QuinticCoefficients};
use crate::utils::CartesianPoint;
use crate::PathResult;

/// Moves the end effector once around a circle in the XY plane.
///
/// The circle passes through the initial position and its center lies `radius` in +X from
/// it. The angle follows a minimum-jerk profile from 0 to 2π, so the motion starts and ends at
/// the initial position with zero velocity and acceleration.
#[derive(Debug, Clone)]
pub struct Circle {
    path_generator: MinimumJerk,
    coefficient: Option<QuinticCoefficients>,
    joint_num: usize,
    move_time: f64,
    initial_position: CartesianPoint,
    radius: f64,
    orientation: UnitQuaternion<f64>,
}

impl Circle {
    /// Creates a new Circle.
    ///
    /// # Arguments
    /// * `joint_num` - Number of joints of the manipulator. It is not needed for the Cartesian
    /// interpolation.
    pub fn new(joint_num: usize) -> Self {
        Circle {
            path_generator: MinimumJerk::new(),
            coefficient: None,
            joint_num,
            move_time: 0.,
            initial_position: CartesianPoint::zeros(),
            radius: 0.,
            orientation: UnitQuaternion::identity(),
        }
    }

    /// Stores the circle geometry and computes the angular profile.
    ///
    /// # Arguments
    /// * `initial_position` - Start and end point of the motion in \[m\].
    /// * `radius` - Radius of the circle in \[m\].
    /// * `move_time` - Duration of one revolution in \[s\].
    /// * `control_time` - Intended control period in \[s\].
    /// # Errors
    /// * [`InvalidGeometry`](`crate::exception::PathException::InvalidGeometry`) if the radius
    /// is not positive and finite.
    /// * [`InvalidDuration`](`crate::exception::PathException::InvalidDuration`) if one of the
    /// durations is not positive and finite.
    pub fn init(
        &mut self,
        initial_position: CartesianPoint,
        radius: f64,
        move_time: f64,
        control_time: f64,
    ) -> PathResult<()> {
        if !(radius.is_finite() && radius > 0.) {
            return Err(PathException::InvalidGeometry {
                message: format!("circle radius must be positive, got {}", radius),
            });
        }
        self.coefficient = Some(
            self.path_generator
                .progress_profile(move_time, control_time)?,
        );
        self.initial_position = initial_position;
        self.radius = radius;
        self.move_time = move_time;
        debug!(
            "circle path initialized, radius {} m, move time {} s",
            radius, move_time
        );
        Ok(())
    }

    /// Sets the orientation which is passed through to every returned pose.
    pub fn set_orientation(&mut self, orientation: UnitQuaternion<f64>) {
        self.orientation = orientation;
    }

    fn profile(&self) -> PathResult<&QuinticCoefficients> {
        self.coefficient
            .as_ref()
            .ok_or_else(|| create_not_initialized_exception("circle sampled before init"))
    }

    fn circle(&self, profile: &QuinticCoefficients, time_var: f64) -> CartesianPoint {
        let theta = 2. * PI * profile.position(time_var);
        self.initial_position
            + CartesianPoint::new(
                self.radius * (1. - f64::cos(theta)),
                -self.radius * f64::sin(theta),
                0.,
            )
    }

    /// Desired end effector pose `tick` seconds after the start of the motion.
    ///
    /// # Errors
    /// * [`NotInitialized`](`crate::exception::PathException::NotInitialized`) if
    /// [`init`](`Self::init`) did not succeed yet.
    pub fn get_pose(&self, tick: f64) -> PathResult<Pose> {
        let profile = self.profile()?;
        Ok(Pose::new(self.circle(profile, tick), self.orientation))
    }

    /// Desired translational velocity of the end effector in \[m/s\].
    pub fn get_velocity(&self, tick: f64) -> PathResult<CartesianPoint> {
        let profile = self.profile()?;
        let theta = 2. * PI * profile.position(tick);
        let theta_dot = 2. * PI * profile.velocity(tick);
        Ok(CartesianPoint::new(
            self.radius * f64::sin(theta) * theta_dot,
            -self.radius * f64::cos(theta) * theta_dot,
            0.,
        ))
    }

    /// Center of the circle in \[m\].
    pub fn center(&self) -> CartesianPoint {
        self.initial_position + CartesianPoint::new(self.radius, 0., 0.)
    }

    /// Radius of the circle in \[m\].
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Coefficients of the progress profile, zero before [`init`](`Self::init`).
    pub fn get_coefficient(&self) -> QuinticCoefficients {
        self.coefficient.unwrap_or_default()
    }

    /// Number of joints the path was created for.
    pub fn joint_num(&self) -> usize {
        self.joint_num
    }

    /// Move time in \[s\] of the last successful [`init`](`Self::init`).
    pub fn move_time(&self) -> f64 {
        self.move_time
    }
}

#[cfg(test)]
mod tests {
    use crate::exception::PathException;
    use crate::path::circle::Circle;
    use crate::utils::test_utils::{float_compare, slice_compare};
    use nalgebra::{UnitQuaternion, Vector3};

    const EPS: f64 = 1e-9;

    #[test]
    fn closed_loop() {
        let mut circle = Circle::new(4);
        circle.init(Vector3::zeros(), 5.0, 4.0, 0.01).unwrap();
        let start = circle.get_pose(0.).unwrap().position;
        let end = circle.get_pose(4.).unwrap().position;
        let half = circle.get_pose(2.).unwrap().position;
        slice_compare(start.as_slice(), &[0., 0., 0.], EPS);
        slice_compare(end.as_slice(), start.as_slice(), EPS);
        slice_compare(
            (half - circle.center()).as_slice(),
            (-(start - circle.center())).as_slice(),
            EPS,
        );
        slice_compare(half.as_slice(), &[10., 0., 0.], EPS);
    }

    #[test]
    fn stays_on_circle() {
        let initial_position = Vector3::new(0.3, -0.2, 0.45);
        let mut circle = Circle::new(4);
        circle.init(initial_position, 0.05, 3.0, 0.002).unwrap();
        let center = circle.center();
        let mut tick = 0.;
        while tick <= 3.0 {
            let position = circle.get_pose(tick).unwrap().position;
            float_compare((position - center).norm(), 0.05, EPS);
            float_compare(position.z, 0.45, EPS);
            tick += 0.002;
        }
    }

    #[test]
    fn rest_at_both_ends() {
        let mut circle = Circle::new(4);
        circle.init(Vector3::new(1., 2., 3.), 0.5, 2.5, 0.01).unwrap();
        assert!(circle.get_velocity(0.).unwrap().norm() < EPS);
        assert!(circle.get_velocity(2.5).unwrap().norm() < EPS);
        assert!(circle.get_velocity(1.25).unwrap().norm() > 0.1);

        let h = 1e-6;
        for i in 1..25 {
            let t = i as f64 * 0.1;
            let numeric = (circle.get_pose(t + h).unwrap().position
                - circle.get_pose(t - h).unwrap().position)
                / (2. * h);
            slice_compare(
                numeric.as_slice(),
                circle.get_velocity(t).unwrap().as_slice(),
                1e-5,
            );
        }
    }

    #[test]
    fn invalid_radius() {
        let mut circle = Circle::new(4);
        for &radius in [0., -1., f64::NAN, f64::INFINITY].iter() {
            assert!(matches!(
                circle.init(Vector3::zeros(), radius, 1.0, 0.01),
                Err(PathException::InvalidGeometry { .. })
            ));
        }
        assert!(matches!(
            circle.get_pose(0.),
            Err(PathException::NotInitialized { .. })
        ));
    }

    #[test]
    fn invalid_duration() {
        let mut circle = Circle::new(4);
        assert!(matches!(
            circle.init(Vector3::zeros(), 1.0, 0.0, 0.01),
            Err(PathException::InvalidDuration { .. })
        ));
        assert!(circle.get_pose(0.).is_err());
    }

    #[test]
    fn orientation_is_passed_through() {
        let mut circle = Circle::new(4);
        circle.init(Vector3::zeros(), 1.0, 1.0, 0.01).unwrap();
        let orientation = UnitQuaternion::from_euler_angles(3.1, 0., -0.4);
        circle.set_orientation(orientation);
        assert_eq!(circle.get_pose(0.3).unwrap().orientation, orientation);
    }

    #[test]
    fn reinit_overwrites_geometry() {
        let mut circle = Circle::new(4);
        circle.init(Vector3::zeros(), 1.0, 1.0, 0.01).unwrap();
        circle
            .init(Vector3::new(0., 1., 0.), 2.0, 2.0, 0.01)
            .unwrap();
        slice_compare(circle.center().as_slice(), &[2., 1., 0.], EPS);
        slice_compare(
            circle.get_pose(1.0).unwrap().position.as_slice(),
            &[4., 1., 0.],
            EPS,
        );
        float_compare(circle.radius(), 2.0, EPS);
    }
}
