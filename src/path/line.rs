// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the straight line Cartesian path.
use log::debug;
use nalgebra::UnitQuaternion;

use crate::exception::create_not_initialized_exception;
use crate::path::control_types::Pose;
use crate::path::minimum_jerk::{MinimumJerk, QuinticCoefficients};
use crate::utils::CartesianPoint;
use crate::PathResult;

/// Moves the end effector along a straight line between two points.
///
/// The progress along the line follows a minimum-jerk profile, so the end effector starts
/// and stops with zero velocity and acceleration.
#[derive(Debug, Clone)]
pub struct Line {
    path_generator: MinimumJerk,
    coefficient: Option<QuinticCoefficients>,
    joint_num: usize,
    move_time: f64,
    points: Option<(CartesianPoint, CartesianPoint)>,
    orientation: UnitQuaternion<f64>,
}

impl Line {
    /// Creates a new Line.
    ///
    /// # Arguments
    /// * `joint_num` - Number of joints of the manipulator. It is not needed for the Cartesian
    /// interpolation.
    pub fn new(joint_num: usize) -> Self {
        Line {
            path_generator: MinimumJerk::new(),
            coefficient: None,
            joint_num,
            move_time: 0.,
            points: None,
            orientation: UnitQuaternion::identity(),
        }
    }

    /// Computes the progress profile of the line.
    ///
    /// # Errors
    /// * [`InvalidDuration`](`crate::exception::PathException::InvalidDuration`) if one of the
    /// durations is not positive and finite.
    pub fn init(&mut self, move_time: f64, control_time: f64) -> PathResult<()> {
        self.coefficient = Some(
            self.path_generator
                .progress_profile(move_time, control_time)?,
        );
        self.move_time = move_time;
        debug!("line path initialized, move time {} s", move_time);
        Ok(())
    }

    /// Sets start and end point of the line in \[m\].
    pub fn set_two_points(&mut self, start: CartesianPoint, end: CartesianPoint) {
        self.points = Some((start, end));
    }

    /// Sets the orientation which is passed through to every returned pose.
    pub fn set_orientation(&mut self, orientation: UnitQuaternion<f64>) {
        self.orientation = orientation;
    }

    fn configured(
        &self,
    ) -> PathResult<(&QuinticCoefficients, &CartesianPoint, &CartesianPoint)> {
        match (&self.coefficient, &self.points) {
            (Some(coefficient), Some((start, end))) => Ok((coefficient, start, end)),
            (None, _) => Err(create_not_initialized_exception("line sampled before init")),
            (_, None) => Err(create_not_initialized_exception(
                "line sampled before set_two_points",
            )),
        }
    }

    /// Desired end effector pose `tick` seconds after the start of the motion.
    ///
    /// # Errors
    /// * [`NotInitialized`](`crate::exception::PathException::NotInitialized`) if
    /// [`init`](`Self::init`) or [`set_two_points`](`Self::set_two_points`) was not called.
    pub fn get_pose(&self, tick: f64) -> PathResult<Pose> {
        let (coefficient, start, end) = self.configured()?;
        let s = coefficient.position(tick);
        Ok(Pose::new(start + (end - start) * s, self.orientation))
    }

    /// Desired translational velocity of the end effector in \[m/s\].
    pub fn get_velocity(&self, tick: f64) -> PathResult<CartesianPoint> {
        let (coefficient, start, end) = self.configured()?;
        Ok((end - start) * coefficient.velocity(tick))
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
    use crate::path::line::Line;
    use crate::utils::test_utils::{float_compare, slice_compare};
    use nalgebra::{UnitQuaternion, Vector3};

    const EPS: f64 = 1e-9;

    fn configured_line(start: Vector3<f64>, end: Vector3<f64>, move_time: f64) -> Line {
        let mut line = Line::new(4);
        line.set_two_points(start, end);
        line.init(move_time, 0.01).unwrap();
        line
    }

    #[test]
    fn reaches_both_endpoints() {
        let points = [
            (Vector3::new(0.1, 0.0, 0.2), Vector3::new(0.2, -0.1, 0.1)),
            (Vector3::new(-1.0, 2.0, 3.0), Vector3::new(4.0, -5.0, 6.0)),
            (Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 0.5)),
        ];
        for (start, end) in points.iter() {
            for &move_time in [0.5, 2.0, 7.5].iter() {
                let line = configured_line(*start, *end, move_time);
                let first = line.get_pose(0.).unwrap();
                let last = line.get_pose(move_time).unwrap();
                slice_compare(first.position.as_slice(), start.as_slice(), EPS);
                slice_compare(last.position.as_slice(), end.as_slice(), EPS);
                assert!(line.get_velocity(0.).unwrap().norm() < EPS);
                assert!(line.get_velocity(move_time).unwrap().norm() < EPS);
            }
        }
    }

    #[test]
    fn stays_on_segment() {
        let start = Vector3::new(0.3, 0.0, 0.4);
        let end = Vector3::new(0.3, 0.2, 0.1);
        let line = configured_line(start, end, 3.0);
        let direction = (end - start).normalize();
        let mut tick = 0.;
        let mut last_progress = 0.;
        while tick <= 3.0 {
            let offset = line.get_pose(tick).unwrap().position - start;
            assert!(offset.cross(&direction).norm() < EPS);
            let progress = offset.dot(&direction);
            assert!(progress >= last_progress - EPS);
            assert!(progress <= (end - start).norm() + EPS);
            last_progress = progress;
            tick += 0.01;
        }
        let midpoint = line.get_pose(1.5).unwrap().position;
        slice_compare(midpoint.as_slice(), ((start + end) * 0.5).as_slice(), EPS);
    }

    #[test]
    fn velocity_matches_finite_difference() {
        let line = configured_line(Vector3::new(0., 0., 0.), Vector3::new(1., 2., -1.), 2.0);
        let h = 1e-6;
        for i in 1..20 {
            let t = i as f64 * 0.1;
            let numeric = (line.get_pose(t + h).unwrap().position
                - line.get_pose(t - h).unwrap().position)
                / (2. * h);
            slice_compare(
                numeric.as_slice(),
                line.get_velocity(t).unwrap().as_slice(),
                1e-6,
            );
        }
    }

    #[test]
    fn orientation_is_passed_through() {
        let mut line = configured_line(Vector3::zeros(), Vector3::new(1., 0., 0.), 1.0);
        assert_eq!(
            line.get_pose(0.5).unwrap().orientation,
            UnitQuaternion::identity()
        );
        let orientation = UnitQuaternion::from_euler_angles(0.1, -0.2, 0.3);
        line.set_orientation(orientation);
        assert_eq!(line.get_pose(0.5).unwrap().orientation, orientation);
    }

    #[test]
    fn not_initialized() {
        let mut line = Line::new(4);
        assert!(matches!(
            line.get_pose(0.),
            Err(PathException::NotInitialized { .. })
        ));
        line.set_two_points(Vector3::zeros(), Vector3::new(1., 1., 1.));
        assert!(matches!(
            line.get_pose(0.),
            Err(PathException::NotInitialized { .. })
        ));

        let mut line = Line::new(4);
        line.init(1.0, 0.01).unwrap();
        assert!(matches!(
            line.get_velocity(0.),
            Err(PathException::NotInitialized { .. })
        ));
    }

    #[test]
    fn reinit_overwrites_profile() {
        let mut line = configured_line(Vector3::zeros(), Vector3::new(1., 0., 0.), 1.0);
        assert!(line.init(-1.0, 0.01).is_err());
        float_compare(line.get_pose(1.0).unwrap().position.x, 1., EPS);
        line.init(4.0, 0.01).unwrap();
        float_compare(line.get_pose(2.0).unwrap().position.x, 0.5, EPS);
        float_compare(line.get_pose(4.0).unwrap().position.x, 1., EPS);
        float_compare(line.move_time(), 4.0, EPS);
    }
}
