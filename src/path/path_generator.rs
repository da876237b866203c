// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the closed set of Cartesian path kinds.

use serde::Deserialize;
use serde::Serialize;

use crate::path::circle::Circle;
use crate::path::control_types::Pose;
use crate::path::line::Line;
use crate::path::timing::MotionTiming;
use crate::utils::CartesianPoint;
use crate::PathResult;

/// Geometry of a Cartesian path, e.g. loaded from a configuration file.
///
/// ```
/// use om_path::{MotionTiming, PathDescription, PathGenerator};
/// let description: PathDescription = serde_json::from_str(
///     r#"{"kind": "circle", "initial_position": [0.3, 0.0, 0.5], "radius": 0.05}"#,
/// ).unwrap();
/// let path = PathGenerator::from_description(
///     4,
///     &description,
///     &MotionTiming::new(4.0, 0.001).unwrap(),
/// ).unwrap();
/// assert!((path.get_pose(4.0).unwrap().position.x - 0.3).abs() < 1e-9);
/// ```
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathDescription {
    /// Straight line from `start` to `end` in \[m\].
    Line {
        /// Position at the beginning of the motion.
        start: [f64; 3],
        /// Position at the end of the motion.
        end: [f64; 3],
    },
    /// One revolution of a circle through `initial_position` in \[m\].
    Circle {
        /// Start and end point of the revolution. The center lies `radius` in +X from it.
        initial_position: [f64; 3],
        /// Radius in \[m\], must be positive.
        radius: f64,
    },
}

/// A configured Cartesian path.
#[derive(Debug, Clone)]
pub enum PathGenerator {
    /// See [`Line`].
    Line(Line),
    /// See [`Circle`].
    Circle(Circle),
}

impl PathGenerator {
    /// Builds and initializes the path described by `description`.
    ///
    /// # Errors
    /// * [`InvalidDuration`](`crate::exception::PathException::InvalidDuration`) for invalid
    /// timing.
    /// * [`InvalidGeometry`](`crate::exception::PathException::InvalidGeometry`) for a circle
    /// with a non-positive radius.
    pub fn from_description(
        joint_num: usize,
        description: &PathDescription,
        timing: &MotionTiming,
    ) -> PathResult<Self> {
        match *description {
            PathDescription::Line { start, end } => {
                let mut line = Line::new(joint_num);
                line.set_two_points(start.into(), end.into());
                line.init(timing.move_time, timing.control_time)?;
                Ok(PathGenerator::Line(line))
            }
            PathDescription::Circle {
                initial_position,
                radius,
            } => {
                let mut circle = Circle::new(joint_num);
                circle.init(
                    initial_position.into(),
                    radius,
                    timing.move_time,
                    timing.control_time,
                )?;
                Ok(PathGenerator::Circle(circle))
            }
        }
    }

    /// Desired end effector pose `tick` seconds after the start of the motion.
    pub fn get_pose(&self, tick: f64) -> PathResult<Pose> {
        match self {
            PathGenerator::Line(line) => line.get_pose(tick),
            PathGenerator::Circle(circle) => circle.get_pose(tick),
        }
    }

    /// Desired translational velocity of the end effector in \[m/s\].
    pub fn get_velocity(&self, tick: f64) -> PathResult<CartesianPoint> {
        match self {
            PathGenerator::Line(line) => line.get_velocity(tick),
            PathGenerator::Circle(circle) => circle.get_velocity(tick),
        }
    }

    /// Move time in \[s\] of the path.
    pub fn move_time(&self) -> f64 {
        match self {
            PathGenerator::Line(line) => line.move_time(),
            PathGenerator::Circle(circle) => circle.move_time(),
        }
    }
}

impl From<Line> for PathGenerator {
    fn from(line: Line) -> Self {
        PathGenerator::Line(line)
    }
}

impl From<Circle> for PathGenerator {
    fn from(circle: Circle) -> Self {
        PathGenerator::Circle(circle)
    }
}
