// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains exception and Result definitions
use thiserror::Error;

/// Represents all kind of errors which can occur while configuring or sampling a path.
///
/// All of them are configuration mistakes of the caller. They are detected when a path is
/// initialized, so that sampling a configured path never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathException {
    /// InvalidDuration is returned if the move time or the control time is not a positive,
    /// finite number.
    #[error("Invalid duration: move time {move_time} s and control time {control_time} s must be positive and finite")]
    InvalidDuration {
        /// Requested duration of the motion in \[s\].
        move_time: f64,
        /// Requested control period in \[s\].
        control_time: f64,
    },

    /// DimensionMismatch is returned if the number of start or goal states does not match
    /// the number of joints the trajectory was constructed with.
    #[error("Dimension mismatch: trajectory has {joint_num} joints but got {start} start and {goal} goal states")]
    DimensionMismatch {
        /// Number of joints of the trajectory.
        joint_num: usize,
        /// Number of supplied start states.
        start: usize,
        /// Number of supplied goal states.
        goal: usize,
    },

    /// InvalidGeometry is returned if a Cartesian path cannot be built from the given
    /// geometry, e.g. a circle with a non-positive radius.
    #[error("{message:?}")]
    InvalidGeometry { message: String },

    /// NotInitialized is returned when sampling a path before it was initialized.
    #[error("{message:?}")]
    NotInitialized { message: String },
}

/// creates a NotInitialized exception from a static string slice
pub(crate) fn create_not_initialized_exception(message: &'static str) -> PathException {
    PathException::NotInitialized {
        message: message.to_string(),
    }
}

/// Checks that both durations are positive and finite.
pub(crate) fn check_durations(move_time: f64, control_time: f64) -> PathResult<()> {
    let valid = |x: f64| x.is_finite() && x > 0.;
    if valid(move_time) && valid(control_time) {
        Ok(())
    } else {
        Err(PathException::InvalidDuration {
            move_time,
            control_time,
        })
    }
}

/// Result type which can have PathException as Error
pub type PathResult<T> = Result<T, PathException>;
