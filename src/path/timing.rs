// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the timing parameters of a motion segment.

use serde::Deserialize;
use serde::Serialize;

use crate::exception::check_durations;
use crate::PathResult;

/// Relative tolerance for deciding whether the move time is a multiple of the control time.
static TICK_EPS: f64 = 1e-9;

/// Duration and control period of a motion segment, both in \[s\].
///
/// The control time only describes the intended sampling period. Paths can be sampled at
/// any elapsed time.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct MotionTiming {
    /// Duration of the motion in \[s\].
    pub move_time: f64,
    /// Intended control period in \[s\].
    pub control_time: f64,
}

impl MotionTiming {
    /// Creates new timing parameters.
    /// # Errors
    /// * [`InvalidDuration`](`crate::exception::PathException::InvalidDuration`) if one of the
    /// durations is not positive and finite.
    pub fn new(move_time: f64, control_time: f64) -> PathResult<Self> {
        let timing = MotionTiming {
            move_time,
            control_time,
        };
        timing.validate()?;
        Ok(timing)
    }

    /// Checks the durations, e.g. after deserializing.
    pub fn validate(&self) -> PathResult<()> {
        check_durations(self.move_time, self.control_time)
    }

    /// Number of control periods needed to cover the move time, at least one. The last one may
    /// be shorter.
    pub fn period_count(&self) -> usize {
        (self.move_time / self.control_time - TICK_EPS).ceil().max(1.) as usize
    }

    /// Sampling times `0, dt, 2 dt, ...` up to and including the move time.
    ///
    /// The last tick is always exactly the move time.
    pub fn ticks(&self) -> impl Iterator<Item = f64> {
        let MotionTiming {
            move_time,
            control_time,
        } = *self;
        let periods = self.period_count();
        (0..=periods).map(move |k| {
            if k == periods {
                move_time
            } else {
                f64::min(k as f64 * control_time, move_time)
            }
        })
    }
}
