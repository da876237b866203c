// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the quintic polynomial solver behind every path of this crate.
//!
//! A minimum-jerk trajectory between two boundary states is the degree-5 polynomial
//! `p(t) = c0 + c1 t + c2 t^2 + c3 t^3 + c4 t^4 + c5 t^5` which matches position, velocity and
//! acceleration at `t = 0` and at `t = T`.

use serde::Deserialize;
use serde::Serialize;

use crate::exception::{check_durations, PathResult};
use crate::path::control_types::BoundaryState;
use crate::utils::Vector6f;

/// Coefficients `[c0, ..., c5]` of a quintic polynomial in time.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq)]
pub struct QuinticCoefficients {
    /// Coefficient `i` belongs to `t^i`.
    pub c: [f64; 6],
}

impl From<Vector6f> for QuinticCoefficients {
    fn from(vector: Vector6f) -> Self {
        QuinticCoefficients::new(vector.into())
    }
}

impl From<QuinticCoefficients> for Vector6f {
    fn from(coefficients: QuinticCoefficients) -> Self {
        Vector6f::from_row_slice(&coefficients.c)
    }
}

impl QuinticCoefficients {
    /// Creates a new QuinticCoefficients instance.
    pub fn new(c: [f64; 6]) -> Self {
        QuinticCoefficients { c }
    }
    /// Evaluates `p(t)`.
    pub fn position(&self, t: f64) -> f64 {
        let c = &self.c;
        c[0] + t * (c[1] + t * (c[2] + t * (c[3] + t * (c[4] + t * c[5]))))
    }
    /// Evaluates `p'(t)`.
    pub fn velocity(&self, t: f64) -> f64 {
        let c = &self.c;
        c[1] + t * (2. * c[2] + t * (3. * c[3] + t * (4. * c[4] + t * 5. * c[5])))
    }
    /// Evaluates `p''(t)`.
    pub fn acceleration(&self, t: f64) -> f64 {
        let c = &self.c;
        2. * c[2] + t * (6. * c[3] + t * (12. * c[4] + t * 20. * c[5]))
    }
    /// Evaluates `p'''(t)`.
    pub fn jerk(&self, t: f64) -> f64 {
        let c = &self.c;
        6. * c[3] + t * (24. * c[4] + t * 60. * c[5])
    }
}

/// Computes minimum-jerk coefficients for a single degree of freedom.
#[derive(Debug, Default, Clone)]
pub struct MinimumJerk {
    coefficient: QuinticCoefficients,
}

impl MinimumJerk {
    /// Creates a new MinimumJerk solver. Its coefficients are zero until
    /// [`calc_coefficient`](`Self::calc_coefficient`) succeeded once.
    pub fn new() -> Self {
        MinimumJerk::default()
    }

    /// Solves for the polynomial which connects `start` and `goal` in `move_time`.
    ///
    /// The first three coefficients follow directly from the start state. The remaining three
    /// are the closed-form solution of the position, velocity and acceleration equations at
    /// `t = move_time`.
    ///
    /// # Arguments
    /// * `start` - State at `t = 0`.
    /// * `goal` - State at `t = move_time`.
    /// * `move_time` - Duration of the motion in \[s\].
    /// * `control_time` - Intended control period in \[s\]. It is only validated, the
    /// polynomial itself is continuous in time.
    /// # Errors
    /// * [`InvalidDuration`](`crate::exception::PathException::InvalidDuration`) if one of the
    /// durations is not positive and finite. The previous coefficients are kept in that case.
    pub fn calc_coefficient(
        &mut self,
        start: &BoundaryState,
        goal: &BoundaryState,
        move_time: f64,
        control_time: f64,
    ) -> PathResult<()> {
        check_durations(move_time, control_time)?;
        let t = move_time;
        let t2 = t * t;
        let t3 = t2 * t;

        let delta_p = goal.position - start.position;
        let (v_0, v_f) = (start.velocity, goal.velocity);
        let (a_0, a_f) = (start.acceleration, goal.acceleration);

        let c_3 = (20. * delta_p - (8. * v_f + 12. * v_0) * t - (3. * a_0 - a_f) * t2) / (2. * t3);
        let c_4 = (-30. * delta_p + (14. * v_f + 16. * v_0) * t + (3. * a_0 - 2. * a_f) * t2)
            / (2. * t3 * t);
        let c_5 = (12. * delta_p - 6. * (v_f + v_0) * t + (a_f - a_0) * t2) / (2. * t3 * t2);

        self.coefficient =
            QuinticCoefficients::new([start.position, v_0, 0.5 * a_0, c_3, c_4, c_5]);
        Ok(())
    }

    /// Returns the coefficients of the last successful
    /// [`calc_coefficient`](`Self::calc_coefficient`) call.
    pub fn get_coefficient(&self) -> QuinticCoefficients {
        self.coefficient
    }

    /// Minimum-jerk progress profile `s(t)` going from 0 to 1 in `move_time`, at rest at both
    /// ends.
    pub(crate) fn progress_profile(
        &mut self,
        move_time: f64,
        control_time: f64,
    ) -> PathResult<QuinticCoefficients> {
        self.calc_coefficient(
            &BoundaryState::rest(0.),
            &BoundaryState::rest(1.),
            move_time,
            control_time,
        )?;
        Ok(self.coefficient)
    }
}
