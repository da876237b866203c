// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! contains useful type definitions and conversion functions.
use nalgebra::{Isometry3, Matrix3, Rotation3, Translation3, UnitQuaternion, Vector3, Vector6};

/// A point in Cartesian space in \[m\].
pub type CartesianPoint = Vector3<f64>;
/// A Vector with 6 entries
pub type Vector6f = Vector6<f64>;

/// Converts a column-major homogeneous transform into an Isometry.
///
/// The rotational part is projected onto the closest rotation, so rounded or slightly
/// non-orthonormal input still gives a valid orientation.
pub fn homogeneous_to_isometry(transform: &[f64; 16]) -> Isometry3<f64> {
    let rotation = Matrix3::from_fn(|row, column| transform[4 * column + row]);
    // the projection cannot leave an identity start for half turns
    let guess = UnitQuaternion::new_normalize(
        UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(rotation))
            .into_inner(),
    );
    Isometry3::from_parts(
        Translation3::new(transform[12], transform[13], transform[14]),
        UnitQuaternion::from_matrix_eps(&rotation, f64::EPSILON, 100, guess),
    )
}

/// Converts an Isometry into a column-major homogeneous transform.
pub fn isometry_to_homogeneous(isometry: &Isometry3<f64>) -> [f64; 16] {
    let mut transform = [0.; 16];
    transform.copy_from_slice(isometry.to_homogeneous().as_slice());
    transform
}

#[cfg(test)]
pub(crate) mod test_utils {
    pub fn slice_compare(a: &[f64], b: &[f64], thresh: f64) {
        assert_eq!(a.len(), b.len());
        for i in 0..a.len() {
            float_compare(a[i], b[i], thresh);
        }
    }

    pub fn float_compare(a: f64, b: f64, thresh: f64) {
        assert!((a - b).abs() < thresh, "{} != {} (threshold {})", a, b, thresh);
    }
}
