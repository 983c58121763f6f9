//! # Input Rotation
//!
//! Rotates the sampling coordinates before handing them to the source, which
//! hides axis-aligned lattice artifacts and lets several copies of the same
//! generator be layered without visible correlation.
//!
//! The 3×3 matrix is built once per `set_angles` call from three Euler
//! angles (radians) and applied on every sample; evaluation does no
//! trigonometry.

use std::fmt;

use crate::constants::DEG_TO_RAD;
use crate::field::ScalarField;

/// Row-major 3×3 matrix.
type Mat3 = [[f64; 3]; 3];

const IDENTITY: Mat3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Rotation matrix for Euler angles `(x, y, z)` in radians.
///
/// The axis order is fixed (y, x, z). All-zero angles produce the identity
/// exactly.
fn rotation_matrix(x_angle: f64, y_angle: f64, z_angle: f64) -> Mat3 {
    let (x_sin, x_cos) = x_angle.sin_cos();
    let (y_sin, y_cos) = y_angle.sin_cos();
    let (z_sin, z_cos) = z_angle.sin_cos();

    [
        [
            y_sin * x_sin * z_sin + y_cos * z_cos,
            x_cos * z_sin,
            y_sin * z_cos - y_cos * x_sin * z_sin,
        ],
        [
            y_sin * x_sin * z_cos - y_cos * z_sin,
            x_cos * z_cos,
            -y_cos * x_sin * z_cos - y_sin * z_sin,
        ],
        [-y_sin * x_cos, x_sin, y_cos * x_cos],
    ]
}

/// Evaluates its source at rotated coordinates.
pub struct RotateInput {
    source: Box<dyn ScalarField>,
    angles: (f64, f64, f64),
    matrix: Mat3,
}

impl RotateInput {
    /// Wraps `source`, rotating inputs by Euler angles in radians.
    pub fn new(source: impl ScalarField + 'static, x_angle: f64, y_angle: f64, z_angle: f64) -> Self {
        let mut rotate = Self {
            source: Box::new(source),
            angles: (0.0, 0.0, 0.0),
            matrix: IDENTITY,
        };
        rotate.set_angles(x_angle, y_angle, z_angle);
        rotate
    }

    /// Returns the Euler angles in radians.
    #[must_use]
    pub const fn angles(&self) -> (f64, f64, f64) {
        self.angles
    }

    /// Sets the Euler angles in radians and rebuilds the matrix.
    pub fn set_angles(&mut self, x_angle: f64, y_angle: f64, z_angle: f64) {
        self.angles = (x_angle, y_angle, z_angle);
        self.matrix = rotation_matrix(x_angle, y_angle, z_angle);
    }

    /// Sets the Euler angles in degrees.
    pub fn set_angles_degrees(&mut self, x_degrees: f64, y_degrees: f64, z_degrees: f64) {
        self.set_angles(
            x_degrees * DEG_TO_RAD,
            y_degrees * DEG_TO_RAD,
            z_degrees * DEG_TO_RAD,
        );
    }

    #[inline]
    fn rotate(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        let m = &self.matrix;
        (
            m[0][0] * x + m[0][1] * y + m[0][2] * z,
            m[1][0] * x + m[1][1] * y + m[1][2] * z,
            m[2][0] * x + m[2][1] * y + m[2][2] * z,
        )
    }
}

impl fmt::Debug for RotateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotateInput")
            .field("angles", &self.angles)
            .field("matrix", &self.matrix)
            .finish_non_exhaustive()
    }
}

impl ScalarField for RotateInput {
    #[inline]
    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        let (nx, ny, nz) = self.rotate(x, y, z);
        self.source.evaluate(nx, ny, nz)
    }
}
