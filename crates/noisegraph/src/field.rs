//! # Scalar Field Contract
//!
//! The one capability every node in a noise graph implements, and the only
//! thing composite nodes know about their children. External sources of
//! scalars (texture samplers, analytic SDFs) join a graph by implementing it.

use std::sync::Arc;

/// A deterministic mapping from a 3D coordinate to a scalar.
///
/// Implementations must be pure: the same coordinates on the same
/// configuration return the same value, whatever the call order or thread.
/// The `Send + Sync` bound lets a fully built graph be sampled from several
/// threads at once; configuration changes need `&mut self` and therefore
/// cannot race with sampling.
pub trait ScalarField: Send + Sync {
    /// Returns the field value at `(x, y, z)`.
    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64;
}

impl<T: ScalarField + ?Sized> ScalarField for &T {
    #[inline]
    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        (**self).evaluate(x, y, z)
    }
}

impl<T: ScalarField + ?Sized> ScalarField for Box<T> {
    #[inline]
    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        (**self).evaluate(x, y, z)
    }
}

impl<T: ScalarField + ?Sized> ScalarField for Arc<T> {
    #[inline]
    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        (**self).evaluate(x, y, z)
    }
}
