//! # Coherent Noise Kernel
//!
//! Lattice noise shared by every synthesizer.
//!
//! ## Gradient noise
//!
//! Each integer lattice point gets a pseudo-random unit gradient, chosen by
//! hashing `(ix, iy, iz, seed)`. A sample's value is the trilinear blend of the
//! eight corner contributions `gradient · (p - corner)`, weighted per axis by
//! the curve selected with [`NoiseQuality`].
//!
//! Because every corner contribution is a dot product with the offset from
//! that corner, the noise is exactly zero at integer coordinates. Modules that
//! sample at integer-aligned positions (see `Turbulence`) offset their inputs
//! to avoid this.
//!
//! ## Value noise
//!
//! [`value_noise`] returns a single hashed scalar per lattice point, with no
//! interpolation. Voronoi uses it to place feature points.
//!
//! ## Determinism Guarantee
//!
//! All hashing is wrapping 32-bit integer arithmetic with fixed constants, so
//! results are identical on every platform and every call.

use std::f64::consts::FRAC_1_SQRT_2;

use crate::config::NoiseQuality;
use crate::math::{lerp, s_curve3, s_curve5};

/// Lattice hash multiplier for x.
const X_NOISE_GEN: i32 = 1619;
/// Lattice hash multiplier for y.
const Y_NOISE_GEN: i32 = 31337;
/// Lattice hash multiplier for z.
const Z_NOISE_GEN: i32 = 6971;
/// Lattice hash multiplier for the seed.
const SEED_NOISE_GEN: i32 = 1013;
/// Shift folding high hash bits into low ones.
const SHIFT_NOISE_GEN: u32 = 8;
/// Odd multiplier of the gradient hash finalizer.
const GRADIENT_MIX: u32 = 0x27d4_eb2d;

/// Scales corner contributions so the output spans roughly [-1, 1].
const GRADIENT_SCALE: f64 = 2.12;

/// Denominator mapping `int_value_noise` onto [-1, 1].
const VALUE_NOISE_HALF_RANGE: f64 = 1_073_741_824.0;

/// Cell indices repeat with this period, matching 32-bit wrapping hashes.
const LATTICE_PERIOD: f64 = 4_294_967_296.0;

const G: f64 = FRAC_1_SQRT_2;

/// Unit gradients: the 12 cube-edge directions plus 4 repeats so a 4-bit
/// index covers the table without modulo bias toward any axis.
const GRADIENTS: [[f64; 3]; 16] = [
    [G, G, 0.0],
    [-G, G, 0.0],
    [G, -G, 0.0],
    [-G, -G, 0.0],
    [G, 0.0, G],
    [-G, 0.0, G],
    [G, 0.0, -G],
    [-G, 0.0, -G],
    [0.0, G, G],
    [0.0, -G, G],
    [0.0, G, -G],
    [0.0, -G, -G],
    [G, G, 0.0],
    [-G, G, 0.0],
    [0.0, -G, G],
    [0.0, -G, -G],
];

/// Floors to the containing lattice cell.
///
/// Negative coordinates floor toward negative infinity. Out-of-range values
/// saturate instead of overflowing; NaN lands in cell 0.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn fast_floor(x: f64) -> i32 {
    let xi = x as i32;
    if x < f64::from(xi) {
        xi.saturating_sub(1)
    } else {
        xi
    }
}

/// Splits a coordinate into its lattice cell and the offset inside it.
///
/// The cell is `floor(x)` wrapped into `i32` (period 2^32), so the offset
/// stays in `[0, 1]` for every finite input, however large. Non-finite input
/// lands at offset 0 of cell 0.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn lattice_cell(x: f64) -> (i32, f64) {
    let floor = x.floor();
    let offset = x - floor;
    if !offset.is_finite() {
        return (0, 0.0);
    }
    let cell = floor.rem_euclid(LATTICE_PERIOD) as i64 as i32;
    (cell, offset)
}

/// Mixes lattice coordinates and seed into a 32-bit hash.
#[inline]
#[allow(clippy::cast_sign_loss)]
fn lattice_hash(ix: i32, iy: i32, iz: i32, seed: i32) -> u32 {
    let h = X_NOISE_GEN
        .wrapping_mul(ix)
        .wrapping_add(Y_NOISE_GEN.wrapping_mul(iy))
        .wrapping_add(Z_NOISE_GEN.wrapping_mul(iz))
        .wrapping_add(SEED_NOISE_GEN.wrapping_mul(seed)) as u32;
    let h = h ^ (h >> SHIFT_NOISE_GEN);
    let h = h.wrapping_mul(GRADIENT_MIX);
    h ^ (h >> 15)
}

/// Contribution of lattice corner `(ix, iy, iz)` to the sample `(fx, fy, fz)`.
///
/// Zero whenever the sample sits on the corner itself.
#[inline]
#[must_use]
pub fn gradient_noise(fx: f64, fy: f64, fz: f64, ix: i32, iy: i32, iz: i32, seed: i32) -> f64 {
    corner_gradient(
        fx - f64::from(ix),
        fy - f64::from(iy),
        fz - f64::from(iz),
        ix,
        iy,
        iz,
        seed,
    )
}

/// Gradient of corner `(ix, iy, iz)` dotted with the offset `(dx, dy, dz)`
/// from that corner.
#[inline]
fn corner_gradient(dx: f64, dy: f64, dz: f64, ix: i32, iy: i32, iz: i32, seed: i32) -> f64 {
    let gradient = &GRADIENTS[(lattice_hash(ix, iy, iz, seed) >> 28) as usize];
    (gradient[0] * dx + gradient[1] * dy + gradient[2] * dz) * GRADIENT_SCALE
}

/// Interpolation weight for a fractional offset at the given quality.
#[inline]
fn weight(t: f64, quality: NoiseQuality) -> f64 {
    match quality {
        NoiseQuality::Fast => t,
        NoiseQuality::Standard => s_curve3(t),
        NoiseQuality::Best => s_curve5(t),
    }
}

/// Gradient coherent noise at `(x, y, z)`, approximately in [-1, 1].
///
/// Returns exactly `0.0` at integer coordinates for every quality.
#[must_use]
pub fn gradient_coherent_noise(x: f64, y: f64, z: f64, seed: i32, quality: NoiseQuality) -> f64 {
    let (x0, tx) = lattice_cell(x);
    let (y0, ty) = lattice_cell(y);
    let (z0, tz) = lattice_cell(z);
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);
    let z1 = z0.wrapping_add(1);
    let (ux, uy, uz) = (tx - 1.0, ty - 1.0, tz - 1.0);

    let xs = weight(tx, quality);
    let ys = weight(ty, quality);
    let zs = weight(tz, quality);

    let n0 = corner_gradient(tx, ty, tz, x0, y0, z0, seed);
    let n1 = corner_gradient(ux, ty, tz, x1, y0, z0, seed);
    let ix0 = lerp(n0, n1, xs);
    let n0 = corner_gradient(tx, uy, tz, x0, y1, z0, seed);
    let n1 = corner_gradient(ux, uy, tz, x1, y1, z0, seed);
    let ix1 = lerp(n0, n1, xs);
    let iy0 = lerp(ix0, ix1, ys);

    let n0 = corner_gradient(tx, ty, uz, x0, y0, z1, seed);
    let n1 = corner_gradient(ux, ty, uz, x1, y0, z1, seed);
    let ix0 = lerp(n0, n1, xs);
    let n0 = corner_gradient(tx, uy, uz, x0, y1, z1, seed);
    let n1 = corner_gradient(ux, uy, uz, x1, y1, z1, seed);
    let ix1 = lerp(n0, n1, xs);
    let iy1 = lerp(ix0, ix1, ys);

    lerp(iy0, iy1, zs)
}

/// Hashed integer in `0..=i32::MAX` for a lattice point.
#[inline]
#[must_use]
pub fn int_value_noise(ix: i32, iy: i32, iz: i32, seed: i32) -> i32 {
    let n = X_NOISE_GEN
        .wrapping_mul(ix)
        .wrapping_add(Y_NOISE_GEN.wrapping_mul(iy))
        .wrapping_add(Z_NOISE_GEN.wrapping_mul(iz))
        .wrapping_add(SEED_NOISE_GEN.wrapping_mul(seed))
        & 0x7fff_ffff;
    let n = (n >> 13) ^ n;
    n.wrapping_mul(
        n.wrapping_mul(n)
            .wrapping_mul(60493)
            .wrapping_add(19_990_303),
    )
    .wrapping_add(1_376_312_589)
        & 0x7fff_ffff
}

/// Hashed scalar in (-1, 1] for a lattice point. No interpolation.
#[inline]
#[must_use]
pub fn value_noise(ix: i32, iy: i32, iz: i32, seed: i32) -> f64 {
    1.0 - f64::from(int_value_noise(ix, iy, iz, seed)) / VALUE_NOISE_HALF_RANGE
}

/// Value noise interpolated across the lattice cell, in [-1, 1].
///
/// Returns [`value_noise`] of the lattice point at integer coordinates.
#[must_use]
pub fn value_coherent_noise(x: f64, y: f64, z: f64, seed: i32, quality: NoiseQuality) -> f64 {
    let (x0, tx) = lattice_cell(x);
    let (y0, ty) = lattice_cell(y);
    let (z0, tz) = lattice_cell(z);
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);
    let z1 = z0.wrapping_add(1);

    let xs = weight(tx, quality);
    let ys = weight(ty, quality);
    let zs = weight(tz, quality);

    let ix0 = lerp(value_noise(x0, y0, z0, seed), value_noise(x1, y0, z0, seed), xs);
    let ix1 = lerp(value_noise(x0, y1, z0, seed), value_noise(x1, y1, z0, seed), xs);
    let iy0 = lerp(ix0, ix1, ys);
    let ix0 = lerp(value_noise(x0, y0, z1, seed), value_noise(x1, y0, z1, seed), xs);
    let ix1 = lerp(value_noise(x0, y1, z1, seed), value_noise(x1, y1, z1, seed), xs);
    let iy1 = lerp(ix0, ix1, ys);
    lerp(iy0, iy1, zs)
}
