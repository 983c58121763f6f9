//! Process-wide numeric constants shared by the synthesizers.

/// Maximum number of octaves any fractal synthesizer accepts.
pub const MAX_OCTAVES: usize = 30;

/// Mathematical constant pi.
pub const PI: f64 = std::f64::consts::PI;

/// Square root of 2.
pub const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Square root of 3. Scales Voronoi distances into roughly [-1, 1].
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Degrees to radians.
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Default frequency of every synthesizer.
pub const DEFAULT_FREQUENCY: f64 = 1.0;

/// Default per-octave frequency multiplier.
pub const DEFAULT_LACUNARITY: f64 = 2.0;

/// Default per-octave amplitude multiplier.
pub const DEFAULT_PERSISTENCE: f64 = 0.5;

/// Default octave count of the fractal synthesizers.
pub const DEFAULT_OCTAVE_COUNT: usize = 6;

/// Default seed.
pub const DEFAULT_SEED: i32 = 0;
