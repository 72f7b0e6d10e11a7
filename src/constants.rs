//! Physical constants and animation defaults.
//!
//! ## Accuracy
//!
//! ε₀ and μ₀ are provided with 11-12 significant figures (CODATA 2018), which is
//! ample for visualisation. The free-space impedance is derived from them.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>

use std::f64::consts::PI;
use std::time::Duration;

use crate::math::{Scalar, R3};

/// Vacuum permittivity ε₀ in farads per meter (F/m).
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-12;
/// Vacuum permeability μ₀ in henries per meter (H/m).
pub const VACUUM_PERMEABILITY: f64 = 1.256_637_062_12e-6;
/// Characteristic impedance of free space Z₀ in ohms (Ω).
/// Derived from Z₀ = √(μ₀/ε₀) ≈ 376.730313668 Ω.
pub const FREE_SPACE_IMPEDANCE: f64 = 376.730_313_668;

/// Axis onto which every propagation direction is rotated before plotting.
pub const REFERENCE_AXIS: R3 = R3::new(0.0, 0.0, 1.0);

/// Number of phase samples drawn per period.
pub const DEFAULT_FRAMES_PER_PERIOD: u32 = 10;
/// Delay between two animation frames.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(100);
/// Half-width of the square plot window, centred on the origin.
pub const DEFAULT_PLOT_LIMIT: Scalar = 1.0;

/// Relative tolerance for `E · a = 0`.
pub const DEFAULT_ORTHOGONALITY_TOLERANCE: Scalar = 1.0e-9;
/// Relative tolerance used when classifying the polarization ellipse.
pub const DEFAULT_POLARIZATION_TOLERANCE: Scalar = 1.0e-9;

/// Phase (rad) of `frame` within a period of `frames_per_period` samples.
#[inline]
#[must_use]
pub fn frame_phase(frame: u32, frames_per_period: u32) -> Scalar {
    2.0 * PI * Scalar::from(frame) / Scalar::from(frames_per_period)
}
