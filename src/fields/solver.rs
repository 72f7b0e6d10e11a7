//! Plane-wave field solver.
//!
//! Validates that the electric phasor is transverse to the propagation
//! direction and derives the magnetic phasor from it.

use log::{debug, warn};

use crate::math::{complex_norm, dot_complex_real, CScalar, Scalar, R3};
use crate::units::Impedance;

use super::{ElectricField, MagneticField, Phasor};

/// Errors raised while solving a plane wave.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolveError {
    /// `E · a` is not zero within tolerance.
    #[error("the electric field and the propagation direction must be orthogonal (E·a = {dot})")]
    NotOrthogonal {
        /// Offending complex dot product.
        dot: CScalar,
    },
    /// The propagation direction is the zero vector.
    #[error("the propagation direction must be non-zero")]
    ZeroDirection,
    /// The wave impedance is zero, negative or not finite.
    #[error("the wave impedance must be positive, got {0}")]
    InvalidImpedance(Scalar),
    /// An input component is NaN or infinite.
    #[error("{0} contains a non-finite component")]
    NonFinite(&'static str),
}

/// Unrotated field pair of a single plane wave.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneWaveSolution {
    /// Propagation direction `a` as supplied.
    pub direction: R3,
    /// Electric phasor `E`.
    pub electric: ElectricField,
    /// Magnetic phasor `H = a × E / η`.
    pub magnetic: MagneticField,
    /// Wave impedance η.
    pub impedance: Impedance<Scalar>,
}

/// Solves for `H` given the propagation direction and the electric phasor.
///
/// The orthogonality check rejects the input when
/// `|E · a| > tolerance · ‖a‖ · ‖E‖`, so a non-zero imaginary part of the dot
/// product fails just like a non-zero real part. A tolerance of `0.0` demands
/// an exact zero. Both vectors are divided by their largest component first,
/// so the test holds for any finite magnitude.
///
/// # Errors
///
/// Returns [`SolveError`] when any input is non-finite, `a` is zero, `η ≤ 0`,
/// `E` is not transverse to `a`, or `H` overflows. Nothing is computed past the first failure.
pub fn solve_plane_wave(
    direction: &R3,
    electric: &ElectricField,
    impedance: Impedance<Scalar>,
    tolerance: Scalar,
) -> Result<PlaneWaveSolution, SolveError> {
    if !direction.iter().all(|c| c.is_finite()) {
        return Err(SolveError::NonFinite("propagation direction"));
    }
    if !electric.is_finite() {
        return Err(SolveError::NonFinite("electric field"));
    }
    let direction_scale = direction.amax();
    if direction_scale == 0.0 {
        return Err(SolveError::ZeroDirection);
    }
    if !impedance.is_physical() {
        return Err(SolveError::InvalidImpedance(impedance.value()));
    }

    let field_scale = electric
        .phasor()
        .iter()
        .fold(0.0, |m: Scalar, c| m.max(c.re.abs()).max(c.im.abs()));
    if field_scale > 0.0 {
        let unit_direction = direction / direction_scale;
        let unit_field = electric.phasor().map(|c| c.unscale(field_scale));
        let dot = dot_complex_real(&unit_field, &unit_direction);
        let bound = tolerance * unit_direction.norm() * complex_norm(&unit_field);
        if !dot.is_finite() || dot.norm() > bound {
            let dot = dot.scale(direction_scale).scale(field_scale);
            warn!("rejecting non-transverse field: E·a = {dot}, relative bound = {tolerance:.3e}");
            return Err(SolveError::NotOrthogonal { dot });
        }
    }

    let magnetic = MagneticField::from_electric(direction, electric, impedance);
    if !magnetic.is_finite() {
        return Err(SolveError::NonFinite("magnetic field"));
    }
    debug!(
        "solved plane wave: |E| = {:.6}, |H| = {:.6}, η = {impedance}",
        electric.magnitude(),
        magnetic.magnitude()
    );

    Ok(PlaneWaveSolution {
        direction: *direction,
        electric: electric.clone(),
        magnetic,
        impedance,
    })
}
