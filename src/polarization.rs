//! Polarization state of the transverse electric field.
//!
//! The rotated electric phasor traces an ellipse in the plot plane. This module
//! recovers its semi-axes, tilt and sense of rotation, and the equivalent
//! Stokes parameters. Handedness follows the IEEE convention: with the thumb
//! along the propagation axis (`+z` after rotation), a right-handed field
//! rotates in the direction of the curled fingers.

use std::f64::consts::FRAC_PI_2;

use crate::fields::Phasor;
use crate::math::{CScalar, Scalar};
use crate::state::WaveState;

/// Shape of the polarization ellipse.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolarizationKind {
    /// The field vanishes.
    Null,
    /// The ellipse collapses onto a line.
    Linear,
    /// Both semi-axes are equal.
    Circular,
    /// General case.
    Elliptical,
}

/// Sense of rotation about the propagation axis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    /// Counter-clockwise when viewed with the wave approaching the observer.
    Right,
    /// Clockwise when viewed with the wave approaching the observer.
    Left,
}

/// Stokes parameters of a fully polarized field.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StokesParameters {
    /// Total intensity `|Ex|² + |Ey|²`.
    pub s0: Scalar,
    /// `|Ex|² − |Ey|²`.
    pub s1: Scalar,
    /// `2 Re(Ex* Ey)`.
    pub s2: Scalar,
    /// `−2 Im(Ex* Ey)`, positive for right-handed fields.
    pub s3: Scalar,
}

/// Geometry and classification of the polarization ellipse.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarizationEllipse {
    /// Semi-major axis length.
    pub semi_major: Scalar,
    /// Semi-minor axis length.
    pub semi_minor: Scalar,
    /// Angle of the major axis from `+x`, in `(−π/2, π/2]`.
    pub tilt: Scalar,
    /// Classification.
    pub kind: PolarizationKind,
    /// Sense of rotation; `None` for linear and null fields.
    pub handedness: Option<Handedness>,
    /// Stokes vector.
    pub stokes: StokesParameters,
}

impl PolarizationEllipse {
    /// Analyses the transverse phasor components `ex`, `ey`.
    ///
    /// `tolerance` is relative to the semi-major axis and decides when an
    /// ellipse counts as linear or circular.
    #[must_use]
    pub fn from_transverse(ex: CScalar, ey: CScalar, tolerance: Scalar) -> Self {
        // E(φ) = p·cos φ − q·sin φ with p = Re, q = Im.
        let (px, py, qx, qy) = (ex.re, ey.re, ex.im, ey.im);
        let a = px.mul_add(px, py * py);
        let b = qx.mul_add(qx, qy * qy);
        let c = px.mul_add(qx, py * qy);
        let sense = qx.mul_add(py, -(px * qy));

        let half_sum = 0.5 * (a + b);
        let half_diff = 0.5 * (a - b);
        let spread = half_diff.hypot(c);

        let semi_major = (half_sum + spread).sqrt();
        let semi_minor = if semi_major > 0.0 {
            sense.abs() / semi_major
        } else {
            0.0
        };

        let kind = if semi_major == 0.0 {
            PolarizationKind::Null
        } else if semi_minor <= tolerance * semi_major {
            PolarizationKind::Linear
        } else if semi_major - semi_minor <= tolerance * semi_major {
            PolarizationKind::Circular
        } else {
            PolarizationKind::Elliptical
        };

        let tilt = match kind {
            PolarizationKind::Null | PolarizationKind::Circular => 0.0,
            PolarizationKind::Linear | PolarizationKind::Elliptical => {
                let phi = -0.5 * c.atan2(half_diff);
                let (s, co) = phi.sin_cos();
                fold_half_turn(py.mul_add(co, -(qy * s)).atan2(px.mul_add(co, -(qx * s))))
            }
        };

        let handedness = match kind {
            PolarizationKind::Null | PolarizationKind::Linear => None,
            _ if sense > 0.0 => Some(Handedness::Right),
            _ => Some(Handedness::Left),
        };

        let cross = ex.conj() * ey;
        let stokes = StokesParameters {
            s0: ex.norm_sqr() + ey.norm_sqr(),
            s1: ex.norm_sqr() - ey.norm_sqr(),
            s2: 2.0 * cross.re,
            s3: -2.0 * cross.im,
        };

        Self {
            semi_major,
            semi_minor,
            tilt,
            kind,
            handedness,
            stokes,
        }
    }

    /// Analyses the rotated electric field of `state`.
    #[must_use]
    pub fn of_state(state: &WaveState, tolerance: Scalar) -> Self {
        let e = state.electric().phasor();
        Self::from_transverse(e[0], e[1], tolerance)
    }

    /// `semi_major / semi_minor`, or `None` when the ellipse is degenerate.
    #[must_use]
    pub fn axial_ratio(&self) -> Option<Scalar> {
        (self.semi_minor > 0.0).then(|| self.semi_major / self.semi_minor)
    }

    /// Ellipticity angle χ with `tan χ = ±minor/major`, signed by handedness.
    #[must_use]
    pub fn ellipticity_angle(&self) -> Scalar {
        if self.stokes.s0 == 0.0 {
            return 0.0;
        }
        0.5 * (self.stokes.s3 / self.stokes.s0).clamp(-1.0, 1.0).asin()
    }
}

fn fold_half_turn(angle: Scalar) -> Scalar {
    if angle > FRAC_PI_2 {
        angle - std::f64::consts::PI
    } else if angle <= -FRAC_PI_2 {
        angle + std::f64::consts::PI
    } else {
        angle
    }
}
