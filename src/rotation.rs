//! Rotation of a field pair into the propagation-aligned viewing frame.
//!
//! The rotation is built with Rodrigues' formula from the axis `a × ẑ` and the
//! angle between `a` and `ẑ`. After it is applied the propagation direction
//! lies on `+ẑ`, so the `(x, y)` components of any rotated field are exactly its
//! transverse components.

use log::trace;

use crate::constants::REFERENCE_AXIS;
use crate::fields::{ElectricField, MagneticField};
use crate::math::{Scalar, R3, R3x3};

/// Proper rotation taking a propagation direction onto [`REFERENCE_AXIS`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRotation {
    axis: R3,
    angle: Scalar,
    matrix: R3x3,
}

impl FrameRotation {
    /// Rotation that maps `direction` onto `+ẑ`.
    ///
    /// When `direction` is already along `+ẑ` the axis is left as the zero
    /// vector and the rotation is the identity. When it points along `−ẑ` the
    /// cross product vanishes as well; the half turn about `x̂` is used then.
    /// Only the direction of `direction` matters, whatever its magnitude.
    #[must_use]
    pub fn to_reference(direction: &R3) -> Self {
        let scale = direction.amax();
        let direction = if scale > 0.0 { direction / scale } else { *direction };
        let cross = direction.cross(&REFERENCE_AXIS);
        let norm = cross.norm();
        let along = direction.dot(&REFERENCE_AXIS);

        let (axis, angle) = if norm == 0.0 {
            if along < 0.0 {
                trace!("direction antiparallel to reference axis, using half turn about x");
                (R3::x(), std::f64::consts::PI)
            } else {
                (R3::zeros(), 0.0)
            }
        } else {
            (cross / norm, norm.atan2(along))
        };

        Self {
            axis,
            angle,
            matrix: rodrigues(&axis, angle),
        }
    }

    /// Unit rotation axis, or zero for the identity.
    #[must_use]
    pub const fn axis(&self) -> &R3 {
        &self.axis
    }

    /// Rotation angle in radians, within `[0, π]`.
    #[must_use]
    pub const fn angle(&self) -> Scalar {
        self.angle
    }

    /// The 3×3 rotation matrix `A`.
    #[must_use]
    pub const fn matrix(&self) -> &R3x3 {
        &self.matrix
    }

    /// Rotates a real vector.
    #[must_use]
    pub fn apply_real(&self, v: &R3) -> R3 {
        self.matrix * v
    }

    /// Rotates an `(E, H)` pair.
    #[must_use]
    pub fn apply_pair(&self, electric: &ElectricField, magnetic: &MagneticField) -> (ElectricField, MagneticField) {
        (electric.transformed(&self.matrix), magnetic.transformed(&self.matrix))
    }
}

/// Rodrigues' rotation matrix for a unit `axis` and `angle`.
///
/// A zero axis yields `cos θ · I`, which is the identity only for `θ = 0`.
#[must_use]
pub fn rodrigues(axis: &R3, angle: Scalar) -> R3x3 {
    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;
    let (ux, uy, uz) = (axis.x, axis.y, axis.z);

    R3x3::new(
        c + ux * ux * t,
        ux * uy * t - uz * s,
        ux * uz * t + uy * s,
        uy * ux * t + uz * s,
        c + uy * uy * t,
        uy * uz * t - ux * s,
        uz * ux * t - uy * s,
        uz * uy * t + ux * s,
        c + uz * uz * t,
    )
}

/// Rotates the `(E, H)` pair so that `direction` maps onto `+ẑ`.
#[must_use]
pub fn rotate(
    direction: &R3,
    electric: &ElectricField,
    magnetic: &MagneticField,
) -> (ElectricField, MagneticField) {
    FrameRotation::to_reference(direction).apply_pair(electric, magnetic)
}
