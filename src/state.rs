//! Solved and rotated wave state consumed by the sampler.

use crate::fields::{ElectricField, MagneticField, PlaneWaveSolution};
use crate::math::{Scalar, R3};
use crate::rotation::FrameRotation;
use crate::units::Impedance;

/// Field pair expressed in the propagation-aligned frame.
///
/// A state is immutable once built. New inputs produce a new state rather than
/// mutating an existing one.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct WaveState {
    solution: PlaneWaveSolution,
    rotation: FrameRotation,
    electric: ElectricField,
    magnetic: MagneticField,
}

impl WaveState {
    /// Rotates a solved plane wave into the reference frame.
    #[must_use]
    pub fn from_solution(solution: PlaneWaveSolution) -> Self {
        let rotation = FrameRotation::to_reference(&solution.direction);
        let (electric, magnetic) = rotation.apply_pair(&solution.electric, &solution.magnetic);
        Self {
            solution,
            rotation,
            electric,
            magnetic,
        }
    }

    /// Rotated electric phasor `E' = A·E`.
    #[must_use]
    pub const fn electric(&self) -> &ElectricField {
        &self.electric
    }

    /// Rotated magnetic phasor `H' = A·H`.
    #[must_use]
    pub const fn magnetic(&self) -> &MagneticField {
        &self.magnetic
    }

    /// Propagation direction as supplied by the caller.
    #[must_use]
    pub const fn direction(&self) -> &R3 {
        &self.solution.direction
    }

    /// Unrotated solution.
    #[must_use]
    pub const fn solution(&self) -> &PlaneWaveSolution {
        &self.solution
    }

    /// Rotation used to reach the reference frame.
    #[must_use]
    pub const fn rotation(&self) -> &FrameRotation {
        &self.rotation
    }

    /// Wave impedance η.
    #[must_use]
    pub const fn impedance(&self) -> Impedance<Scalar> {
        self.solution.impedance
    }
}
