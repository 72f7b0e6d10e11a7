//! Electromagnetic field phasors and the plane-wave field solver.

mod electric;
mod magnetic;
mod solver;

pub use electric::ElectricField;
pub use magnetic::MagneticField;
pub use solver::{solve_plane_wave, PlaneWaveSolution, SolveError};

use crate::math::{complex_norm, phasor, real_part, Scalar, C3, R3};

/// Time-harmonic vector field represented by a complex amplitude.
pub trait Phasor {
    /// Complex amplitude of the field.
    fn phasor(&self) -> &C3;

    /// Instantaneous real field `Re(F · e^(jφ))` at phase `phase` (rad).
    fn instantaneous(&self, phase: Scalar) -> R3 {
        let rotor = phasor(phase);
        real_part(&self.phasor().map(|c| c * rotor))
    }

    /// Euclidean norm of the complex amplitude.
    fn magnitude(&self) -> Scalar {
        complex_norm(self.phasor())
    }
}
