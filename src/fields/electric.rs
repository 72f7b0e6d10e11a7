use crate::math::{apply_real_matrix, complex_vector, imag_part, real_part, Scalar, C3, R3, R3x3};

use super::Phasor;

/// Complex electric-field amplitude `E = (Er + j·Ei)·E0` in V/m.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ElectricField {
    phasor: C3,
}

impl ElectricField {
    /// Builds the phasor from its real and imaginary parts.
    #[must_use]
    pub fn from_parts(real: R3, imaginary: R3) -> Self {
        Self {
            phasor: complex_vector(&real, &imaginary),
        }
    }

    /// Wraps an existing complex amplitude.
    #[must_use]
    pub const fn from_phasor(phasor: C3) -> Self {
        Self { phasor }
    }

    /// Scales the amplitude by the real factor `amplitude`.
    #[must_use]
    pub fn scaled(&self, amplitude: Scalar) -> Self {
        Self {
            phasor: self.phasor.map(|c| c * amplitude),
        }
    }

    /// Real part `Er`.
    #[must_use]
    pub fn real(&self) -> R3 {
        real_part(&self.phasor)
    }

    /// Imaginary part `Ei`.
    #[must_use]
    pub fn imaginary(&self) -> R3 {
        imag_part(&self.phasor)
    }

    /// Applies a real linear map to the field.
    #[must_use]
    pub fn transformed(&self, matrix: &R3x3) -> Self {
        Self {
            phasor: apply_real_matrix(matrix, &self.phasor),
        }
    }

    /// True when every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.phasor.iter().all(|c| c.is_finite())
    }
}

impl Phasor for ElectricField {
    fn phasor(&self) -> &C3 {
        &self.phasor
    }
}
