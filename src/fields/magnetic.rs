use crate::math::{apply_real_matrix, cross_real_complex, C3, R3, R3x3, Scalar};
use crate::units::Impedance;

use super::{ElectricField, Phasor};

/// Complex magnetic-field amplitude `H` in A/m.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MagneticField {
    phasor: C3,
}

impl MagneticField {
    /// Plane-wave relation `H = (a × E) / η`.
    ///
    /// `direction` is used as given; callers wanting `|a|`-independent fields
    /// should pass a unit vector.
    #[must_use]
    pub fn from_electric(direction: &R3, electric: &ElectricField, impedance: Impedance<Scalar>) -> Self {
        let eta = impedance.value();
        let phasor = cross_real_complex(direction, electric.phasor()).map(|c| c / eta);
        Self { phasor }
    }

    /// Wraps an existing complex amplitude.
    #[must_use]
    pub const fn from_phasor(phasor: C3) -> Self {
        Self { phasor }
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

impl Phasor for MagneticField {
    fn phasor(&self) -> &C3 {
        &self.phasor
    }
}
