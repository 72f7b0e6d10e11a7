//! Linear, lossless material parameters.

use crate::constants::{VACUUM_PERMEABILITY, VACUUM_PERMITTIVITY};
use crate::math::Scalar;
use crate::units::Impedance;

/// Linear isotropic lossless medium expressed in SI units.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProperties {
    /// Electric permittivity ε in F/m.
    pub permittivity: Scalar,
    /// Magnetic permeability μ in H/m.
    pub permeability: Scalar,
}

impl MaterialProperties {
    /// Creates material properties for free space.
    #[must_use]
    pub const fn vacuum() -> Self {
        Self {
            permittivity: VACUUM_PERMITTIVITY,
            permeability: VACUUM_PERMEABILITY,
        }
    }

    /// Medium with relative permittivity `eps_r` and relative permeability `mu_r`.
    #[must_use]
    pub fn relative(eps_r: Scalar, mu_r: Scalar) -> Self {
        Self {
            permittivity: eps_r * VACUUM_PERMITTIVITY,
            permeability: mu_r * VACUUM_PERMEABILITY,
        }
    }

    /// Computes the intrinsic impedance √(μ / ε).
    #[must_use]
    pub fn intrinsic_impedance(&self) -> Impedance<Scalar> {
        let value = (self.permeability / self.permittivity).sqrt();
        Impedance::new(value)
    }
}

impl Default for MaterialProperties {
    fn default() -> Self {
        Self::vacuum()
    }
}
