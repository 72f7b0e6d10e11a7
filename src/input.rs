//! Text parsing for the user-facing inputs.
//!
//! The direction and the two halves of the electric amplitude are entered as
//! comma-separated triplets such as `0,0.5,0`; the impedance is a single number.

use crate::fields::ElectricField;
use crate::materials::MaterialProperties;
use crate::math::{Scalar, R3};
use crate::units::Impedance;

/// Malformed numeric text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A vector did not have exactly three components.
    #[error("expected 3 comma-separated components, found {found}")]
    ComponentCount {
        /// Number of components present.
        found: usize,
    },
    /// A token is not a number.
    #[error("component {index} is not a number: {token:?}")]
    InvalidNumber {
        /// Zero-based position of the token.
        index: usize,
        /// Offending text.
        token: String,
    },
    /// A token parsed to NaN or infinity.
    #[error("component {index} is not finite")]
    NonFinite {
        /// Zero-based position of the token.
        index: usize,
    },
}

fn parse_component(index: usize, token: &str) -> Result<Scalar, ParseError> {
    let token = token.trim();
    let value: Scalar = token.parse().map_err(|_| ParseError::InvalidNumber {
        index,
        token: token.to_owned(),
    })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseError::NonFinite { index })
    }
}

/// Parses `"x,y,z"` into a vector. Whitespace around tokens is ignored.
///
/// # Errors
///
/// Returns [`ParseError`] for a wrong component count or a non-numeric or
/// non-finite token.
pub fn parse_triplet(text: &str) -> Result<R3, ParseError> {
    let tokens: Vec<&str> = text.split(',').collect();
    if tokens.len() != 3 {
        return Err(ParseError::ComponentCount { found: tokens.len() });
    }
    Ok(R3::new(
        parse_component(0, tokens[0])?,
        parse_component(1, tokens[1])?,
        parse_component(2, tokens[2])?,
    ))
}

/// Parses a single finite number.
///
/// # Errors
///
/// Returns [`ParseError`] when `text` is not a finite number.
pub fn parse_scalar(text: &str) -> Result<Scalar, ParseError> {
    parse_component(0, text)
}

/// Everything needed to solve one plane wave.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneWaveInput {
    /// Propagation direction `a`; need not be normalized.
    pub direction: R3,
    /// Real part `Er` of the electric amplitude.
    pub electric_real: R3,
    /// Imaginary part `Ei` of the electric amplitude.
    pub electric_imag: R3,
    /// Overall amplitude factor `E0`.
    pub amplitude: Scalar,
    /// Wave impedance η in ohms.
    pub impedance: Scalar,
}

impl PlaneWaveInput {
    /// Input with unit amplitude.
    #[must_use]
    pub fn new(direction: R3, electric_real: R3, electric_imag: R3, impedance: Scalar) -> Self {
        Self {
            direction,
            electric_real,
            electric_imag,
            amplitude: 1.0,
            impedance,
        }
    }

    /// Parses the four text fields of the input form.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] of the first malformed field.
    pub fn from_text(direction: &str, real: &str, imag: &str, impedance: &str) -> Result<Self, ParseError> {
        Ok(Self::new(
            parse_triplet(direction)?,
            parse_triplet(real)?,
            parse_triplet(imag)?,
            parse_scalar(impedance)?,
        ))
    }

    /// Replaces the amplitude factor.
    #[must_use]
    pub fn with_amplitude(mut self, amplitude: Scalar) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Uses the intrinsic impedance of `medium` as η.
    #[must_use]
    pub fn in_medium(mut self, medium: &MaterialProperties) -> Self {
        self.impedance = medium.intrinsic_impedance().value();
        self
    }

    /// Electric phasor `(Er + j·Ei)·E0`.
    #[must_use]
    pub fn electric_field(&self) -> ElectricField {
        ElectricField::from_parts(self.electric_real, self.electric_imag).scaled(self.amplitude)
    }

    /// Impedance as a typed quantity.
    #[must_use]
    pub fn impedance(&self) -> Impedance<Scalar> {
        Impedance::new(self.impedance)
    }
}

impl Default for PlaneWaveInput {
    /// Circularly polarized wave along `+z` in a medium with η = 2 Ω.
    fn default() -> Self {
        Self::new(
            R3::new(0.0, 0.0, 1.0),
            R3::new(0.5, 0.0, 0.0),
            R3::new(0.0, 0.5, 0.0),
            2.0,
        )
    }
}
