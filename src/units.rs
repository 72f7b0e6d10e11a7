//! Strongly typed quantities.
//!
//! A [`Quantity`] pairs a scalar with a zero-sized unit marker so that, for
//! example, an impedance cannot be passed where a field amplitude is expected.

use std::fmt;
use std::marker::PhantomData;

use crate::math::Scalar;

/// Marker trait for physical units.
pub trait Unit {
    /// Display symbol appended to formatted values.
    const SYMBOL: &'static str;
}

/// Ohm (Ω).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ohm;

impl Unit for Ohm {
    const SYMBOL: &'static str = "Ω";
}

/// Scalar value tagged with a unit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<T, U> {
    value: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    unit: PhantomData<U>,
}

impl<T: Copy, U> Quantity<T, U> {
    /// Wraps `value`.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// Raw scalar.
    #[must_use]
    pub const fn value(&self) -> T {
        self.value
    }
}

impl<T: fmt::Display, U: Unit> fmt::Display for Quantity<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, U::SYMBOL)
    }
}

/// Wave impedance η of a medium.
pub type Impedance<T = Scalar> = Quantity<T, Ohm>;

impl Impedance<Scalar> {
    /// True for finite, strictly positive impedances.
    #[must_use]
    pub fn is_physical(&self) -> bool {
        self.value.is_finite() && self.value > 0.0
    }
}

impl From<Scalar> for Impedance<Scalar> {
    fn from(value: Scalar) -> Self {
        Self::new(value)
    }
}
