//! Impedance and load descriptors.

use std::fmt;

use tracing::debug;

use crate::errors::{PowerError, Result};
use crate::math::{rad_to_deg, rect_to_polar, CScalar, Scalar};

use super::phasor::Phasor;

/// Linear circuit element expressed as resistance and reactance (Ω).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Impedance {
    /// Real part (Ω).
    pub resistance: Scalar,
    /// Imaginary part (Ω); positive for inductive elements.
    pub reactance: Scalar,
}

impl Impedance {
    /// Creates an impedance `R + jX`.
    #[must_use]
    pub const fn new(resistance: Scalar, reactance: Scalar) -> Self {
        Self {
            resistance,
            reactance,
        }
    }

    /// Rectangular form as a complex number.
    #[must_use]
    pub fn to_complex(&self) -> CScalar {
        CScalar::new(self.resistance, self.reactance)
    }

    /// Impedance magnitude |Z| (Ω).
    #[must_use]
    pub fn magnitude(&self) -> Scalar {
        self.to_complex().norm()
    }

    /// Impedance angle in degrees.
    #[must_use]
    pub fn angle(&self) -> Scalar {
        rad_to_deg(self.to_complex().arg())
    }

    /// Polar form of the impedance as a phasor.
    #[must_use]
    pub fn to_phasor(&self) -> Phasor {
        let (magnitude, angle) = rect_to_polar(self.resistance, self.reactance);
        Phasor::from_polar_rad(magnitude, angle)
    }

    /// Admittance `Y = 1 / Z` (S).
    ///
    /// # Errors
    ///
    /// Returns [`PowerError::DivisionByZero`] for a zero impedance.
    pub fn admittance(&self) -> Result<CScalar> {
        if self.magnitude() == 0.0 {
            debug!("rejecting admittance of zero impedance");
            return Err(PowerError::DivisionByZero {
                operand: "impedance",
            });
        }
        Ok(self.to_complex().inv())
    }
}

impl From<CScalar> for Impedance {
    fn from(value: CScalar) -> Self {
        Self::new(value.re, value.im)
    }
}

impl fmt::Display for Impedance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "(R {:.*}, X {:.*})", p, self.resistance, p, self.reactance),
            None => write!(f, "(R {}, X {})", self.resistance, self.reactance),
        }
    }
}

/// Constant power demand with active and reactive components.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Load {
    /// Active power demand (W).
    pub p: Scalar,
    /// Reactive power demand (var).
    pub q: Scalar,
}

impl Load {
    /// Creates a load from active and reactive demand.
    #[must_use]
    pub const fn new(p: Scalar, q: Scalar) -> Self {
        Self { p, q }
    }
}
