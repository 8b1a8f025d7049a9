//! Polar-form phasor value type.
//!
//! A [`Phasor`] stores an amplitude and a phase angle. Phase crosses the API
//! boundary in degrees and is kept in radians internally; the stored angle is
//! never wrapped, so repeated multiplications may accumulate turns. Use
//! [`Phasor::phase_normalized`] when a canonical angle is needed.
//!
//! Pure combinators ([`Phasor::plus`], [`Phasor::times`], ...) consume `self`
//! by value and return a new phasor. In-place mutators ([`Phasor::set`],
//! [`Phasor::add_real`], ...) take `&mut self` and return nothing.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

use tracing::debug;

use crate::constants::PEAK_TO_RMS_RATIO;
use crate::errors::{PowerError, Result};
use crate::math::{
    deg_to_rad, peak_to_rms, polar_to_rect, rad_to_deg, rect_to_polar, wrap_degrees, CScalar,
    Scalar,
};

use super::impedance::Impedance;

/// Sinusoidal quantity at a fixed frequency, held as amplitude and phase.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "PolarRecord", into = "PolarRecord")
)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Phasor {
    amplitude: Scalar,
    /// Radians, unwrapped.
    phase: Scalar,
}

impl Phasor {
    /// Creates a phasor from an amplitude and a phase in degrees.
    #[must_use]
    pub fn new(amplitude: Scalar, phase_deg: Scalar) -> Self {
        Self {
            amplitude,
            phase: deg_to_rad(phase_deg),
        }
    }

    /// Zero phasor (amplitude 0, phase 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            amplitude: 0.0,
            phase: 0.0,
        }
    }

    /// Like [`Phasor::new`], rejecting NaN and infinite inputs.
    pub fn try_new(amplitude: Scalar, phase_deg: Scalar) -> Result<Self> {
        if !amplitude.is_finite() {
            return Err(PowerError::NonFinite { what: "amplitude" });
        }
        if !phase_deg.is_finite() {
            return Err(PowerError::NonFinite { what: "phase" });
        }
        Ok(Self::new(amplitude, phase_deg))
    }

    /// Creates a phasor from rectangular components.
    #[must_use]
    pub fn from_rect(real: Scalar, imag: Scalar) -> Self {
        let (amplitude, phase) = rect_to_polar(real, imag);
        Self { amplitude, phase }
    }

    /// Like [`Phasor::from_rect`], rejecting NaN and infinite inputs.
    pub fn try_from_rect(real: Scalar, imag: Scalar) -> Result<Self> {
        if !real.is_finite() {
            return Err(PowerError::NonFinite { what: "real part" });
        }
        if !imag.is_finite() {
            return Err(PowerError::NonFinite {
                what: "imaginary part",
            });
        }
        Ok(Self::from_rect(real, imag))
    }

    /// Creates a phasor whose peak amplitude corresponds to the RMS value `rms`.
    #[must_use]
    pub fn from_rms(rms: Scalar, phase_deg: Scalar) -> Self {
        Self::new(rms * PEAK_TO_RMS_RATIO, phase_deg)
    }

    /// Creates a phasor from a complex number in rectangular form.
    #[must_use]
    pub fn from_complex(value: CScalar) -> Self {
        Self::from_rect(value.re, value.im)
    }

    /// Builds a phasor directly from an angle already in radians.
    pub(crate) fn from_polar_rad(amplitude: Scalar, phase: Scalar) -> Self {
        Self { amplitude, phase }
    }

    /// Amplitude as stored (may be negative after scaling by a negative constant).
    #[must_use]
    pub fn amplitude(&self) -> Scalar {
        self.amplitude
    }

    /// Absolute vector length.
    #[must_use]
    pub fn magnitude(&self) -> Scalar {
        self.amplitude.abs()
    }

    /// Phase in degrees, unwrapped.
    #[must_use]
    pub fn phase(&self) -> Scalar {
        rad_to_deg(self.phase)
    }

    /// Phase in degrees wrapped into `(-180, 180]`.
    #[must_use]
    pub fn phase_normalized(&self) -> Scalar {
        wrap_degrees(self.phase())
    }

    /// Real component `A·cos(φ)`.
    #[must_use]
    pub fn real(&self) -> Scalar {
        self.amplitude * self.phase.cos()
    }

    /// Imaginary component `A·sin(φ)`.
    #[must_use]
    pub fn imag(&self) -> Scalar {
        self.amplitude * self.phase.sin()
    }

    /// Rectangular form as a complex number.
    #[must_use]
    pub fn to_complex(&self) -> CScalar {
        polar_to_rect(self.amplitude, self.phase)
    }

    /// Root-mean-square value of the peak amplitude.
    #[must_use]
    pub fn to_rms(&self) -> Scalar {
        peak_to_rms(self.amplitude)
    }

    /// Overwrites amplitude and phase (degrees).
    pub fn set(&mut self, amplitude: Scalar, phase_deg: Scalar) {
        *self = Self::new(amplitude, phase_deg);
    }

    /// Overwrites the phasor from rectangular components.
    pub fn set_rc(&mut self, real: Scalar, imag: Scalar) {
        *self = Self::from_rect(real, imag);
    }

    /// Rectangular sum.
    #[must_use]
    pub fn plus(self, other: Self) -> Self {
        Self::from_rect(self.real() + other.real(), self.imag() + other.imag())
    }

    /// Rectangular difference.
    #[must_use]
    pub fn minus(self, other: Self) -> Self {
        Self::from_rect(self.real() - other.real(), self.imag() - other.imag())
    }

    /// Polar product: amplitudes multiply, phases add.
    #[must_use]
    pub fn times(self, other: Self) -> Self {
        Self::from_polar_rad(self.amplitude * other.amplitude, self.phase + other.phase)
    }

    /// Ohm's-law product `V = I·Z`.
    #[must_use]
    pub fn times_impedance(self, z: Impedance) -> Self {
        self.times(z.to_phasor())
    }

    /// Polar quotient: amplitudes divide, phases subtract.
    ///
    /// # Errors
    ///
    /// Returns [`PowerError::DivisionByZero`] when `other` has zero amplitude.
    pub fn divided_by(self, other: Self) -> Result<Self> {
        if other.amplitude == 0.0 {
            debug!(dividend = %self, "rejecting division by zero-amplitude phasor");
            return Err(PowerError::DivisionByZero {
                operand: "divisor phasor",
            });
        }
        Ok(Self::from_polar_rad(
            self.amplitude / other.amplitude,
            self.phase - other.phase,
        ))
    }

    /// Equivalent to `self.times(self)`.
    #[must_use]
    pub fn squared(self) -> Self {
        self.times(self)
    }

    /// Scales the amplitude by `n`, leaving the phase untouched.
    #[must_use]
    pub fn times_const(self, n: Scalar) -> Self {
        Self::from_polar_rad(self.amplitude * n, self.phase)
    }

    /// Divides the amplitude by `n`, leaving the phase untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PowerError::DivisionByZero`] when `n == 0`.
    pub fn divide_by_const(self, n: Scalar) -> Result<Self> {
        if n == 0.0 {
            debug!(dividend = %self, "rejecting division by zero scalar");
            return Err(PowerError::DivisionByZero {
                operand: "scalar divisor",
            });
        }
        Ok(Self::from_polar_rad(self.amplitude / n, self.phase))
    }

    /// `1 / self`.
    ///
    /// # Errors
    ///
    /// Returns [`PowerError::DivisionByZero`] for a zero-amplitude phasor.
    pub fn reciprocal(self) -> Result<Self> {
        if self.amplitude == 0.0 {
            debug!("rejecting reciprocal of zero-amplitude phasor");
            return Err(PowerError::DivisionByZero { operand: "phasor" });
        }
        Ok(Self::from_polar_rad(self.amplitude.recip(), -self.phase))
    }

    /// Complex conjugate (phase negated).
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self::from_polar_rad(self.amplitude, -self.phase)
    }

    /// Returns a copy rotated by `degrees`.
    #[must_use]
    pub fn rotated(self, degrees: Scalar) -> Self {
        Self::from_polar_rad(self.amplitude, self.phase + deg_to_rad(degrees))
    }

    /// Adds `r` to the real component in place.
    pub fn add_real(&mut self, r: Scalar) {
        self.set_rc(self.real() + r, self.imag());
    }

    /// Adds `c` to the imaginary component in place.
    pub fn add_imaginary(&mut self, c: Scalar) {
        self.set_rc(self.real(), self.imag() + c);
    }

    /// Adds `a` to the stored amplitude in place.
    pub fn add_amp(&mut self, a: Scalar) {
        self.amplitude += a;
    }

    /// Adds `p` degrees to the phase in place.
    pub fn add_phase(&mut self, p: Scalar) {
        self.phase += deg_to_rad(p);
    }

    /// True when both phasors lie within `epsilon` of each other in the complex plane.
    ///
    /// Comparison is done in rectangular form, so phases differing by whole
    /// turns compare equal.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: Scalar) -> bool {
        (self.to_complex() - other.to_complex()).norm() <= epsilon
    }
}

impl fmt::Display for Phasor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "(A {:.*}, P {:.*}°)", p, self.amplitude, p, self.phase()),
            None => write!(f, "(A {}, P {}°)", self.amplitude, self.phase()),
        }
    }
}

impl From<CScalar> for Phasor {
    fn from(value: CScalar) -> Self {
        Self::from_complex(value)
    }
}

impl From<Phasor> for CScalar {
    fn from(value: Phasor) -> Self {
        value.to_complex()
    }
}

impl Add for Phasor {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.plus(rhs)
    }
}

impl Sub for Phasor {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.minus(rhs)
    }
}

impl Neg for Phasor {
    type Output = Self;

    fn neg(self) -> Self {
        self.rotated(180.0)
    }
}

impl Mul for Phasor {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.times(rhs)
    }
}

impl Mul<Impedance> for Phasor {
    type Output = Self;

    fn mul(self, rhs: Impedance) -> Self {
        self.times_impedance(rhs)
    }
}

impl Mul<Scalar> for Phasor {
    type Output = Self;

    fn mul(self, rhs: Scalar) -> Self {
        self.times_const(rhs)
    }
}

impl Sum for Phasor {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Self::plus)
    }
}

/// Serialized shape of a phasor; phase is exposed in degrees.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PolarRecord {
    amplitude: Scalar,
    phase_deg: Scalar,
}

#[cfg(feature = "serde")]
impl From<PolarRecord> for Phasor {
    fn from(record: PolarRecord) -> Self {
        Self::new(record.amplitude, record.phase_deg)
    }
}

#[cfg(feature = "serde")]
impl From<Phasor> for PolarRecord {
    fn from(phasor: Phasor) -> Self {
        Self {
            amplitude: phasor.amplitude,
            phase_deg: phasor.phase(),
        }
    }
}
