//! Shared numerical primitives anchored on `num-complex`.
//!
//! Every value crossing the degree/radian boundary goes through
//! [`deg_to_rad`] or [`rad_to_deg`]; nothing else in the crate multiplies
//! by π/180 directly.

use num_complex::Complex;

use crate::constants::{DEGREES_PER_RADIAN, PEAK_TO_RMS_RATIO, RADIANS_PER_DEGREE};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for rectangular phasor forms.
pub type CScalar = Complex<Scalar>;

/// Converts an angle in degrees to radians.
#[inline]
#[must_use]
pub fn deg_to_rad(degrees: Scalar) -> Scalar {
    degrees * RADIANS_PER_DEGREE
}

/// Converts an angle in radians to degrees.
#[inline]
#[must_use]
pub fn rad_to_deg(radians: Scalar) -> Scalar {
    radians * DEGREES_PER_RADIAN
}

/// Wraps an angle in degrees into `(-180, 180]`.
#[must_use]
pub fn wrap_degrees(degrees: Scalar) -> Scalar {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Computes the RMS magnitude of a sinusoidal waveform with peak value `peak`.
#[inline]
#[must_use]
pub fn peak_to_rms(peak: Scalar) -> Scalar {
    peak / PEAK_TO_RMS_RATIO
}

/// Converts rectangular components to `(magnitude, angle_rad)`.
///
/// The magnitude is the Euclidean norm and the angle is `atan2(imag, real)`.
/// The zero vector maps to angle `0` regardless of the sign of its zeros.
#[must_use]
pub fn rect_to_polar(real: Scalar, imag: Scalar) -> (Scalar, Scalar) {
    let (magnitude, angle) = CScalar::new(real, imag).to_polar();
    if magnitude == 0.0 {
        return (0.0, 0.0);
    }
    (magnitude, angle)
}

/// Converts `(magnitude, angle_rad)` to a rectangular complex value.
#[must_use]
pub fn polar_to_rect(magnitude: Scalar, angle_rad: Scalar) -> CScalar {
    CScalar::from_polar(magnitude, angle_rad)
}
