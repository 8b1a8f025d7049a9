//! Angle and waveform constants.
//!
//! All factors are derived from the `f64` high-precision [`PI`] and
//! [`SQRT_2`] so that degree/radian round trips stay within a few ULPs.

use std::f64::consts::{PI, SQRT_2};

/// Multiplier converting degrees to radians (π / 180).
pub const RADIANS_PER_DEGREE: f64 = PI / 180.0;
/// Multiplier converting radians to degrees (180 / π).
pub const DEGREES_PER_RADIAN: f64 = 180.0 / PI;
/// Ratio between the peak and RMS value of a pure sinusoid (√2).
pub const PEAK_TO_RMS_RATIO: f64 = SQRT_2;
/// Mutual displacement of the phases in a balanced three-phase set, in degrees.
pub const THREE_PHASE_DISPLACEMENT_DEG: f64 = 120.0;
