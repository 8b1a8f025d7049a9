//! Three-phase unbalance metrics.
//!
//! Both metrics are total: degenerate inputs yield a defined value instead
//! of a NaN.

use tracing::debug;

use crate::math::Scalar;

use super::phasor::Phasor;
use super::sequence::symmetrical_components;

/// Sequence magnitudes below this fraction of the largest input magnitude count as zero.
const SEQUENCE_ZERO_TOLERANCE: Scalar = 1.0e-12;

/// Definition used to quantify unbalance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnbalanceMethod {
    /// NEMA definition: maximum deviation from the average magnitude, in
    /// percent of the average.
    #[default]
    MaxDeviation,
    /// IEC voltage unbalance factor: `|V2| / |V1|`, in percent.
    NegativeSequence,
}

/// NEMA-style unbalance of three line phasors, in percent.
///
/// Computes `max(|Vi - Vavg|) / Vavg * 100` over the phasor magnitudes.
/// Returns `0.0` only when the average magnitude is exactly zero (all three
/// phasors vanish); any non-zero scale is evaluated, however small.
#[must_use]
pub fn phase_unbalance(ab: Phasor, bc: Phasor, ca: Phasor) -> Scalar {
    let magnitudes = [ab.magnitude(), bc.magnitude(), ca.magnitude()];
    let average = magnitudes.iter().sum::<Scalar>() / 3.0;
    if average == 0.0 {
        debug!(average, "zero average magnitude, reporting no unbalance");
        return 0.0;
    }

    let max_deviation = magnitudes
        .iter()
        .map(|m| (m - average).abs())
        .fold(0.0, Scalar::max);
    max_deviation / average * 100.0
}

/// Negative-sequence unbalance factor `|V2| / |V1| * 100`.
///
/// When the positive sequence vanishes the ratio is undefined: the result
/// is `0.0` if the negative sequence vanishes too, and `f64::INFINITY`
/// otherwise. Unlike [`phase_unbalance`], "vanishes" is a relative test: a
/// sequence magnitude at or below `1e-12` times the largest input magnitude
/// counts as zero, absorbing rounding left by the Fortescue transform.
#[must_use]
pub fn negative_sequence_unbalance(a: Phasor, b: Phasor, c: Phasor) -> Scalar {
    let scale = a.magnitude().max(b.magnitude()).max(c.magnitude());
    let threshold = scale * SEQUENCE_ZERO_TOLERANCE;
    let seq = symmetrical_components(a, b, c);
    let positive = seq.positive.magnitude();
    let negative = seq.negative.magnitude();
    if positive <= threshold {
        debug!(positive, negative, "zero positive sequence");
        return if negative <= threshold {
            0.0
        } else {
            Scalar::INFINITY
        };
    }
    negative / positive * 100.0
}

/// Unbalance in percent according to `method`.
#[must_use]
pub fn unbalance(method: UnbalanceMethod, ab: Phasor, bc: Phasor, ca: Phasor) -> Scalar {
    match method {
        UnbalanceMethod::MaxDeviation => phase_unbalance(ab, bc, ca),
        UnbalanceMethod::NegativeSequence => negative_sequence_unbalance(ab, bc, ca),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn identical_phasors_are_balanced() {
        let p = Phasor::new(400.0, 0.0);
        assert_eq!(phase_unbalance(p, p, p), 0.0);
    }

    #[test]
    fn max_deviation_matches_nema_example() {
        let result = phase_unbalance(
            Phasor::new(100.0, 0.0),
            Phasor::new(100.0, -120.0),
            Phasor::new(130.0, 120.0),
        );
        assert_relative_eq!(result, 20.0 / 110.0 * 100.0, epsilon = 1.0e-9);
        assert_relative_eq!(result, 18.18, epsilon = 1.0e-2);
    }

    #[test]
    fn all_zero_phasors_fall_back_to_zero() {
        let z = Phasor::zero();
        let result = phase_unbalance(z, z, z);
        assert_eq!(result, 0.0);
        assert!(!result.is_nan());
    }

    #[test]
    fn tiny_magnitudes_are_still_evaluated() {
        let small = phase_unbalance(
            Phasor::new(1.0e-17, 0.0),
            Phasor::new(1.0e-17, -120.0),
            Phasor::new(4.0e-17, 120.0),
        );
        let unit = phase_unbalance(
            Phasor::new(1.0, 0.0),
            Phasor::new(1.0, -120.0),
            Phasor::new(4.0, 120.0),
        );
        assert_relative_eq!(unit, 100.0, epsilon = 1.0e-9);
        assert_relative_eq!(small, unit, epsilon = 1.0e-9);
    }

    #[test]
    fn phase_angles_do_not_affect_max_deviation() {
        let a = phase_unbalance(
            Phasor::new(100.0, 0.0),
            Phasor::new(90.0, 0.0),
            Phasor::new(110.0, 0.0),
        );
        let b = phase_unbalance(
            Phasor::new(100.0, 17.0),
            Phasor::new(90.0, -95.0),
            Phasor::new(110.0, 200.0),
        );
        assert_relative_eq!(a, 10.0, epsilon = 1.0e-9);
        assert_relative_eq!(a, b, epsilon = 1.0e-12);
    }

    #[test]
    fn negative_sequence_of_open_phase() {
        let result = negative_sequence_unbalance(
            Phasor::new(1.0, 0.0),
            Phasor::new(1.0, -120.0),
            Phasor::zero(),
        );
        assert_relative_eq!(result, 50.0, epsilon = 1.0e-9);
    }

    #[test]
    fn negative_sequence_degenerate_cases() {
        let z = Phasor::zero();
        assert_eq!(negative_sequence_unbalance(z, z, z), 0.0);
        let reversed = negative_sequence_unbalance(
            Phasor::new(1.0, 0.0),
            Phasor::new(1.0, 120.0),
            Phasor::new(1.0, -120.0),
        );
        assert!(reversed.is_infinite());
    }

    #[test]
    fn method_dispatch() {
        let (ab, bc, ca) = (
            Phasor::new(100.0, 0.0),
            Phasor::new(100.0, -120.0),
            Phasor::new(130.0, 120.0),
        );
        assert_eq!(UnbalanceMethod::default(), UnbalanceMethod::MaxDeviation);
        assert_eq!(
            unbalance(UnbalanceMethod::MaxDeviation, ab, bc, ca),
            phase_unbalance(ab, bc, ca)
        );
        assert_eq!(
            unbalance(UnbalanceMethod::NegativeSequence, ab, bc, ca),
            negative_sequence_unbalance(ab, bc, ca)
        );
    }
}
