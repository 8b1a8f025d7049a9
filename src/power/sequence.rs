//! Symmetrical components (Fortescue decomposition) of a three-phase set.

use crate::constants::THREE_PHASE_DISPLACEMENT_DEG;
use crate::math::{deg_to_rad, polar_to_rect, CScalar};

use super::phasor::Phasor;

/// Zero, positive and negative sequence phasors referenced to phase A.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SequenceComponents {
    /// Zero sequence `(A + B + C) / 3`.
    pub zero: Phasor,
    /// Positive sequence `(A + aB + a²C) / 3`.
    pub positive: Phasor,
    /// Negative sequence `(A + a²B + aC) / 3`.
    pub negative: Phasor,
}

/// Decomposes phases `a`, `b`, `c` into sequence components.
///
/// Uses the operator `a = 1∠120°`, so a balanced set with B lagging A by
/// 120° is purely positive sequence.
#[must_use]
pub fn symmetrical_components(a: Phasor, b: Phasor, c: Phasor) -> SequenceComponents {
    let alpha = polar_to_rect(1.0, deg_to_rad(THREE_PHASE_DISPLACEMENT_DEG));
    let alpha_sq = alpha * alpha;
    let (va, vb, vc): (CScalar, CScalar, CScalar) = (a.into(), b.into(), c.into());

    SequenceComponents {
        zero: Phasor::from_complex((va + vb + vc) / 3.0),
        positive: Phasor::from_complex((va + alpha * vb + alpha_sq * vc) / 3.0),
        negative: Phasor::from_complex((va + alpha_sq * vb + alpha * vc) / 3.0),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn balanced_set_is_pure_positive_sequence() {
        let seq = symmetrical_components(
            Phasor::new(230.0, 10.0),
            Phasor::new(230.0, -110.0),
            Phasor::new(230.0, 130.0),
        );
        assert_relative_eq!(seq.positive.amplitude(), 230.0, epsilon = 1.0e-9);
        assert_relative_eq!(seq.positive.phase(), 10.0, epsilon = 1.0e-9);
        assert_relative_eq!(seq.negative.amplitude(), 0.0, epsilon = 1.0e-9);
        assert_relative_eq!(seq.zero.amplitude(), 0.0, epsilon = 1.0e-9);
    }

    #[test]
    fn in_phase_set_is_pure_zero_sequence() {
        let p = Phasor::new(5.0, 45.0);
        let seq = symmetrical_components(p, p, p);
        assert!(seq.zero.approx_eq(&p, 1.0e-12));
        assert_relative_eq!(seq.positive.amplitude(), 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(seq.negative.amplitude(), 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn components_recompose_phase_a() {
        let a = Phasor::new(100.0, 0.0);
        let seq = symmetrical_components(a, Phasor::new(80.0, -100.0), Phasor::new(120.0, 115.0));
        let recomposed = seq.zero + seq.positive + seq.negative;
        assert!(recomposed.approx_eq(&a, 1.0e-9));
    }
}
