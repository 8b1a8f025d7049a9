//! Three-phase phasor sets.

use crate::constants::THREE_PHASE_DISPLACEMENT_DEG;
use crate::math::Scalar;

use super::phasor::Phasor;
use super::sequence::{symmetrical_components, SequenceComponents};
use super::unbalance::{unbalance, UnbalanceMethod};

/// Phasors of the three phases (or line pairs) of a three-phase system.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThreePhase {
    /// Phase A (or line AB).
    pub a: Phasor,
    /// Phase B (or line BC).
    pub b: Phasor,
    /// Phase C (or line CA).
    pub c: Phasor,
}

impl ThreePhase {
    /// Creates a set from explicit phasors.
    #[must_use]
    pub const fn new(a: Phasor, b: Phasor, c: Phasor) -> Self {
        Self { a, b, c }
    }

    /// Balanced positive-sequence set: A at `phase_deg`, B lagging by 120°, C leading by 120°.
    #[must_use]
    pub fn balanced(amplitude: Scalar, phase_deg: Scalar) -> Self {
        let a = Phasor::new(amplitude, phase_deg);
        Self {
            a,
            b: a.rotated(-THREE_PHASE_DISPLACEMENT_DEG),
            c: a.rotated(THREE_PHASE_DISPLACEMENT_DEG),
        }
    }

    /// Magnitudes of the three phasors in A, B, C order.
    #[must_use]
    pub fn magnitudes(&self) -> [Scalar; 3] {
        [self.a.magnitude(), self.b.magnitude(), self.c.magnitude()]
    }

    /// Vector sum of the three phasors (residual / neutral quantity).
    #[must_use]
    pub fn residual(&self) -> Phasor {
        [self.a, self.b, self.c].into_iter().sum()
    }

    /// Sequence decomposition referenced to phase A.
    #[must_use]
    pub fn sequence_components(&self) -> SequenceComponents {
        symmetrical_components(self.a, self.b, self.c)
    }

    /// Unbalance in percent using `method`.
    #[must_use]
    pub fn unbalance(&self, method: UnbalanceMethod) -> Scalar {
        unbalance(method, self.a, self.b, self.c)
    }
}
