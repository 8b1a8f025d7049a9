//! Phasor arithmetic and three-phase power-system quantities.

/// Resistance/reactance pairs and power demands.
pub mod impedance;
/// Amplitude/phase value type.
pub mod phasor;
/// Symmetrical component decomposition.
pub mod sequence;
/// Three-phase phasor sets.
pub mod three_phase;
/// Unbalance metrics over three phasors.
pub mod unbalance;

pub use impedance::{Impedance, Load};
pub use phasor::Phasor;
pub use sequence::{symmetrical_components, SequenceComponents};
pub use three_phase::ThreePhase;
pub use unbalance::{negative_sequence_unbalance, phase_unbalance, unbalance, UnbalanceMethod};
