//! Convenience re-exports for AC phasor calculations.

pub use crate::constants::*;
pub use crate::errors::{PowerError, Result};
pub use crate::math::{deg_to_rad, peak_to_rms, rad_to_deg, wrap_degrees, CScalar, Scalar};
pub use crate::power::{
    impedance::{Impedance, Load},
    phasor::Phasor,
    sequence::{symmetrical_components, SequenceComponents},
    three_phase::ThreePhase,
    unbalance::{negative_sequence_unbalance, phase_unbalance, unbalance, UnbalanceMethod},
};
