#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Angle and waveform constants.
pub mod constants;
/// Scalar aliases and degree/radian conversions.
pub mod math;
/// Phasors, impedances, loads and three-phase metrics.
pub mod power;
/// Error types shared across the crate.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
