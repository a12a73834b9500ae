//! Nodal corrections for harmonic tidal prediction.
//!
//! This crate provides:
//! - Node factors `f` (amplitude scale, ~1.0) for the standard constituents
//! - Phase corrections `u` (degrees) for the same constituents
//! - A read-only registry binding constituent names to their `(f, u)` pair,
//!   including lunar species of order `n` and compound constituents
//!
//! Formulas are transcribed from Schureman, *Manual of Harmonic Analysis and
//! Prediction of Tides*. The astronomical angles themselves are computed
//! elsewhere and supplied as an [`AstronomicalAngles`] per instant.

pub mod angles;
pub mod config;
pub mod constituent;
pub mod error;
pub mod node_factor;
pub mod phase;
pub mod registry;

pub use angles::{ALL_ANGLE_NAMES, AngleName, AnglesBuilder, AstronomicalAngles};
pub use config::{CorrectionConfig, PhaseRange};
pub use constituent::{
    ALL_CONSTITUENTS, Constituent, ConstituentDescriptor, Formula, NodeFactorFn,
    PhaseCorrectionFn,
};
pub use error::NodalError;
pub use node_factor::{
    f_j1, f_k1, f_k2, f_l2, f_m1, f_m2, f_mf, f_mm, f_modd, f_o1, f_oo1, f_unity,
};
pub use phase::{
    ArctanBranch, u_j1, u_k1, u_k2, u_l2, u_m1, u_m2, u_mf, u_modd, u_o1, u_oo1, u_zero,
};
pub use registry::{
    ConstituentRegistry, NodalCorrection, corrections_from_named, evaluate_odd_species, registry,
};
