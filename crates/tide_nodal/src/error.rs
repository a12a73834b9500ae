//! Error types for nodal correction evaluation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from angle-set construction, registry lookup, or evaluation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum NodalError {
    /// A required astronomical angle was not supplied.
    MissingAngle(&'static str),
    /// A named angle mapping contained an unrecognised symbol.
    UnknownAngle(String),
    /// No correction is defined for the requested constituent.
    UnknownConstituent(String),
    /// The formula hit a singular point: a non-finite value, or a node
    /// factor that is not positive.
    DomainSingularity {
        constituent: &'static str,
        quantity: &'static str,
    },
    /// Odd-species order must be at least 1.
    InvalidOrder(u32),
}

impl Display for NodalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingAngle(name) => write!(f, "missing astronomical angle: {name}"),
            Self::UnknownAngle(name) => write!(f, "unknown astronomical angle: {name}"),
            Self::UnknownConstituent(name) => {
                write!(f, "no correction defined for constituent: {name}")
            }
            Self::DomainSingularity {
                constituent,
                quantity,
            } => write!(f, "domain singularity: {constituent} {quantity} is not finite"),
            Self::InvalidOrder(n) => write!(f, "invalid odd-species order: {n}"),
        }
    }
}

impl Error for NodalError {}
