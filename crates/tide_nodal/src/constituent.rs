//! Standard tidal constituents and their `(f, u)` bindings.
//!
//! Each constituent maps to one of three correction forms:
//! - a basic pair of node factor / phase functions,
//! - a lunar species of order `n` derived from M2 (M3, M4, M6, M8),
//! - a compound of basic constituents with integer coefficients
//!   (MK3 = M2 + K1, MSf = S2 - M2, ...).

use std::str::FromStr;

use crate::angles::AstronomicalAngles;
use crate::error::NodalError;
use crate::node_factor::{
    f_j1, f_k1, f_k2, f_l2, f_m1, f_m2, f_mf, f_mm, f_o1, f_oo1, f_unity,
};
use crate::phase::{
    ArctanBranch, u_j1, u_k1, u_k2, u_l2, u_m1, u_m2, u_mf, u_o1, u_oo1, u_zero,
};

/// Node factor function: angles (deg) -> dimensionless `f`.
pub type NodeFactorFn = fn(&AstronomicalAngles) -> f64;

/// Phase correction function: angles (deg) -> `u` in degrees.
pub type PhaseCorrectionFn = fn(&AstronomicalAngles, ArctanBranch) -> f64;

/// Tidal constituents with a defined nodal correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constituent {
    Z0,
    Sa,
    Ssa,
    Mm,
    Mf,
    Q1,
    O1,
    K1,
    J1,
    M1,
    P1,
    S1,
    OO1,
    /// 2N2
    TwoN2,
    N2,
    Nu2,
    M2,
    Lambda2,
    L2,
    T2,
    S2,
    R2,
    K2,
    M3,
    /// S2 - M2
    MSf,
    /// N2 - J1
    TwoQ1,
    /// nu2 - K1
    Rho1,
    /// 2 M2 - S2
    Mu2,
    /// 2 S2 - M2
    TwoSM2,
    /// M2 + O1
    TwoMK3,
    /// M2 + K1
    MK3,
    /// M2 + N2
    MN4,
    M4,
    /// M2 + S2
    MS4,
    S4,
    M6,
    S6,
    M8,
}

/// All constituents, basic ones first, in registry evaluation order.
pub const ALL_CONSTITUENTS: [Constituent; 38] = [
    Constituent::Z0,
    Constituent::Sa,
    Constituent::Ssa,
    Constituent::Mm,
    Constituent::Mf,
    Constituent::Q1,
    Constituent::O1,
    Constituent::K1,
    Constituent::J1,
    Constituent::M1,
    Constituent::P1,
    Constituent::S1,
    Constituent::OO1,
    Constituent::TwoN2,
    Constituent::N2,
    Constituent::Nu2,
    Constituent::M2,
    Constituent::Lambda2,
    Constituent::L2,
    Constituent::T2,
    Constituent::S2,
    Constituent::R2,
    Constituent::K2,
    Constituent::M3,
    Constituent::MSf,
    Constituent::TwoQ1,
    Constituent::Rho1,
    Constituent::Mu2,
    Constituent::TwoSM2,
    Constituent::TwoMK3,
    Constituent::MK3,
    Constituent::MN4,
    Constituent::M4,
    Constituent::MS4,
    Constituent::S4,
    Constituent::M6,
    Constituent::S6,
    Constituent::M8,
];

/// How a constituent's `(f, u)` pair is computed.
#[derive(Debug, Clone, Copy)]
pub enum Formula {
    /// Dedicated node factor and phase functions.
    Basic {
        f: NodeFactorFn,
        u: PhaseCorrectionFn,
    },
    /// `(f_M2^(n/2), n/2 u_M2)`.
    OddSpecies { order: u32 },
    /// Product of member `f^|c|`, sum of member `c u`.
    Compound {
        members: &'static [(Constituent, i32)],
    },
}

/// Lift a single-argument phase function, for `Basic` bindings whose `u`
/// has no arctangent term.
macro_rules! plain_u {
    ($u:ident) => {
        |a: &AstronomicalAngles, _: ArctanBranch| $u(a)
    };
}

impl Constituent {
    /// All defined constituents.
    pub const fn all() -> &'static [Constituent] {
        &ALL_CONSTITUENTS
    }

    /// Conventional name, e.g. `"M2"`, `"2N2"`, `"nu2"`, `"MSf"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Z0 => "Z0",
            Self::Sa => "Sa",
            Self::Ssa => "Ssa",
            Self::Mm => "Mm",
            Self::Mf => "Mf",
            Self::Q1 => "Q1",
            Self::O1 => "O1",
            Self::K1 => "K1",
            Self::J1 => "J1",
            Self::M1 => "M1",
            Self::P1 => "P1",
            Self::S1 => "S1",
            Self::OO1 => "OO1",
            Self::TwoN2 => "2N2",
            Self::N2 => "N2",
            Self::Nu2 => "nu2",
            Self::M2 => "M2",
            Self::Lambda2 => "lambda2",
            Self::L2 => "L2",
            Self::T2 => "T2",
            Self::S2 => "S2",
            Self::R2 => "R2",
            Self::K2 => "K2",
            Self::M3 => "M3",
            Self::MSf => "MSf",
            Self::TwoQ1 => "2Q1",
            Self::Rho1 => "rho1",
            Self::Mu2 => "mu2",
            Self::TwoSM2 => "2SM2",
            Self::TwoMK3 => "2MK3",
            Self::MK3 => "MK3",
            Self::MN4 => "MN4",
            Self::M4 => "M4",
            Self::MS4 => "MS4",
            Self::S4 => "S4",
            Self::M6 => "M6",
            Self::S6 => "S6",
            Self::M8 => "M8",
        }
    }

    /// The `(f, u)` binding for this constituent.
    pub fn formula(self) -> Formula {
        match self {
            Self::Z0 | Self::Sa | Self::Ssa | Self::P1 | Self::S1 | Self::T2 | Self::S2
            | Self::R2 => Formula::Basic {
                f: f_unity,
                u: plain_u!(u_zero),
            },
            Self::Mm => Formula::Basic {
                f: f_mm,
                u: plain_u!(u_zero),
            },
            Self::Mf => Formula::Basic {
                f: f_mf,
                u: plain_u!(u_mf),
            },
            Self::Q1 | Self::O1 => Formula::Basic {
                f: f_o1,
                u: plain_u!(u_o1),
            },
            Self::K1 => Formula::Basic {
                f: f_k1,
                u: plain_u!(u_k1),
            },
            Self::J1 => Formula::Basic {
                f: f_j1,
                u: plain_u!(u_j1),
            },
            Self::M1 => Formula::Basic { f: f_m1, u: u_m1 },
            Self::OO1 => Formula::Basic {
                f: f_oo1,
                u: plain_u!(u_oo1),
            },
            Self::TwoN2 | Self::N2 | Self::Nu2 | Self::M2 | Self::Lambda2 => Formula::Basic {
                f: f_m2,
                u: plain_u!(u_m2),
            },
            Self::L2 => Formula::Basic { f: f_l2, u: u_l2 },
            Self::K2 => Formula::Basic {
                f: f_k2,
                u: plain_u!(u_k2),
            },
            Self::M3 => Formula::OddSpecies { order: 3 },
            Self::M4 => Formula::OddSpecies { order: 4 },
            Self::M6 => Formula::OddSpecies { order: 6 },
            Self::M8 => Formula::OddSpecies { order: 8 },
            Self::MSf => Formula::Compound {
                members: &[(Self::S2, 1), (Self::M2, -1)],
            },
            Self::TwoQ1 => Formula::Compound {
                members: &[(Self::N2, 1), (Self::J1, -1)],
            },
            Self::Rho1 => Formula::Compound {
                members: &[(Self::Nu2, 1), (Self::K1, -1)],
            },
            Self::Mu2 => Formula::Compound {
                members: &[(Self::M2, 2), (Self::S2, -1)],
            },
            Self::TwoSM2 => Formula::Compound {
                members: &[(Self::S2, 2), (Self::M2, -1)],
            },
            Self::TwoMK3 => Formula::Compound {
                members: &[(Self::M2, 1), (Self::O1, 1)],
            },
            Self::MK3 => Formula::Compound {
                members: &[(Self::M2, 1), (Self::K1, 1)],
            },
            Self::MN4 => Formula::Compound {
                members: &[(Self::M2, 1), (Self::N2, 1)],
            },
            Self::MS4 => Formula::Compound {
                members: &[(Self::M2, 1), (Self::S2, 1)],
            },
            Self::S4 => Formula::Compound {
                members: &[(Self::S2, 2)],
            },
            Self::S6 => Formula::Compound {
                members: &[(Self::S2, 3)],
            },
        }
    }

    /// Order `n` for lunar species computed from M2, `None` otherwise.
    pub fn order(self) -> Option<u32> {
        match self.formula() {
            Formula::OddSpecies { order } => Some(order),
            _ => None,
        }
    }
}

impl FromStr for Constituent {
    type Err = NodalError;

    /// Case-insensitive match against [`Constituent::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CONSTITUENTS
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| NodalError::UnknownConstituent(s.to_string()))
    }
}

/// A registered constituent with its correction binding.
#[derive(Debug, Clone, Copy)]
pub struct ConstituentDescriptor {
    pub constituent: Constituent,
    pub formula: Formula,
}

impl ConstituentDescriptor {
    pub fn new(constituent: Constituent) -> Self {
        Self {
            constituent,
            formula: constituent.formula(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.constituent.name()
    }

    /// Order `n` when bound to the odd-species form.
    pub fn order(&self) -> Option<u32> {
        match self.formula {
            Formula::OddSpecies { order } => Some(order),
            _ => None,
        }
    }
}
