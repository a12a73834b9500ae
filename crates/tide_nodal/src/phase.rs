//! Phase corrections `u` in degrees, Schureman Table 2.
//!
//! Inputs are degrees, L2/M1 trigonometry runs in radians, and every result
//! is returned in degrees, unreduced. Callers reduce modulo 360 if needed
//! (see [`PhaseRange`](crate::PhaseRange)).

use crate::angles::AstronomicalAngles;

/// How the arctangent in the L2 (`R`) and M1 (`Q`) terms is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArctanBranch {
    /// Single-argument arctangent of the quotient, result in (-90, 90) deg.
    /// Matches the published transcription; may sit 180 deg off the true
    /// quadrant when the denominator is negative.
    #[default]
    Principal,
    /// Two-argument arctangent of numerator and denominator, result in
    /// (-180, 180] deg.
    Quadrant,
}

impl ArctanBranch {
    /// Resolve `atan(num / den)` in radians.
    pub fn atan(self, num: f64, den: f64) -> f64 {
        match self {
            Self::Principal => (num / den).atan(),
            Self::Quadrant => num.atan2(den),
        }
    }
}

/// Constituents with no phase correction.
pub fn u_zero(_a: &AstronomicalAngles) -> f64 {
    0.0
}

/// Mf: `-2 xi`.
pub fn u_mf(a: &AstronomicalAngles) -> f64 {
    -2.0 * a.xi_deg()
}

/// O1 and Q1: `2 xi - nu`.
pub fn u_o1(a: &AstronomicalAngles) -> f64 {
    2.0 * a.xi_deg() - a.nu_deg()
}

/// J1: `-nu`.
pub fn u_j1(a: &AstronomicalAngles) -> f64 {
    -a.nu_deg()
}

/// OO1: `-2 xi - nu`.
pub fn u_oo1(a: &AstronomicalAngles) -> f64 {
    -2.0 * a.xi_deg() - a.nu_deg()
}

/// M2 and the other semidiurnal lunar constituents: `2 xi - 2 nu`.
pub fn u_m2(a: &AstronomicalAngles) -> f64 {
    2.0 * a.xi_deg() - 2.0 * a.nu_deg()
}

/// K1: `-nu'`.
pub fn u_k1(a: &AstronomicalAngles) -> f64 {
    -a.nup_deg()
}

/// K2: `-2 nu''`.
pub fn u_k2(a: &AstronomicalAngles) -> f64 {
    -2.0 * a.nupp_deg()
}

/// L2, Schureman eq. 214: `2 xi - 2 nu - R`.
///
/// # Formula
/// `R = atan(sin 2P / (1/6 tan^-2(I/2) - cos 2P))`
pub fn u_l2(a: &AstronomicalAngles, branch: ArctanBranch) -> f64 {
    let big_i = a.big_i_deg().to_radians();
    let two_p = 2.0 * a.p_deg().to_radians();
    let num = two_p.sin();
    let den = 1.0 / 6.0 * (0.5 * big_i).tan().powi(-2) - two_p.cos();
    let r = branch.atan(num, den).to_degrees();
    2.0 * a.xi_deg() - 2.0 * a.nu_deg() - r
}

/// M1, Schureman eq. 202: `xi - nu + Q`.
///
/// # Formula
/// `Q = atan((5 cos I - 1) / (7 cos I + 1) tan P)`
///
/// With [`ArctanBranch::Quadrant`] the tangent is split as
/// `atan2(k sin P, cos P)` so the result follows P around the circle.
pub fn u_m1(a: &AstronomicalAngles, branch: ArctanBranch) -> f64 {
    let cos_i = a.big_i_deg().to_radians().cos();
    let p = a.p_deg().to_radians();
    let k = (5.0 * cos_i - 1.0) / (7.0 * cos_i + 1.0);
    let q = match branch {
        ArctanBranch::Principal => (k * p.tan()).atan(),
        ArctanBranch::Quadrant => (k * p.sin()).atan2(p.cos()),
    };
    a.xi_deg() - a.nu_deg() + q.to_degrees()
}

/// Odd/compound lunar species of order `n`: `n/2 * u_M2`.
pub fn u_modd(a: &AstronomicalAngles, n: u32) -> f64 {
    f64::from(n) / 2.0 * u_m2(a)
}
