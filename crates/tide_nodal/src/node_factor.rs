//! Node factors `f`: dimensionless amplitude corrections for the 18.6-year
//! lunar nodal cycle.
//!
//! Every function takes an [`AstronomicalAngles`] (degrees), converts the
//! angles it needs to radians, and returns a ratio of the instantaneous
//! value of a constituent's coefficient (driven by `I`) over its mean value
//! (driven by `omega` and `i`). Equation numbers refer to Schureman,
//! *Manual of Harmonic Analysis and Prediction of Tides* (1958).
//!
//! Singular inputs are not guarded: a zero mean denominator yields `inf` or
//! `NaN` here, and the registry turns that into
//! [`NodalError::DomainSingularity`](crate::NodalError::DomainSingularity).

use crate::angles::AstronomicalAngles;

// K1 regression fit to the exact spherical geometry, Schureman eqs. 226, 227.
/// Coefficient of the mean `sin 2I cos nu` term in the K1 denominator.
pub const K1_MEAN_SCALE: f64 = 0.5023;
/// Constant term of the K1 denominator.
pub const K1_MEAN_OFFSET: f64 = 0.1681;
/// Coefficient of `sin^2 2I` under the K1 square root.
pub const K1_SIN2I_SQ: f64 = 0.2523;
/// Coefficient of `sin 2I cos nu` under the K1 square root.
pub const K1_SIN2I_COS_NU: f64 = 0.1689;
/// Constant term under the K1 square root.
pub const K1_CONST: f64 = 0.0283;

// K2 regression fit, Schureman eqs. 234, 235.
/// Coefficient of the mean `sin^2 I cos 2nu` term in the K2 denominator.
pub const K2_MEAN_SCALE: f64 = 0.5023;
/// Constant term of the K2 denominator.
pub const K2_MEAN_OFFSET: f64 = 0.0365;
/// Coefficient of `sin^4 I` under the K2 square root.
pub const K2_SIN4I: f64 = 0.2523;
/// Coefficient of `sin^2 I cos 2nu` under the K2 square root.
pub const K2_SIN2I_COS_2NU: f64 = 0.0367;
/// Constant term under the K2 square root.
pub const K2_CONST: f64 = 0.0013;

/// `omega`, `i`, `I` in radians.
struct Inclinations {
    omega: f64,
    i: f64,
    big_i: f64,
}

impl Inclinations {
    fn of(a: &AstronomicalAngles) -> Self {
        Self {
            omega: a.omega_deg().to_radians(),
            i: a.i_deg().to_radians(),
            big_i: a.big_i_deg().to_radians(),
        }
    }
}

/// `1 - 3/2 sin^2 i`, shared by the Mm, J1, K1 and K2 means.
fn one_minus_three_halves_sin_sq(i: f64) -> f64 {
    1.0 - 1.5 * i.sin().powi(2)
}

/// Constituents with no nodal modulation (S2, P1, Sa, ...).
pub fn f_unity(_a: &AstronomicalAngles) -> f64 {
    1.0
}

/// Mm, Schureman eqs. 73, 65.
pub fn f_mm(a: &AstronomicalAngles) -> f64 {
    let r = Inclinations::of(a);
    let mean = (2.0 / 3.0 - r.omega.sin().powi(2)) * one_minus_three_halves_sin_sq(r.i);
    (2.0 / 3.0 - r.big_i.sin().powi(2)) / mean
}

/// Mf, Schureman eqs. 74, 66.
pub fn f_mf(a: &AstronomicalAngles) -> f64 {
    let r = Inclinations::of(a);
    let mean = r.omega.sin().powi(2) * (0.5 * r.i).cos().powi(4);
    r.big_i.sin().powi(2) / mean
}

/// O1 (and Q1), Schureman eqs. 75, 67.
pub fn f_o1(a: &AstronomicalAngles) -> f64 {
    let r = Inclinations::of(a);
    let mean = r.omega.sin() * (0.5 * r.omega).cos().powi(2) * (0.5 * r.i).cos().powi(4);
    (r.big_i.sin() * (0.5 * r.big_i).cos().powi(2)) / mean
}

/// J1, Schureman eqs. 76, 68.
pub fn f_j1(a: &AstronomicalAngles) -> f64 {
    let r = Inclinations::of(a);
    let mean = (2.0 * r.omega).sin() * one_minus_three_halves_sin_sq(r.i);
    (2.0 * r.big_i).sin() / mean
}

/// OO1, Schureman eqs. 77, 69.
pub fn f_oo1(a: &AstronomicalAngles) -> f64 {
    let r = Inclinations::of(a);
    let mean = r.omega.sin() * (0.5 * r.omega).sin().powi(2) * (0.5 * r.i).cos().powi(4);
    r.big_i.sin() * (0.5 * r.big_i).sin().powi(2) / mean
}

/// M2 and the other semidiurnal lunar constituents, Schureman eqs. 78, 70.
///
/// # Formula
/// `f = cos^4(I/2) / (cos^4(omega/2) cos^4(i/2))`
pub fn f_m2(a: &AstronomicalAngles) -> f64 {
    let r = Inclinations::of(a);
    let mean = (0.5 * r.omega).cos().powi(4) * (0.5 * r.i).cos().powi(4);
    (0.5 * r.big_i).cos().powi(4) / mean
}

/// K1, Schureman eqs. 227, 226, 68.
///
/// # Formula
/// `f = sqrt(0.2523 sin^2 2I + 0.1689 sin 2I cos nu + 0.0283)
///      / (0.5023 sin 2omega (1 - 3/2 sin^2 i) + 0.1681)`
pub fn f_k1(a: &AstronomicalAngles) -> f64 {
    let r = Inclinations::of(a);
    let nu = a.nu_deg().to_radians();
    let sin_2i_cos_nu_mean = (2.0 * r.omega).sin() * one_minus_three_halves_sin_sq(r.i);
    let mean = K1_MEAN_SCALE * sin_2i_cos_nu_mean + K1_MEAN_OFFSET;
    let sin_2i = (2.0 * r.big_i).sin();
    (K1_SIN2I_SQ * sin_2i.powi(2) + K1_SIN2I_COS_NU * sin_2i * nu.cos() + K1_CONST).sqrt() / mean
}

/// L2, Schureman eqs. 215, 213, 204.
///
/// `f_M2` times the inverse of `R_a`, whose exponent of 1/2 is confirmed
/// against Schureman Table 7. `tan^2(I/2)` and `tan^4(I/2)` are kept as
/// separate terms.
pub fn f_l2(a: &AstronomicalAngles) -> f64 {
    let p = a.p_deg().to_radians();
    let big_i = a.big_i_deg().to_radians();
    let tan_half_i = (0.5 * big_i).tan();
    let r_a_inv = (1.0 - 12.0 * tan_half_i.powi(2) * (2.0 * p).cos()
        + 36.0 * tan_half_i.powi(4))
    .sqrt();
    f_m2(a) * r_a_inv
}

/// K2, Schureman eqs. 235, 234, 71.
pub fn f_k2(a: &AstronomicalAngles) -> f64 {
    let r = Inclinations::of(a);
    let nu = a.nu_deg().to_radians();
    let sin_i = r.big_i.sin();
    let sin_sq_i_cos_2nu_mean = r.omega.sin().powi(2) * one_minus_three_halves_sin_sq(r.i);
    let mean = K2_MEAN_SCALE * sin_sq_i_cos_2nu_mean + K2_MEAN_OFFSET;
    (K2_SIN4I * sin_i.powi(4) + K2_SIN2I_COS_2NU * sin_i.powi(2) * (2.0 * nu).cos() + K2_CONST)
        .sqrt()
        / mean
}

/// M1, Schureman eqs. 206, 207, 195.
///
/// `f_O1` times the inverse of `Q_a`:
/// `sqrt(0.25 + 1.5 cos I cos 2P cos(I/2)^-0.5 + 2.25 cos^2 I cos(I/2)^-4)`.
pub fn f_m1(a: &AstronomicalAngles) -> f64 {
    let p = a.p_deg().to_radians();
    let big_i = a.big_i_deg().to_radians();
    let cos_i = big_i.cos();
    let cos_half_i = (0.5 * big_i).cos();
    let q_a_inv = (0.25
        + 1.5 * cos_i * (2.0 * p).cos() * cos_half_i.powf(-0.5)
        + 2.25 * cos_i.powi(2) * cos_half_i.powi(-4))
    .sqrt();
    f_o1(a) * q_a_inv
}

/// Odd/compound lunar species of order `n` (M3, M4, M6, ...), Schureman eq. 149.
///
/// `f = f_M2^(n/2)`; `n = 2` reduces to [`f_m2`].
pub fn f_modd(a: &AstronomicalAngles, n: u32) -> f64 {
    f_m2(a).powf(f64::from(n) / 2.0)
}
