//! Property tests over the physically realised range of the nodal cycle.

use proptest::prelude::*;
use tide_nodal::{
    AstronomicalAngles, f_k1, f_k2, f_l2, f_m1, f_m2, f_modd, f_unity, u_m2, u_modd, u_zero,
};

fn realised(big_i: f64, nu: f64, xi: f64, p: f64) -> AstronomicalAngles {
    AstronomicalAngles::builder()
        .omega(23.4393)
        .i(5.145)
        .big_i(big_i)
        .nu(nu)
        .nup(0.7 * nu)
        .nupp(1.4 * nu)
        .xi(xi)
        .p(p)
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn unity_and_zero_are_constant(
        big_i in 18.3..=28.6f64,
        nu in -13.0..=13.0f64,
        xi in -12.0..=12.0f64,
        p in 0.0..360.0f64,
    ) {
        let a = realised(big_i, nu, xi, p);
        prop_assert_eq!(f_unity(&a), 1.0);
        prop_assert_eq!(u_zero(&a), 0.0);
    }

    #[test]
    fn order_two_reduces_to_m2(
        big_i in 18.3..=28.6f64,
        nu in -13.0..=13.0f64,
        xi in -12.0..=12.0f64,
        p in 0.0..360.0f64,
    ) {
        let a = realised(big_i, nu, xi, p);
        prop_assert_eq!(f_modd(&a, 2), f_m2(&a));
        prop_assert_eq!(u_modd(&a, 2), u_m2(&a));
    }

    #[test]
    fn factors_positive_and_finite(
        big_i in 18.3..=28.6f64,
        nu in -13.0..=13.0f64,
        xi in -12.0..=12.0f64,
        p in 0.0..360.0f64,
    ) {
        let a = realised(big_i, nu, xi, p);
        for (name, f) in [
            ("K1", f_k1(&a)),
            ("K2", f_k2(&a)),
            ("L2", f_l2(&a)),
            ("M1", f_m1(&a)),
            ("M2", f_m2(&a)),
        ] {
            prop_assert!(f.is_finite() && f > 0.0, "f_{} = {}", name, f);
        }
    }

    #[test]
    fn m2_decreases_with_inclination(
        lo in 18.3..23.0f64,
        hi in 23.5..=28.6f64,
    ) {
        prop_assert!(f_m2(&realised(lo, 0.0, 0.0, 0.0)) > f_m2(&realised(hi, 0.0, 0.0, 0.0)));
    }
}
