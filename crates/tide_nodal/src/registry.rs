//! Process-wide lookup from constituent name to its nodal correction.
//!
//! The registry is built once on first use and is read-only afterwards, so
//! evaluations may run from any number of threads without coordination.

use std::collections::HashMap;
use std::sync::LazyLock;

use log::{debug, trace};

use crate::angles::AstronomicalAngles;
use crate::config::CorrectionConfig;
use crate::constituent::{Constituent, ConstituentDescriptor, Formula};
use crate::error::NodalError;
use crate::node_factor::f_modd;
use crate::phase::{ArctanBranch, u_modd};

/// Node factor and phase correction for one constituent at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodalCorrection {
    /// Dimensionless amplitude factor.
    pub f: f64,
    /// Phase correction in degrees.
    pub u_deg: f64,
}

/// Tag-keyed table of constituent descriptors.
#[derive(Debug)]
pub struct ConstituentRegistry {
    by_tag: HashMap<Constituent, ConstituentDescriptor>,
}

static REGISTRY: LazyLock<ConstituentRegistry> = LazyLock::new(ConstituentRegistry::standard);

/// The shared registry of all standard constituents.
pub fn registry() -> &'static ConstituentRegistry {
    &REGISTRY
}

impl ConstituentRegistry {
    /// Registry holding every constituent in [`Constituent::all`].
    pub fn standard() -> Self {
        let by_tag: HashMap<Constituent, ConstituentDescriptor> = Constituent::all()
            .iter()
            .map(|&c| (c, ConstituentDescriptor::new(c)))
            .collect();
        debug!("constituent registry built with {} entries", by_tag.len());
        Self { by_tag }
    }

    /// Number of registered constituents.
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }

    /// Look up a constituent by name (case-insensitive).
    ///
    /// Unknown names fail with [`NodalError::UnknownConstituent`]; there is
    /// no fallback to unity/zero.
    pub fn lookup(&self, name: &str) -> Result<&ConstituentDescriptor, NodalError> {
        self.descriptor(name.parse()?)
    }

    /// Descriptor for a constituent tag.
    pub fn descriptor(
        &self,
        constituent: Constituent,
    ) -> Result<&ConstituentDescriptor, NodalError> {
        self.by_tag
            .get(&constituent)
            .ok_or_else(|| NodalError::UnknownConstituent(constituent.name().to_string()))
    }

    /// Evaluate `(f, u)` for a constituent by name.
    pub fn evaluate(
        &self,
        name: &str,
        angles: &AstronomicalAngles,
        config: &CorrectionConfig,
    ) -> Result<NodalCorrection, NodalError> {
        let descriptor = self.lookup(name)?;
        evaluate_descriptor(descriptor, angles, config)
    }

    /// Evaluate `(f, u)` for a constituent tag.
    pub fn evaluate_constituent(
        &self,
        constituent: Constituent,
        angles: &AstronomicalAngles,
        config: &CorrectionConfig,
    ) -> Result<NodalCorrection, NodalError> {
        evaluate_descriptor(self.descriptor(constituent)?, angles, config)
    }

    /// Evaluate every registered constituent in [`Constituent::all`] order.
    ///
    /// The first singular constituent aborts the whole batch.
    pub fn evaluate_all(
        &self,
        angles: &AstronomicalAngles,
        config: &CorrectionConfig,
    ) -> Result<Vec<(Constituent, NodalCorrection)>, NodalError> {
        Constituent::all()
            .iter()
            .map(|&c| Ok((c, self.evaluate_constituent(c, angles, config)?)))
            .collect()
    }
}

/// Evaluate a lunar species of arbitrary order `n >= 1` (e.g. M10).
pub fn evaluate_odd_species(
    order: u32,
    angles: &AstronomicalAngles,
    config: &CorrectionConfig,
) -> Result<NodalCorrection, NodalError> {
    if order == 0 {
        return Err(NodalError::InvalidOrder(order));
    }
    let f = f_modd(angles, order);
    let u = u_modd(angles, order);
    finish("odd species", f, u, config)
}

/// One-shot evaluation from `(symbol, degrees)` angle pairs.
///
/// Fails with `MissingAngle`/`UnknownAngle` before any constituent lookup.
pub fn corrections_from_named<'a, I>(
    name: &str,
    pairs: I,
    config: &CorrectionConfig,
) -> Result<NodalCorrection, NodalError>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let angles = AstronomicalAngles::from_named(pairs)?;
    registry().evaluate(name, &angles, config)
}

fn evaluate_descriptor(
    descriptor: &ConstituentDescriptor,
    angles: &AstronomicalAngles,
    config: &CorrectionConfig,
) -> Result<NodalCorrection, NodalError> {
    let (f, u) = raw_pair(descriptor.formula, angles, config.arctan);
    trace!("{}: f = {f}, u = {u} deg", descriptor.name());
    finish(descriptor.name(), f, u, config)
}

/// Unchecked `(f, u)` straight from the formulas.
fn raw_pair(formula: Formula, angles: &AstronomicalAngles, arctan: ArctanBranch) -> (f64, f64) {
    match formula {
        Formula::Basic { f, u } => (f(angles), u(angles, arctan)),
        Formula::OddSpecies { order } => (f_modd(angles, order), u_modd(angles, order)),
        Formula::Compound { members } => {
            members
                .iter()
                .fold((1.0, 0.0), |(f_acc, u_acc), &(member, coef)| {
                    let (f, u) = raw_pair(member.formula(), angles, arctan);
                    (f_acc * f.powi(coef.abs()), u_acc + f64::from(coef) * u)
                })
        }
    }
}

/// Reject non-finite values and non-positive node factors, then reduce `u`.
///
/// A zero `f` comes from the vanishing numerators at `I = 0` (Mf, O1, J1,
/// OO1, M1) and is reported like a zero denominator.
fn finish(
    constituent: &'static str,
    f: f64,
    u: f64,
    config: &CorrectionConfig,
) -> Result<NodalCorrection, NodalError> {
    let f_ok = f.is_finite() && f > 0.0;
    for (quantity, value, ok) in [("f", f, f_ok), ("u", u, u.is_finite())] {
        if !ok {
            debug!("{constituent}: {quantity} = {value} at a singular point");
            return Err(NodalError::DomainSingularity {
                constituent,
                quantity,
            });
        }
    }
    Ok(NodalCorrection {
        f,
        u_deg: config.phase_range.apply(u),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhaseRange;

    fn angles(omega: f64, big_i: f64) -> AstronomicalAngles {
        AstronomicalAngles::builder()
            .omega(omega)
            .i(5.145)
            .big_i(big_i)
            .nu(4.0)
            .nup(3.0)
            .nupp(6.0)
            .xi(3.5)
            .p(40.0)
            .build()
            .unwrap()
    }

    #[test]
    fn registry_holds_all_constituents() {
        assert_eq!(registry().len(), Constituent::all().len());
        assert!(!registry().is_empty());
    }

    #[test]
    fn lookup_unknown_fails() {
        let err = registry().lookup("ZZ7").unwrap_err();
        assert_eq!(err, NodalError::UnknownConstituent("ZZ7".to_string()));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(registry().lookup("mk3").unwrap().constituent, Constituent::MK3);
    }

    #[test]
    fn s2_is_explicit_unity_zero() {
        let c = registry()
            .evaluate("S2", &angles(23.4393, 25.0), &CorrectionConfig::default())
            .unwrap();
        assert_eq!(c, NodalCorrection { f: 1.0, u_deg: 0.0 });
    }

    #[test]
    fn m4_matches_m2_squared() {
        let a = angles(23.4393, 20.0);
        let cfg = CorrectionConfig::default();
        let m2 = registry().evaluate("M2", &a, &cfg).unwrap();
        let m4 = registry().evaluate("M4", &a, &cfg).unwrap();
        assert!((m4.f - m2.f * m2.f).abs() < 1e-14);
        assert!((m4.u_deg - 2.0 * m2.u_deg).abs() < 1e-12);
    }

    #[test]
    fn msf_is_s2_minus_m2() {
        let a = angles(23.4393, 27.0);
        let cfg = CorrectionConfig::default();
        let m2 = registry().evaluate("M2", &a, &cfg).unwrap();
        let msf = registry().evaluate("MSf", &a, &cfg).unwrap();
        // f uses |coef|, so the M2 factor multiplies rather than divides
        assert!((msf.f - m2.f).abs() < 1e-14);
        assert!((msf.u_deg + m2.u_deg).abs() < 1e-12);
    }

    #[test]
    fn mk3_combines_m2_and_k1() {
        let a = angles(23.4393, 22.0);
        let cfg = CorrectionConfig::default();
        let m2 = registry().evaluate("M2", &a, &cfg).unwrap();
        let k1 = registry().evaluate("K1", &a, &cfg).unwrap();
        let mk3 = registry().evaluate("MK3", &a, &cfg).unwrap();
        assert!((mk3.f - m2.f * k1.f).abs() < 1e-14);
        assert!((mk3.u_deg - (m2.u_deg + k1.u_deg)).abs() < 1e-12);
    }

    #[test]
    fn singular_mean_is_reported() {
        let err = registry()
            .evaluate("Mf", &angles(0.0, 23.0), &CorrectionConfig::default())
            .unwrap_err();
        assert_eq!(
            err,
            NodalError::DomainSingularity {
                constituent: "Mf",
                quantity: "f"
            }
        );
    }

    #[test]
    fn zero_inclination_is_singular_for_vanishing_numerators() {
        let a = angles(23.4393, 0.0);
        let cfg = CorrectionConfig::default();
        for name in ["Mf", "O1", "Q1", "J1", "OO1", "M1"] {
            let err = registry().evaluate(name, &a, &cfg).unwrap_err();
            assert!(
                matches!(err, NodalError::DomainSingularity { quantity: "f", .. }),
                "{name}: {err:?}"
            );
        }
        let m2 = registry().evaluate("M2", &a, &cfg).unwrap();
        assert!(m2.f > 1.0, "f_M2 at I = 0 is {}", m2.f);
        assert!(registry().evaluate_all(&a, &cfg).is_err());
    }

    #[test]
    fn descriptor_by_tag_matches_lookup() {
        for &c in Constituent::all() {
            assert_eq!(registry().descriptor(c).unwrap().constituent, c);
            assert_eq!(registry().lookup(c.name()).unwrap().constituent, c);
        }
    }

    #[test]
    fn odd_species_order_zero_rejected() {
        let r = evaluate_odd_species(0, &angles(23.4393, 23.0), &CorrectionConfig::default());
        assert_eq!(r, Err(NodalError::InvalidOrder(0)));
    }

    #[test]
    fn odd_species_matches_registered_m6() {
        let a = angles(23.4393, 24.0);
        let cfg = CorrectionConfig::default();
        let m6 = registry().evaluate("M6", &a, &cfg).unwrap();
        assert_eq!(evaluate_odd_species(6, &a, &cfg).unwrap(), m6);
    }

    #[test]
    fn phase_range_is_applied() {
        // u_K1 = -nup = -3
        let a = angles(23.4393, 23.0);
        let cfg = CorrectionConfig::with_phase_range(PhaseRange::Positive);
        let k1 = registry().evaluate("K1", &a, &cfg).unwrap();
        assert_eq!(k1.u_deg, 357.0);
    }

    #[test]
    fn evaluate_all_in_order() {
        let a = angles(23.4393, 23.0);
        let all = registry()
            .evaluate_all(&a, &CorrectionConfig::default())
            .unwrap();
        let tags: Vec<Constituent> = all.iter().map(|(c, _)| *c).collect();
        assert_eq!(tags, Constituent::all());
    }

    #[test]
    fn evaluate_all_aborts_on_singularity() {
        let r = registry().evaluate_all(&angles(0.0, 23.0), &CorrectionConfig::default());
        assert!(matches!(r, Err(NodalError::DomainSingularity { .. })));
    }
}
