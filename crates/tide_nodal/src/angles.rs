//! Astronomical angle set consumed by the node factor and phase formulas.
//!
//! All angles are in degrees. The set is produced by an external ephemeris
//! step (one set per evaluation instant) and is only read here. Symbols follow
//! Schureman's *Manual of Harmonic Analysis and Prediction of Tides*.

use std::str::FromStr;

use crate::error::NodalError;

/// Name of one field of [`AstronomicalAngles`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleName {
    /// Schureman's ω, used only in the mean-value denominators.
    Omega,
    /// Inclination of the lunar orbit to the ecliptic (~5.145 deg).
    I,
    /// Inclination of the lunar orbit to the celestial equator.
    BigI,
    /// Right-ascension correction ν.
    Nu,
    /// ν′, used by K1.
    NuPrime,
    /// ν″, used by K2.
    NuDoublePrime,
    /// Longitude correction ξ.
    Xi,
    /// Longitude of lunar perigee.
    P,
}

/// All angle names, in builder validation order.
pub const ALL_ANGLE_NAMES: [AngleName; 8] = [
    AngleName::Omega,
    AngleName::I,
    AngleName::BigI,
    AngleName::Nu,
    AngleName::NuPrime,
    AngleName::NuDoublePrime,
    AngleName::Xi,
    AngleName::P,
];

impl AngleName {
    /// All angle names.
    pub const fn all() -> &'static [AngleName] {
        &ALL_ANGLE_NAMES
    }

    /// Canonical short symbol (`"omega"`, `"i"`, `"I"`, `"nu"`, ...).
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Omega => "omega",
            Self::I => "i",
            Self::BigI => "I",
            Self::Nu => "nu",
            Self::NuPrime => "nup",
            Self::NuDoublePrime => "nupp",
            Self::Xi => "xi",
            Self::P => "P",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Omega => 0,
            Self::I => 1,
            Self::BigI => 2,
            Self::Nu => 3,
            Self::NuPrime => 4,
            Self::NuDoublePrime => 5,
            Self::Xi => 6,
            Self::P => 7,
        }
    }
}

impl FromStr for AngleName {
    type Err = NodalError;

    /// Case-sensitive: `i` and `I` are different angles.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ANGLE_NAMES
            .iter()
            .copied()
            .find(|name| name.symbol() == s)
            .ok_or_else(|| NodalError::UnknownAngle(s.to_string()))
    }
}

/// Instantaneous lunar/solar orbital angles, all in degrees.
///
/// Built through [`AnglesBuilder`] or [`AstronomicalAngles::from_named`];
/// every field is present once construction succeeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AstronomicalAngles {
    values: [f64; 8],
}

impl AstronomicalAngles {
    /// Start an empty builder.
    pub fn builder() -> AnglesBuilder {
        AnglesBuilder::default()
    }

    /// Build from `(symbol, degrees)` pairs, e.g. `[("omega", 23.44), ("i", 5.145), ...]`.
    ///
    /// Unknown symbols fail with [`NodalError::UnknownAngle`]; absent ones with
    /// [`NodalError::MissingAngle`]. A repeated symbol keeps the last value.
    pub fn from_named<'a, I>(pairs: I) -> Result<Self, NodalError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut builder = AnglesBuilder::default();
        for (symbol, deg) in pairs {
            builder = builder.set(symbol.parse()?, deg);
        }
        builder.build()
    }

    /// Value of a single angle in degrees.
    pub fn get(&self, name: AngleName) -> f64 {
        self.values[name.index()]
    }

    /// Schureman's ω in degrees.
    pub fn omega_deg(&self) -> f64 {
        self.get(AngleName::Omega)
    }

    /// Lunar orbit inclination to the ecliptic (i) in degrees.
    pub fn i_deg(&self) -> f64 {
        self.get(AngleName::I)
    }

    /// Lunar orbit inclination to the equator (I) in degrees.
    pub fn big_i_deg(&self) -> f64 {
        self.get(AngleName::BigI)
    }

    pub fn nu_deg(&self) -> f64 {
        self.get(AngleName::Nu)
    }

    pub fn nup_deg(&self) -> f64 {
        self.get(AngleName::NuPrime)
    }

    pub fn nupp_deg(&self) -> f64 {
        self.get(AngleName::NuDoublePrime)
    }

    pub fn xi_deg(&self) -> f64 {
        self.get(AngleName::Xi)
    }

    /// Longitude of lunar perigee (P) in degrees.
    pub fn p_deg(&self) -> f64 {
        self.get(AngleName::P)
    }
}

/// Incremental constructor for [`AstronomicalAngles`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnglesBuilder {
    values: [Option<f64>; 8],
}

impl AnglesBuilder {
    /// Set an angle by name (degrees).
    pub fn set(mut self, name: AngleName, deg: f64) -> Self {
        self.values[name.index()] = Some(deg);
        self
    }

    pub fn omega(self, deg: f64) -> Self {
        self.set(AngleName::Omega, deg)
    }

    pub fn i(self, deg: f64) -> Self {
        self.set(AngleName::I, deg)
    }

    pub fn big_i(self, deg: f64) -> Self {
        self.set(AngleName::BigI, deg)
    }

    pub fn nu(self, deg: f64) -> Self {
        self.set(AngleName::Nu, deg)
    }

    pub fn nup(self, deg: f64) -> Self {
        self.set(AngleName::NuPrime, deg)
    }

    pub fn nupp(self, deg: f64) -> Self {
        self.set(AngleName::NuDoublePrime, deg)
    }

    pub fn xi(self, deg: f64) -> Self {
        self.set(AngleName::Xi, deg)
    }

    pub fn p(self, deg: f64) -> Self {
        self.set(AngleName::P, deg)
    }

    /// Finish construction.
    ///
    /// Fails with [`NodalError::MissingAngle`] naming the first absent angle
    /// in [`ALL_ANGLE_NAMES`] order.
    pub fn build(self) -> Result<AstronomicalAngles, NodalError> {
        let mut values = [0.0_f64; 8];
        for name in ALL_ANGLE_NAMES {
            values[name.index()] = self.values[name.index()]
                .ok_or(NodalError::MissingAngle(name.symbol()))?;
        }
        Ok(AstronomicalAngles { values })
    }
}
