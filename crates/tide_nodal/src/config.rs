//! Configurable options for registry evaluation.

pub use crate::phase::ArctanBranch;

/// Range the phase correction `u` is reduced into after evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhaseRange {
    /// Leave `u` as the formula produced it.
    #[default]
    Unwrapped,
    /// Reduce into [0, 360) deg.
    Positive,
    /// Reduce into (-180, 180] deg.
    Signed,
}

impl PhaseRange {
    /// Reduce an angle in degrees into this range.
    pub fn apply(self, deg: f64) -> f64 {
        match self {
            Self::Unwrapped => deg,
            Self::Positive => {
                // rem_euclid rounds tiny negatives up to exactly 360
                let r = deg.rem_euclid(360.0);
                if r >= 360.0 { 0.0 } else { r }
            }
            Self::Signed => {
                let r = deg % 360.0;
                if r > 180.0 {
                    r - 360.0
                } else if r <= -180.0 {
                    r + 360.0
                } else {
                    r
                }
            }
        }
    }
}

/// Options applied by the registry when evaluating `(f, u)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CorrectionConfig {
    /// Arctangent resolution for the L2 and M1 phase terms. Default: `Principal`.
    pub arctan: ArctanBranch,
    /// Reduction applied to `u`. Default: `Unwrapped`.
    pub phase_range: PhaseRange,
}

impl CorrectionConfig {
    /// Default options with a different arctangent branch.
    pub fn with_arctan(arctan: ArctanBranch) -> Self {
        Self {
            arctan,
            ..Self::default()
        }
    }

    /// Default options with a different phase range.
    pub fn with_phase_range(phase_range: PhaseRange) -> Self {
        Self {
            phase_range,
            ..Self::default()
        }
    }
}
