//! Worker catalog.
//!
//! The catalog order is part of the rules: a kind's position is its tier
//! index, which scales every power formula.

/// Worker kind, listed in catalog (tier) order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WorkerKind {
    Useless,
    Deficient,
    Common,
    Talented,
    Wise,
    Expert,
    Masterful,
}

impl WorkerKind {
    /// Position of this kind within the catalog.
    #[inline]
    pub const fn tier_index(self) -> usize {
        self as usize
    }

    /// Multiplier contributed by the tier: `1 + (tier + 1) / 4`.
    #[inline]
    pub fn tier_factor(self) -> f64 {
        1.0 + (self.tier_index() as f64 + 1.0) / 4.0
    }
}
