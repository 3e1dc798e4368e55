//! Shared value types

use std::fmt;

use crate::settings::RemainderPolicy;

/// A length in twentieths of a point (twips), the `dxa` unit of WordprocessingML
///
/// Twips are the unit tables are stored in, so widths built from a `Length`
/// round-trip exactly. Arithmetic saturates at the bounds of `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Length(i64);

impl Length {
    pub const TWIPS_PER_INCH: i64 = 1440;
    pub const TWIPS_PER_POINT: i64 = 20;
    /// English Metric Units per twip
    pub const EMU_PER_TWIP: i64 = 635;

    pub const fn from_twips(twips: i64) -> Self {
        Self(twips)
    }

    pub fn from_inches(inches: f64) -> Self {
        Self((inches * Self::TWIPS_PER_INCH as f64).round() as i64)
    }

    pub fn from_cm(cm: f64) -> Self {
        Self::from_inches(cm / 2.54)
    }

    pub fn from_pt(points: f64) -> Self {
        Self((points * Self::TWIPS_PER_POINT as f64).round() as i64)
    }

    /// Convert from EMU, rounding to the nearest twip
    pub fn from_emu(emu: i64) -> Self {
        let half = Self::EMU_PER_TWIP / 2;
        let adjust = if emu >= 0 { half } else { -half };
        Self((emu + adjust) / Self::EMU_PER_TWIP)
    }

    pub const fn twips(self) -> i64 {
        self.0
    }

    pub fn inches(self) -> f64 {
        self.0 as f64 / Self::TWIPS_PER_INCH as f64
    }

    pub const fn emu(self) -> i64 {
        self.0.saturating_mul(Self::EMU_PER_TWIP)
    }

    /// Split into `parts` widths summing exactly to `self`
    ///
    /// `self` must not be negative. Zero parts yields an empty list.
    pub fn distribute(self, parts: usize, policy: RemainderPolicy) -> Vec<Length> {
        if parts == 0 {
            return Vec::new();
        }
        let count = parts as i64;
        let base = self.0 / count;
        let remainder = self.0 % count;

        (0..count)
            .map(|i| {
                let extra = match policy {
                    RemainderPolicy::LastColumn if i == count - 1 => remainder,
                    RemainderPolicy::LastColumn => 0,
                    RemainderPolicy::Spread if i < remainder => 1,
                    RemainderPolicy::Spread => 0,
                };
                Length(base + extra)
            })
            .collect()
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}tw", self.0)
    }
}

impl std::ops::Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for Length {
    fn sum<I: Iterator<Item = Length>>(iter: I) -> Length {
        iter.fold(Length::default(), |acc, l| acc + l)
    }
}
