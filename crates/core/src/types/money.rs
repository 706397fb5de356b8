//! Integer rupiah money type.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in whole rupiah.
///
/// Rupiah has no fractional unit in everyday retail use, so amounts are plain
/// integers. Negative values are allowed (change before a cash payment is
/// sufficient is negative) but never appear on a finalized transaction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rupiah(i64);

impl Rupiah {
    /// Zero rupiah.
    pub const ZERO: Self = Self(0);

    /// Create an amount from whole rupiah.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the underlying amount.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Whether the amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The amount as a [`Decimal`], for area arithmetic.
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }

    /// Format for display, e.g. `Rp 18.000`.
    ///
    /// Mirrors the id-ID currency format: `Rp` prefix, dot as the thousands
    /// separator, no decimal places.
    #[must_use]
    pub fn display(&self) -> String {
        let negative = self.0 < 0;
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
        let offset = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (i + 3 - offset) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        if negative {
            format!("-Rp {grouped}")
        } else {
            format!("Rp {grouped}")
        }
    }
}

impl std::fmt::Display for Rupiah {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<i64> for Rupiah {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl From<Rupiah> for i64 {
    fn from(amount: Rupiah) -> Self {
        amount.0
    }
}

impl Add for Rupiah {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Rupiah {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Rupiah {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<u32> for Rupiah {
    type Output = Self;

    fn mul(self, qty: u32) -> Self {
        Self(self.0 * i64::from(qty))
    }
}

impl Sum for Rupiah {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_grouping() {
        assert_eq!(Rupiah::new(0).display(), "Rp 0");
        assert_eq!(Rupiah::new(500).display(), "Rp 500");
        assert_eq!(Rupiah::new(18_000).display(), "Rp 18.000");
        assert_eq!(Rupiah::new(180_000).display(), "Rp 180.000");
        assert_eq!(Rupiah::new(15_500_000).display(), "Rp 15.500.000");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Rupiah::new(-20_000).display(), "-Rp 20.000");
        assert!(Rupiah::new(-1).is_negative());
    }

    #[test]
    fn test_arithmetic() {
        let a = Rupiah::new(90_000);
        let b = Rupiah::new(45_000);
        assert_eq!(a + b, Rupiah::new(135_000));
        assert_eq!(a - b, Rupiah::new(45_000));
        assert_eq!(b * 2, Rupiah::new(90_000));
        let total: Rupiah = [a, b, b].into_iter().sum();
        assert_eq!(total, Rupiah::new(180_000));
    }

    #[test]
    fn test_serde_transparent() {
        let amount = Rupiah::new(45_000);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "45000");
        let parsed: Rupiah = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, amount);
    }
}
