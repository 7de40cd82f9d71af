use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ResultEngine, SplitError};

/// Every share is rounded up to a multiple of this many currency units.
pub const ROUNDING_UNIT: u64 = 10;

/// Non-negative money amount represented as **integer currency units**.
///
/// Receipts are written in a currency without minor units, so one unit is the
/// smallest amount a participant can owe. Use this type for **all** monetary
/// values in the engine (prices, line totals, shares) to avoid floating-point
/// drift.
///
/// # Examples
///
/// ```rust
/// use split_engine::Money;
///
/// let amount = Money::new(12_340);
/// assert_eq!(amount.units(), 12340);
/// assert_eq!(amount.to_string(), "12,340");
/// ```
///
/// Parsing from user input (accepts `,` as thousands separator):
///
/// ```rust
/// use split_engine::Money;
///
/// assert_eq!("1,000".parse::<Money>().unwrap().units(), 1000);
/// assert_eq!("450".parse::<Money>().unwrap().units(), 450);
/// assert!("12.5".parse::<Money>().is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer units.
    #[must_use]
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// Returns the raw value in units.
    #[must_use]
    pub const fn units(self) -> u64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Checked multiplication by a count (returns `None` on overflow).
    #[must_use]
    pub fn checked_mul(self, count: u64) -> Option<Money> {
        self.0.checked_mul(count).map(Money)
    }

    /// Per-bearer share of `self` split across `bearers` people.
    ///
    /// The even fraction is rounded up to a whole unit and then up again to the
    /// next multiple of [`ROUNDING_UNIT`], so `share * bearers >= self` always
    /// holds. The surplus is never redistributed.
    ///
    /// ```rust
    /// use split_engine::Money;
    ///
    /// assert_eq!(Money::new(1001).split_share(3).unwrap(), Money::new(340));
    /// assert_eq!(Money::new(1000).split_share(2).unwrap(), Money::new(500));
    /// ```
    pub fn split_share(self, bearers: usize) -> ResultEngine<Money> {
        if bearers == 0 {
            return Err(SplitError::EmptySelection);
        }
        let bearers = u64::try_from(bearers)
            .map_err(|_| SplitError::Overflow(format!("too many bearers: {bearers}")))?;

        let even = self.0.div_ceil(bearers);
        even.div_ceil(ROUNDING_UNIT)
            .checked_mul(ROUNDING_UNIT)
            .map(Money)
            .ok_or_else(|| SplitError::Overflow(format!("share of {self} over {bearers}")))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        f.write_str(&out)
    }
}

impl From<u64> for Money {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Money> for u64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl FromStr for Money {
    type Err = SplitError;

    /// Parses a whole amount of units.
    ///
    /// Validation rules:
    /// - digits only, optionally grouped by `,` in blocks of three
    /// - rejects empty strings, signs and decimals
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SplitError::InvalidAmount(format!("invalid amount: {s:?}"));

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SplitError::InvalidAmount("empty amount".to_string()));
        }

        let mut groups = trimmed.split(',');
        let head = groups.next().ok_or_else(invalid)?;
        if head.is_empty() || !head.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let mut digits = head.to_string();
        for group in groups {
            if group.len() != 3 || !group.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            digits.push_str(group);
        }

        digits
            .parse::<u64>()
            .map(Money)
            .map_err(|_| SplitError::InvalidAmount("amount too large".to_string()))
    }
}
