//! Money type with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.
//! The treasury runs on a single currency, so no currency code is carried.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A monetary amount.
///
/// Transaction amounts are never negative; balances may be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates an amount from whole currency units.
    #[must_use]
    pub fn from_major(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Creates a zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the inner decimal amount.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Sum of two amounts, or `None` if it does not fit.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Sum of two amounts, clamped to the representable range.
    #[must_use]
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Share of `total` this amount represents, as a percentage rounded to 2 dp.
    ///
    /// Returns zero when `total` is zero.
    #[must_use]
    pub fn percent_of(self, total: Self) -> Decimal {
        if total.is_zero() {
            Decimal::ZERO
        } else {
            (self.0 / total.0 * Decimal::ONE_HUNDRED).round_dp(2)
        }
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&MoneyFormat::default().format(*self))
    }
}

/// Display contract for money amounts.
///
/// Defaults to Rupiah conventions: `Rp 1.250.000`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyFormat {
    /// Currency symbol placed before the amount.
    pub symbol: String,
    /// Thousands separator.
    pub thousands_separator: char,
    /// Decimal separator.
    pub decimal_separator: char,
    /// Number of fractional digits shown.
    pub decimal_places: u32,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            symbol: "Rp".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
            decimal_places: 0,
        }
    }
}

impl MoneyFormat {
    /// Creates a format with the given symbol and Rupiah separators.
    #[must_use]
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// Formats an amount, prefixing `-` for negatives: `-Rp 60.000`.
    #[must_use]
    pub fn format(&self, money: Money) -> String {
        let (negative, body) = self.render(money);
        if negative {
            format!("-{body}")
        } else {
            body
        }
    }

    /// Formats an amount with an explicit sign: `+Rp 100.000`, `-Rp 40.000`.
    ///
    /// Zero carries no sign.
    #[must_use]
    pub fn format_signed(&self, money: Money) -> String {
        let (negative, body) = self.render(money);
        if negative {
            format!("-{body}")
        } else if money.is_zero() || body_is_zero(&body) {
            body
        } else {
            format!("+{body}")
        }
    }

    fn render(&self, money: Money) -> (bool, String) {
        let rounded = money
            .0
            .round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let places = self.decimal_places as usize;
        let digits = format!("{:.places$}", rounded.abs());

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut body = format!(
            "{} {}",
            self.symbol,
            group_thousands(whole, self.thousands_separator)
        );
        if let Some(fraction) = fraction.filter(|f| !f.is_empty()) {
            body.push(self.decimal_separator);
            body.push_str(fraction);
        }
        (negative, body)
    }
}

fn body_is_zero(body: &str) -> bool {
    !body.chars().any(|c| c.is_ascii_digit() && c != '0')
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
