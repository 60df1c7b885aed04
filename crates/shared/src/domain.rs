use std::{
    fmt,
    ops::{Add, AddAssign, Neg, Sub},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::SplitError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(FriendId);

/// Exact money amount in signed cents.
///
/// Serialized as text (`"7"`, `"-12.50"`); deserializes from either text or a
/// whole number of units so hand-written config can say `balance = -7`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRepr", into = "String")]
pub struct Money(i64);

#[derive(Deserialize)]
#[serde(untagged)]
enum MoneyRepr {
    Units(i64),
    Text(String),
}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Saturates at the largest amount instead of overflowing on the minimum.
    pub const fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// `None` when the sum leaves the representable range. `i64::MIN` cents
    /// is treated as out of range so every amount has an absolute value.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0
            .checked_add(rhs.0)
            .filter(|cents| *cents != i64::MIN)
            .map(Money)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0
            .checked_sub(rhs.0)
            .filter(|cents| *cents != i64::MIN)
            .map(Money)
    }

    /// Parses a non-negative amount typed into a form field.
    pub fn parse_non_negative(raw: &str) -> Result<Self, SplitError> {
        let amount: Money = raw.parse()?;
        if amount.is_negative() {
            return Err(SplitError::NegativeAmount(raw.trim().to_string()));
        }
        Ok(amount)
    }
}

fn parse_cents(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));

    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if frac.len() > 2
        || !whole.bytes().all(|b| b.is_ascii_digit())
        || !frac.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let frac_cents: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };
    let cents = whole.checked_mul(100)?.checked_add(frac_cents)?;
    Some(if negative { -cents } else { cents })
}

impl FromStr for Money {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cents(s)
            .map(Money)
            .ok_or_else(|| SplitError::InvalidAmount(s.trim().to_string()))
    }
}

impl TryFrom<MoneyRepr> for Money {
    type Error = SplitError;

    fn try_from(value: MoneyRepr) -> Result<Self, Self::Error> {
        match value {
            MoneyRepr::Units(units) => units
                .checked_mul(100)
                .map(Money)
                .ok_or_else(|| SplitError::InvalidAmount(units.to_string())),
            MoneyRepr::Text(text) => text.parse(),
        }
    }
}

impl From<Money> for String {
    fn from(value: Money) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        if abs % 100 == 0 {
            write!(f, "{sign}{}", abs / 100)
        } else {
            write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    pub image: String,
    pub balance: Money,
}

/// Who paid the bill being split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payer {
    #[default]
    User,
    Friend,
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
