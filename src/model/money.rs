//! Display formatting for monetary values and calendar dates.
//!
//! This module provides the `Currency` ISO-code type and the `format_money` and
//! `format_date` functions that render values the way the Złotówka dashboard
//! displays them: decimal comma, no thousands grouping, dates as `DD-MM-YYYY`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Renders a monetary amount under the Polish display convention.
///
/// The decimal separator is a comma and trailing fractional zeros are trimmed,
/// so `1234.50` renders as `1234,5` and `100.00` renders as `100`. The currency
/// code is not part of the rendering; callers append it themselves.
///
/// # Examples
/// ```
/// # use rust_decimal::Decimal;
/// # use std::str::FromStr;
/// # use zlotowka_dash::model::format_money;
/// let amount = Decimal::from_str("1234.50").unwrap();
/// assert_eq!(format_money(amount), "1234,5");
/// ```
pub fn format_money(amount: Decimal) -> String {
    amount.normalize().to_string().replace('.', ",")
}

/// Renders a calendar date as `DD-MM-YYYY`, e.g. `15-06-2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// A three-letter ISO 4217 currency code, e.g. `PLN` or `EUR`.
///
/// The code is validated on construction: exactly three ASCII letters, stored
/// uppercased. Serializes as a plain string.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Currency(String);

impl Currency {
    /// The currency the backend falls back to when a user has no preference.
    pub fn pln() -> Self {
        Self("PLN".to_string())
    }

    /// Returns the ISO code, e.g. `"PLN"`.
    pub fn iso_code(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::pln()
    }
}

/// An error that can occur when parsing a string into a `Currency`.
#[derive(Debug, thiserror::Error)]
#[error("'{0}' is not a three-letter ISO 4217 currency code")]
pub struct CurrencyError(String);

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyError(s.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Currency::from_str(&s).map_err(serde::de::Error::custom)
    }
}
