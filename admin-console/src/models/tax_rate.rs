//! GST rates offered on an invoice line.

use super::money::round_money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TaxRate {
    #[default]
    Percent0,
    Percent7,
    Percent19,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported tax rate: {0}")]
pub struct UnknownTaxRate(pub String);

impl TaxRate {
    pub const ALL: [TaxRate; 3] = [TaxRate::Percent0, TaxRate::Percent7, TaxRate::Percent19];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaxRate::Percent0 => "0",
            TaxRate::Percent7 => "7",
            TaxRate::Percent19 => "19",
        }
    }

    pub fn percent(&self) -> Decimal {
        match self {
            TaxRate::Percent0 => Decimal::ZERO,
            TaxRate::Percent7 => Decimal::from(7),
            TaxRate::Percent19 => Decimal::from(19),
        }
    }

    /// Tax owed on `base`, rounded to cents.
    pub fn tax_on(&self, base: Decimal) -> Decimal {
        round_money(base.saturating_mul(self.percent()) / Decimal::ONE_HUNDRED)
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_str())
    }
}

impl FromStr for TaxRate {
    type Err = UnknownTaxRate;

    /// Accepts `"0"`, `"7"`, `"19"` with an optional `%`. An unselected
    /// dropdown (empty string) is the zero rate.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches('%') {
            "" | "0" => Ok(TaxRate::Percent0),
            "7" => Ok(TaxRate::Percent7),
            "19" => Ok(TaxRate::Percent19),
            _ => Err(UnknownTaxRate(s.to_string())),
        }
    }
}

impl TryFrom<String> for TaxRate {
    type Error = UnknownTaxRate;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TaxRate> for String {
    fn from(rate: TaxRate) -> Self {
        rate.as_str().to_string()
    }
}
