//! Money arithmetic.
//!
//! Amounts stay in `Decimal` end to end and are rounded half away from zero
//! to cents at each derived field.

use rust_decimal::{Decimal, RoundingStrategy};

pub const MONEY_SCALE: u32 = 2;

/// Round to cents, half away from zero, and pad to exactly two places.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Lenient parse used while the operator is still typing: anything that is
/// not a number counts as zero.
pub fn parse_amount(raw: &str) -> Decimal {
    parse_number(raw).unwrap_or(Decimal::ZERO)
}

/// Strict parse used by header validation.
pub fn parse_number(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(trimmed).ok())
}

/// Sum already-rounded amounts and round the result.
pub fn sum_money<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    round_money(
        values
            .into_iter()
            .fold(Decimal::ZERO, |acc, value| acc.saturating_add(value)),
    )
}
