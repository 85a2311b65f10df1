//! Line item model for the add-invoice screen.

use super::money::{parse_amount, round_money};
use super::TaxRate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One billed row. Tax and total are derived from amount and rate and can
/// only change through [`set_amount`](Self::set_amount) and
/// [`set_tax_rate`](Self::set_tax_rate).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineItem {
    #[serde(rename = "item")]
    pub description: String,
    /// Amount exactly as typed, kept for redisplay.
    #[serde(rename = "itemAmount")]
    amount_input: String,
    #[serde(skip)]
    base_amount: Decimal,
    #[serde(rename = "taxType")]
    tax_rate: TaxRate,
    #[serde(rename = "gstAmount")]
    tax_amount: Decimal,
    #[serde(rename = "totalAmount")]
    line_total: Decimal,
}

/// Line item as posted by the browser. Derived fields echoed back are
/// ignored and recomputed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineItemInput {
    pub item: String,
    pub item_amount: String,
    pub tax_type: TaxRate,
}

impl InvoiceLineItem {
    pub fn new(description: impl Into<String>, amount: impl Into<String>, tax_rate: TaxRate) -> Self {
        let mut item = Self {
            description: description.into(),
            amount_input: amount.into(),
            base_amount: Decimal::ZERO,
            tax_rate,
            tax_amount: Decimal::ZERO,
            line_total: Decimal::ZERO,
        };
        item.recompute();
        item
    }

    pub fn blank() -> Self {
        Self::new(String::new(), String::new(), TaxRate::default())
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    /// Parsed amount; zero while the input is not a number.
    pub fn base_amount(&self) -> Decimal {
        self.base_amount
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub fn tax_amount(&self) -> Decimal {
        self.tax_amount
    }

    pub fn line_total(&self) -> Decimal {
        self.line_total
    }

    pub fn set_amount(&mut self, raw: impl Into<String>) {
        self.amount_input = raw.into();
        self.recompute();
    }

    pub fn set_tax_rate(&mut self, tax_rate: TaxRate) {
        self.tax_rate = tax_rate;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.base_amount = parse_amount(&self.amount_input);
        self.tax_amount = self.tax_rate.tax_on(self.base_amount);
        self.line_total = round_money(self.base_amount.saturating_add(self.tax_amount));
    }
}

impl Default for InvoiceLineItem {
    fn default() -> Self {
        Self::blank()
    }
}

impl From<LineItemInput> for InvoiceLineItem {
    fn from(input: LineItemInput) -> Self {
        Self::new(input.item, input.item_amount, input.tax_type)
    }
}
