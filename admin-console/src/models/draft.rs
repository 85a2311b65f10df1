//! In-memory invoice draft behind the add-invoice screen.

use super::money::{round_money, sum_money};
use super::payload::{GenerateInvoice, GenerateInvoiceRequest, InvoiceItemPayload};
use super::{InvoiceHeader, InvoiceLineItem, LineItemInput, TaxRate};
use rust_decimal::Decimal;
use serde::Serialize;

/// Aggregates over all lines, each a sum of already-rounded per-line values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvoiceTotals {
    /// Sum of line amounts.
    #[serde(rename = "creditAdviceOffset")]
    pub subtotal: Decimal,
    #[serde(rename = "gst")]
    pub total_tax: Decimal,
    #[serde(rename = "totalAmount")]
    pub grand_total: Decimal,
}

impl InvoiceTotals {
    pub fn from_items(items: &[InvoiceLineItem]) -> Self {
        Self {
            subtotal: sum_money(items.iter().map(InvoiceLineItem::base_amount)),
            total_tax: sum_money(items.iter().map(InvoiceLineItem::tax_amount)),
            grand_total: sum_money(items.iter().map(InvoiceLineItem::line_total)),
        }
    }
}

impl Default for InvoiceTotals {
    fn default() -> Self {
        Self {
            subtotal: round_money(Decimal::ZERO),
            total_tax: round_money(Decimal::ZERO),
            grand_total: round_money(Decimal::ZERO),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDraft {
    items: Vec<InvoiceLineItem>,
    #[serde(flatten)]
    totals: InvoiceTotals,
}

impl InvoiceDraft {
    /// Fresh draft with a single blank line, as the add screen opens.
    pub fn new() -> Self {
        Self::from_items(vec![InvoiceLineItem::blank()])
    }

    pub fn from_items(items: Vec<InvoiceLineItem>) -> Self {
        let totals = InvoiceTotals::from_items(&items);
        Self { items, totals }
    }

    pub fn from_inputs(inputs: Vec<LineItemInput>) -> Self {
        Self::from_items(inputs.into_iter().map(InvoiceLineItem::from).collect())
    }

    pub fn items(&self) -> &[InvoiceLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn totals(&self) -> InvoiceTotals {
        self.totals
    }

    /// Append a blank line and return its index.
    pub fn add_line_item(&mut self) -> usize {
        self.items.push(InvoiceLineItem::blank());
        self.recompute_aggregates();
        self.items.len() - 1
    }

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_line_item(&mut self, index: usize) -> InvoiceLineItem {
        let removed = self.items.remove(index);
        self.recompute_aggregates();
        removed
    }

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_line_item_description(&mut self, index: usize, description: impl Into<String>) {
        self.items[index].description = description.into();
    }

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_line_item_amount(&mut self, index: usize, raw: impl Into<String>) {
        self.items[index].set_amount(raw);
        self.recompute_aggregates();
    }

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_line_item_tax_rate(&mut self, index: usize, tax_rate: TaxRate) {
        self.items[index].set_tax_rate(tax_rate);
        self.recompute_aggregates();
    }

    pub fn recompute_aggregates(&mut self) -> InvoiceTotals {
        self.totals = InvoiceTotals::from_items(&self.items);
        self.totals
    }

    /// Pair a validated header with the lines in the shape the remote
    /// `generateInvoice` endpoint expects.
    pub fn build_submission_payload(&self, header: &InvoiceHeader) -> GenerateInvoiceRequest {
        let totals = self.totals;

        GenerateInvoiceRequest {
            generate_invoice: GenerateInvoice {
                student_care_id: header.student_care_id.clone(),
                parent: header.parent.clone(),
                student_id: header.student_id.clone(),
                course_id: header.course_id.clone(),
                schedule: header.schedule.clone(),
                invoice_date: header.invoice_date.clone(),
                due_date: header.due_date.clone(),
                package_id: header.package_id.clone(),
                no_of_lessons: header.no_of_lessons.clone(),
                invoice_period_from: header.invoice_period_from.clone(),
                invoice_period_to: header.invoice_period_to.clone(),
                gst: totals.total_tax,
                credit_advice_offset: totals.subtotal,
                total_amount: totals.grand_total,
                remarks: header.remarks.clone(),
                receipt_amount: header.receipt_amount,
            },
            invoice_items_list: self
                .items
                .iter()
                .map(|item| InvoiceItemPayload {
                    item: item.description.clone(),
                    item_amount: item.base_amount(),
                    tax_type: item.tax_rate(),
                    gst_amount: item.tax_amount(),
                    total_amount: item.line_total(),
                })
                .collect(),
        }
    }
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self::new()
    }
}
