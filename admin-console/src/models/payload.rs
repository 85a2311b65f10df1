//! Request and response bodies of the remote `generateInvoice` endpoint.

use super::TaxRate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInvoiceRequest {
    pub generate_invoice: GenerateInvoice,
    pub invoice_items_list: Vec<InvoiceItemPayload>,
}

/// Invoice header; money goes out as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInvoice {
    pub student_care_id: String,
    pub parent: String,
    pub student_id: String,
    pub course_id: String,
    pub schedule: String,
    pub invoice_date: String,
    pub due_date: String,
    pub package_id: Option<String>,
    pub no_of_lessons: String,
    pub invoice_period_from: String,
    pub invoice_period_to: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub gst: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub credit_advice_offset: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub remarks: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub receipt_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemPayload {
    pub item: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub item_amount: Decimal,
    pub tax_type: TaxRate,
    #[serde(with = "rust_decimal::serde::float")]
    pub gst_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
}

/// Body returned on `201 Created`, and usually on rejection too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateInvoiceResponse {
    #[serde(default)]
    pub message: Option<String>,
}
