//! Header fields of the add-invoice form.

use super::money::parse_number;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

/// Header as entered. Everything is text until [`validated`](Self::validated)
/// succeeds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(default)]
pub struct InvoiceHeaderForm {
    #[validate(length(min = 1, message = "*Select a Centre"))]
    pub student_care_id: String,
    #[validate(length(min = 1, message = "*Parent is required"))]
    pub parent: String,
    pub student_id: String,
    #[validate(length(min = 1, message = "*Select a course"))]
    pub course: String,
    #[validate(length(min = 1, message = "*Select a schedule"))]
    pub schedule: String,
    pub no_of_lessons: String,
    pub remarks: String,
    #[validate(length(min = 1, message = "*Invoice Date is required"))]
    pub invoice_date: String,
    #[validate(length(min = 1, message = "*Due Date is required"))]
    pub due_date: String,
    pub package_id: Option<String>,
    #[validate(length(min = 1, message = "*Invoice Period From is required"))]
    pub invoice_period_from: String,
    #[validate(length(min = 1, message = "*Invoice Period To is required"))]
    pub invoice_period_to: String,
    #[validate(
        length(min = 1, message = "*Receipt Amount is required"),
        custom(function = "validate_number")
    )]
    pub receipt_amount: String,
}

/// Header that passed validation, with numeric fields parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceHeader {
    pub student_care_id: String,
    pub parent: String,
    pub student_id: String,
    pub course_id: String,
    pub schedule: String,
    pub no_of_lessons: String,
    pub remarks: String,
    pub invoice_date: String,
    pub due_date: String,
    pub package_id: Option<String>,
    pub invoice_period_from: String,
    pub invoice_period_to: String,
    pub receipt_amount: Decimal,
}

fn validate_number(value: &str) -> Result<(), ValidationError> {
    // Blank is reported by the required rule.
    if value.trim().is_empty() || parse_number(value).is_some() {
        return Ok(());
    }
    let mut error = ValidationError::new("number");
    error.message = Some(Cow::Borrowed("*Must be a Number"));
    Err(error)
}

impl InvoiceHeaderForm {
    /// Select a centre. Course, package and student are scoped to the centre,
    /// so an actual change clears them.
    pub fn set_center(&mut self, student_care_id: impl Into<String>) {
        let student_care_id = student_care_id.into();
        if student_care_id != self.student_care_id {
            self.course.clear();
            self.student_id.clear();
            self.package_id = None;
        }
        self.student_care_id = student_care_id;
    }

    pub fn validated(&self) -> Result<InvoiceHeader, ValidationErrors> {
        self.validate()?;

        let receipt_amount = parse_number(&self.receipt_amount).unwrap_or(Decimal::ZERO);

        Ok(InvoiceHeader {
            student_care_id: self.student_care_id.clone(),
            parent: self.parent.clone(),
            student_id: self.student_id.clone(),
            course_id: self.course.clone(),
            schedule: self.schedule.clone(),
            no_of_lessons: self.no_of_lessons.clone(),
            remarks: self.remarks.clone(),
            invoice_date: self.invoice_date.clone(),
            due_date: self.due_date.clone(),
            package_id: self.package_id.clone().filter(|id| !id.is_empty()),
            invoice_period_from: self.invoice_period_from.clone(),
            invoice_period_to: self.invoice_period_to.clone(),
            receipt_amount,
        })
    }
}
