//! State behind the add-invoice page: header form, line-item draft,
//! submit control and the transient notification.

use crate::models::{
    capabilities, Capabilities, GenerateInvoiceRequest, GenerateInvoiceResponse, InvoiceDraft,
    InvoiceHeaderForm,
};
use crate::services::{ApiError, InvoiceGateway};
use admin_core::error::{field_messages, AppError, FieldMessages};
use metrics::counter;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Notification {
    Success(String),
    Error(String),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Invoice form is invalid")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not permitted to create invoices")]
    Forbidden,

    #[error("A submission is already in progress")]
    InFlight,

    #[error(transparent)]
    Remote(#[from] ApiError),
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Validation(errors) => AppError::ValidationError(errors),
            SubmitError::Forbidden => {
                AppError::Forbidden(anyhow::anyhow!("Not permitted to create invoices"))
            }
            SubmitError::InFlight => {
                AppError::BadRequest(anyhow::anyhow!("A submission is already in progress"))
            }
            SubmitError::Remote(e) => AppError::BadGateway(e.user_message()),
        }
    }
}

pub struct InvoiceAddView {
    capabilities: Capabilities,
    header: InvoiceHeaderForm,
    draft: InvoiceDraft,
    field_errors: FieldMessages,
    submitting: bool,
    notification: Option<Notification>,
    request_id: Option<String>,
}

impl InvoiceAddView {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            header: InvoiceHeaderForm::default(),
            draft: InvoiceDraft::new(),
            field_errors: FieldMessages::new(),
            submitting: false,
            notification: None,
            request_id: None,
        }
    }

    /// Start from values the browser already holds.
    pub fn with_form(capabilities: Capabilities, header: InvoiceHeaderForm, draft: InvoiceDraft) -> Self {
        Self {
            header,
            draft,
            ..Self::new(capabilities)
        }
    }

    /// Forward `request_id` on the outbound call.
    pub fn with_request_id(self, request_id: impl Into<String>) -> Self {
        Self {
            request_id: Some(request_id.into()),
            ..self
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn header(&self) -> &InvoiceHeaderForm {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut InvoiceHeaderForm {
        &mut self.header
    }

    pub fn draft(&self) -> &InvoiceDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut InvoiceDraft {
        &mut self.draft
    }

    /// Inline message for `field` from the last submit attempt.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn field_errors(&self) -> &FieldMessages {
        &self.field_errors
    }

    /// True while the submission call is in flight; the save button is
    /// disabled and shows a spinner.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    /// Validate the form and hand back the payload to send.
    ///
    /// Header validation runs first so the operator always sees field
    /// messages, then the create capability is checked. On success the view
    /// is marked as submitting until [`finish_submission`] is called.
    ///
    /// [`finish_submission`]: Self::finish_submission
    pub fn begin_submission(&mut self) -> Result<GenerateInvoiceRequest, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }

        let header = match self.header.validated() {
            Ok(header) => header,
            Err(errors) => {
                self.field_errors = field_messages(&errors);
                tracing::info!(
                    fields = self.field_errors.len(),
                    "Invoice form failed validation"
                );
                return Err(SubmitError::Validation(errors));
            }
        };
        self.field_errors.clear();

        if !self.capabilities.allows(capabilities::INVOICE_CREATE) {
            tracing::warn!("Invoice submission refused: missing create capability");
            return Err(SubmitError::Forbidden);
        }

        self.submitting = true;
        Ok(self.draft.build_submission_payload(&header))
    }

    /// Apply the gateway's answer to an in-flight submission.
    ///
    /// Success resets header and draft to a fresh form. A failure leaves both
    /// untouched for another attempt.
    pub fn finish_submission(
        &mut self,
        result: Result<GenerateInvoiceResponse, ApiError>,
    ) -> Result<String, SubmitError> {
        self.submitting = false;

        match result {
            Ok(response) => {
                counter!("invoice_submissions_total", "outcome" => "created").increment(1);
                let message = response
                    .message
                    .unwrap_or_else(|| "Invoice created successfully".to_string());
                self.header = InvoiceHeaderForm::default();
                self.draft = InvoiceDraft::new();
                self.notification = Some(Notification::Success(message.clone()));
                Ok(message)
            }
            Err(e) => {
                counter!("invoice_submissions_total", "outcome" => "failed").increment(1);
                tracing::error!(error = %e, "Invoice submission failed");
                self.notification = Some(Notification::Error(e.user_message()));
                Err(SubmitError::Remote(e))
            }
        }
    }

    /// Validate and send the invoice through `gateway`.
    ///
    /// Dropping the returned future before it resolves leaves the view
    /// submitting.
    pub async fn submit(&mut self, gateway: &dyn InvoiceGateway) -> Result<String, SubmitError> {
        let payload = self.begin_submission()?;
        let result = gateway
            .generate_invoice(&payload, self.request_id.as_deref())
            .await;
        self.finish_submission(result)
    }
}
