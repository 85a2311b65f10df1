//! Client for the remote student-management API's invoice endpoint.

use crate::config::InvoiceApiSettings;
use crate::models::{GenerateInvoiceRequest, GenerateInvoiceResponse};
use admin_core::observability::TracedClientExt;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use std::time::Duration;
use thiserror::Error;

pub const GENERATE_INVOICE_PATH: &str = "/generateInvoice";

/// Shown when the remote side gives no usable message.
pub const DEFAULT_FAILURE_MESSAGE: &str = "An error occurred while submitting the form";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invoice API responded {status}: {message}")]
    Rejected { status: StatusCode, message: String },
}

impl ApiError {
    /// Text for the operator-facing notification.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => DEFAULT_FAILURE_MESSAGE.to_string(),
            ApiError::Rejected { message, .. } if message.trim().is_empty() => {
                DEFAULT_FAILURE_MESSAGE.to_string()
            }
            ApiError::Rejected { message, .. } => message.clone(),
        }
    }
}

/// Remote invoice creation.
#[async_trait]
pub trait InvoiceGateway: Send + Sync {
    /// `request_id` correlates the outbound call with the inbound request.
    async fn generate_invoice(
        &self,
        request: &GenerateInvoiceRequest,
        request_id: Option<&str>,
    ) -> Result<GenerateInvoiceResponse, ApiError>;
}

pub struct InvoiceApiClient {
    client: Client,
    settings: InvoiceApiSettings,
}

impl InvoiceApiClient {
    pub fn new(settings: InvoiceApiSettings) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self { client, settings })
    }

    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl InvoiceGateway for InvoiceApiClient {
    async fn generate_invoice(
        &self,
        request: &GenerateInvoiceRequest,
        request_id: Option<&str>,
    ) -> Result<GenerateInvoiceResponse, ApiError> {
        let url = self.url(GENERATE_INVOICE_PATH);

        let mut outbound = self
            .client
            .traced_post(&url)
            .bearer_auth(self.settings.token.expose_secret())
            .json(request);
        if let Some(request_id) = request_id {
            outbound = outbound.request_id(request_id);
        }

        let response = outbound
            .send()
            .await
            .map_err(|e| {
                tracing::error!(url = %url, error = %e, "Failed to send invoice request");
                ApiError::Transport(e)
            })?;

        let status = response.status();
        let body = response.text().await?;
        let parsed: Option<GenerateInvoiceResponse> = serde_json::from_str(&body).ok();

        if status == StatusCode::CREATED {
            tracing::info!(
                invoice_items = request.invoice_items_list.len(),
                "Invoice created"
            );
            return Ok(parsed.unwrap_or_default());
        }

        let message = parsed
            .and_then(|r| r.message)
            .unwrap_or_else(|| body.trim().to_string());
        tracing::error!(status = %status, message = %message, "Invoice API rejected request");

        Err(ApiError::Rejected { status, message })
    }
}
