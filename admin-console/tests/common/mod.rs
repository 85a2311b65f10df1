#![allow(dead_code)]

use admin_console::config::InvoiceApiSettings;
use admin_console::models::{
    capabilities, Capabilities, GenerateInvoiceRequest, GenerateInvoiceResponse, InvoiceHeaderForm,
};
use admin_console::services::{ApiError, InvoiceGateway};
use async_trait::async_trait;
use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use secrecy::Secret;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

pub const TEST_TOKEN: &str = "test-token";

/// Operator allowed to create invoices.
pub fn creator() -> Capabilities {
    Capabilities::from_keys([capabilities::INVOICE_CREATE, capabilities::INVOICE_READ])
}

/// Operator who can only look at invoices.
pub fn reader() -> Capabilities {
    Capabilities::from_keys([capabilities::INVOICE_READ])
}

/// Header with every required field filled in.
pub fn complete_header() -> InvoiceHeaderForm {
    InvoiceHeaderForm {
        student_care_id: "3".to_string(),
        parent: "Mei Ling Tan".to_string(),
        student_id: "41".to_string(),
        course: "7".to_string(),
        schedule: "Mon 09:00-11:00".to_string(),
        no_of_lessons: "12".to_string(),
        remarks: "June term".to_string(),
        invoice_date: "2024-06-01".to_string(),
        due_date: "2024-06-15".to_string(),
        package_id: Some("2".to_string()),
        invoice_period_from: "2024-06-01".to_string(),
        invoice_period_to: "2024-06-30".to_string(),
        receipt_amount: "107".to_string(),
    }
}

enum Outcome {
    Created(String),
    Rejected(StatusCode, String),
}

/// In-process gateway that records every payload it is handed.
pub struct RecordingGateway {
    calls: Mutex<Vec<GenerateInvoiceRequest>>,
    request_ids: Mutex<Vec<Option<String>>>,
    outcome: Outcome,
}

impl RecordingGateway {
    pub fn created(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            request_ids: Mutex::new(Vec::new()),
            outcome: Outcome::Created(message.to_string()),
        }
    }

    pub fn rejected(status: StatusCode, message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            request_ids: Mutex::new(Vec::new()),
            outcome: Outcome::Rejected(status, message.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<GenerateInvoiceRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn request_ids(&self) -> Vec<Option<String>> {
        self.request_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl InvoiceGateway for RecordingGateway {
    async fn generate_invoice(
        &self,
        request: &GenerateInvoiceRequest,
        request_id: Option<&str>,
    ) -> Result<GenerateInvoiceResponse, ApiError> {
        self.calls.lock().unwrap().push(request.clone());
        self.request_ids
            .lock()
            .unwrap()
            .push(request_id.map(String::from));
        match &self.outcome {
            Outcome::Created(message) => Ok(GenerateInvoiceResponse {
                message: Some(message.clone()),
            }),
            Outcome::Rejected(status, message) => Err(ApiError::Rejected {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

/// Gateway that stays pending until the test sends it an answer.
pub struct PendingGateway {
    answer: Mutex<Option<oneshot::Receiver<Result<GenerateInvoiceResponse, ApiError>>>>,
}

impl PendingGateway {
    pub fn new() -> (Self, oneshot::Sender<Result<GenerateInvoiceResponse, ApiError>>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                answer: Mutex::new(Some(rx)),
            },
            tx,
        )
    }
}

#[async_trait]
impl InvoiceGateway for PendingGateway {
    async fn generate_invoice(
        &self,
        _request: &GenerateInvoiceRequest,
        _request_id: Option<&str>,
    ) -> Result<GenerateInvoiceResponse, ApiError> {
        let answer = self
            .answer
            .lock()
            .unwrap()
            .take()
            .expect("PendingGateway answers once");
        answer.await.expect("answer sender dropped")
    }
}

#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub authorization: Option<String>,
    pub request_id: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
    status: StatusCode,
    body: Value,
}

/// Stand-in for the remote API, listening on an ephemeral port.
pub struct MockApi {
    pub base_url: String,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

impl MockApi {
    pub async fn spawn(status: StatusCode, body: Value) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            received: received.clone(),
            status,
            body,
        };

        let app = Router::new()
            .route("/api/generateInvoice", post(generate_invoice))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock API");
        let address = listener.local_addr().expect("Mock API has no address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        MockApi {
            base_url: format!("http://{}/api", address),
            received,
        }
    }

    pub fn settings(&self) -> InvoiceApiSettings {
        InvoiceApiSettings {
            base_url: self.base_url.clone(),
            token: Secret::new(TEST_TOKEN.to_string()),
            timeout_seconds: 5,
        }
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }
}

async fn generate_invoice(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    state
        .received
        .lock()
        .unwrap()
        .push(ReceivedRequest {
            authorization,
            request_id,
            body,
        });

    (state.status, Json(state.body.clone()))
}
