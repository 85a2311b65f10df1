use crate::models::{InvoiceDraft, InvoiceHeaderForm, LineItemInput};
use crate::views::InvoiceAddView;
use crate::AppState;
use admin_core::error::AppError;
use admin_core::extract::AppJson;
use admin_core::observability::REQUEST_ID_HEADER;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct DraftForm {
    #[serde(default)]
    pub items: Vec<LineItemInput>,
}

#[derive(Debug, Deserialize)]
pub struct CreateInvoiceForm {
    #[serde(default)]
    pub header: InvoiceHeaderForm,
    #[serde(default)]
    pub items: Vec<LineItemInput>,
}

#[derive(Debug, Serialize)]
pub struct CreateInvoiceResponse {
    pub message: String,
}

/// Recompute per-line tax and totals for the items currently on screen.
pub async fn draft_totals(AppJson(form): AppJson<DraftForm>) -> Json<InvoiceDraft> {
    Json(InvoiceDraft::from_inputs(form.items))
}

#[tracing::instrument(skip(state, headers, form))]
pub async fn create_invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(form): AppJson<CreateInvoiceForm>,
) -> Result<(StatusCode, Json<CreateInvoiceResponse>), AppError> {
    let mut view = InvoiceAddView::with_form(
        state.capabilities,
        form.header,
        InvoiceDraft::from_inputs(form.items),
    );
    if let Some(request_id) = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        view = view.with_request_id(request_id);
    }

    let message = view.submit(state.invoice_gateway.as_ref()).await?;

    Ok((StatusCode::CREATED, Json(CreateInvoiceResponse { message })))
}
