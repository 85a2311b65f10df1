mod common;

use admin_console::models::{Capabilities, InvoiceDraft, InvoiceHeaderForm, InvoiceLineItem, TaxRate};
use admin_console::services::DEFAULT_FAILURE_MESSAGE;
use admin_console::views::{InvoiceAddView, Notification, SubmitError};
use axum::http::StatusCode;
use admin_console::services::InvoiceGateway;
use common::{complete_header, creator, reader, PendingGateway, RecordingGateway};
use rust_decimal::Decimal;
use std::sync::Arc;

fn filled_view(capabilities: Capabilities) -> InvoiceAddView {
    let draft = InvoiceDraft::from_items(vec![InvoiceLineItem::new(
        "Tuition",
        "100",
        TaxRate::Percent7,
    )]);
    InvoiceAddView::with_form(capabilities, complete_header(), draft)
}

#[tokio::test]
async fn empty_required_field_blocks_the_call() {
    let gateway = RecordingGateway::created("Invoice created");
    let mut view = filled_view(creator());
    view.header_mut().invoice_date.clear();

    let result = view.submit(&gateway).await;

    assert!(matches!(result, Err(SubmitError::Validation(_))));
    assert!(gateway.calls().is_empty());
    assert_eq!(view.field_error("invoice_date"), Some("*Invoice Date is required"));
    assert_eq!(view.field_errors().len(), 1);
    assert!(view.notification().is_none());
    assert!(!view.is_submitting());
}

#[tokio::test]
async fn non_numeric_receipt_amount_blocks_the_call() {
    let gateway = RecordingGateway::created("Invoice created");
    let mut view = filled_view(creator());
    view.header_mut().receipt_amount = "abc".to_string();

    assert!(view.submit(&gateway).await.is_err());
    assert!(gateway.calls().is_empty());
    assert_eq!(view.field_error("receipt_amount"), Some("*Must be a Number"));
}

#[tokio::test]
async fn missing_create_capability_is_forbidden() {
    let gateway = RecordingGateway::created("Invoice created");
    let mut view = filled_view(reader());

    let result = view.submit(&gateway).await;

    assert!(matches!(result, Err(SubmitError::Forbidden)));
    assert!(gateway.calls().is_empty());
    assert!(!view.is_submitting());
}

#[tokio::test]
async fn field_messages_show_even_without_create_capability() {
    let gateway = RecordingGateway::created("Invoice created");
    let mut view = InvoiceAddView::with_form(
        Capabilities::default(),
        InvoiceHeaderForm::default(),
        InvoiceDraft::new(),
    );

    let result = view.submit(&gateway).await;

    assert!(matches!(result, Err(SubmitError::Validation(_))));
    assert_eq!(view.field_error("parent"), Some("*Parent is required"));
    assert_eq!(view.field_error("student_care_id"), Some("*Select a Centre"));
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn submitting_stays_set_while_the_call_is_pending() {
    let (gateway, answer) = PendingGateway::new();
    let gateway = Arc::new(gateway);
    let mut view = filled_view(creator());

    let payload = view.begin_submission().unwrap();
    assert!(view.is_submitting());

    let call = tokio::spawn({
        let gateway = gateway.clone();
        async move { gateway.generate_invoice(&payload, None).await }
    });
    tokio::task::yield_now().await;

    assert!(!call.is_finished());
    assert!(view.is_submitting());
    assert!(matches!(view.begin_submission(), Err(SubmitError::InFlight)));

    answer
        .send(Ok(admin_console::models::GenerateInvoiceResponse {
            message: Some("Invoice created".to_string()),
        }))
        .unwrap();
    let result = call.await.unwrap();

    assert_eq!(view.finish_submission(result).unwrap(), "Invoice created");
    assert!(!view.is_submitting());
}

#[tokio::test]
async fn request_id_is_handed_to_the_gateway() {
    let gateway = RecordingGateway::created("ok");
    let mut view = filled_view(creator()).with_request_id("req-7");

    view.submit(&gateway).await.unwrap();

    assert_eq!(gateway.request_ids(), vec![Some("req-7".to_string())]);
}

#[tokio::test]
async fn success_resets_the_form() {
    let gateway = RecordingGateway::created("Invoice INV-0042 created");
    let mut view = filled_view(creator());

    let message = view.submit(&gateway).await.unwrap();

    assert_eq!(message, "Invoice INV-0042 created");
    assert_eq!(
        view.notification(),
        Some(&Notification::Success("Invoice INV-0042 created".to_string()))
    );
    assert_eq!(view.draft(), &InvoiceDraft::new());
    assert_eq!(view.header(), &InvoiceHeaderForm::default());
    assert!(!view.is_submitting());
}

#[tokio::test]
async fn success_sends_the_computed_payload() {
    let gateway = RecordingGateway::created("ok");
    let mut view = filled_view(creator());
    let index = view.draft_mut().add_line_item();
    view.draft_mut().set_line_item_description(index, "Books");
    view.draft_mut().set_line_item_amount(index, "50");
    view.draft_mut().set_line_item_tax_rate(index, TaxRate::Percent19);

    view.submit(&gateway).await.unwrap();

    let calls = gateway.calls();
    assert_eq!(calls.len(), 1);
    let invoice = &calls[0].generate_invoice;
    assert_eq!(invoice.student_care_id, "3");
    assert_eq!(invoice.course_id, "7");
    assert_eq!(invoice.package_id.as_deref(), Some("2"));
    assert_eq!(invoice.credit_advice_offset, Decimal::from(150));
    assert_eq!(invoice.gst.to_string(), "16.50");
    assert_eq!(invoice.total_amount.to_string(), "166.50");
    assert_eq!(invoice.receipt_amount, Decimal::from(107));

    let items = &calls[0].invoice_items_list;
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].item, "Books");
    assert_eq!(items[1].tax_type, TaxRate::Percent19);
    assert_eq!(items[1].total_amount.to_string(), "59.50");
}

#[tokio::test]
async fn remote_failure_keeps_the_draft() {
    let gateway = RecordingGateway::rejected(StatusCode::BAD_REQUEST, "Parent not found");
    let mut view = filled_view(creator());
    let draft_before = view.draft().clone();

    let result = view.submit(&gateway).await;

    assert!(matches!(result, Err(SubmitError::Remote(_))));
    assert_eq!(gateway.calls().len(), 1);
    assert_eq!(view.draft(), &draft_before);
    assert_eq!(view.header(), &complete_header());
    assert_eq!(
        view.take_notification(),
        Some(Notification::Error("Parent not found".to_string()))
    );
    assert!(view.notification().is_none());
    assert!(!view.is_submitting());
}

#[tokio::test]
async fn blank_remote_message_falls_back_to_default() {
    let gateway = RecordingGateway::rejected(StatusCode::INTERNAL_SERVER_ERROR, "");
    let mut view = filled_view(creator());

    assert!(view.submit(&gateway).await.is_err());
    assert_eq!(
        view.notification(),
        Some(&Notification::Error(DEFAULT_FAILURE_MESSAGE.to_string()))
    );
}

#[tokio::test]
async fn retry_after_failure_clears_field_errors() {
    let gateway = RecordingGateway::created("ok");
    let mut view = filled_view(creator());
    view.header_mut().parent.clear();
    assert!(view.submit(&gateway).await.is_err());
    assert!(view.field_error("parent").is_some());

    view.header_mut().parent = "Mei Ling Tan".to_string();
    view.submit(&gateway).await.unwrap();

    assert!(view.field_errors().is_empty());
    assert_eq!(gateway.calls().len(), 1);
}
