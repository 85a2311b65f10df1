//! W3C Trace Context propagation for calls to the remote API.
//!
//! See: https://www.w3.org/TR/trace-context/

use opentelemetry::trace::TraceContextExt;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::Span;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub const TRACEPARENT_HEADER: &str = "traceparent";
pub const TRACESTATE_HEADER: &str = "tracestate";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Write the current span's context as `traceparent`/`tracestate`, plus the
/// request id when one is known.
///
/// Leaves `headers` untouched when no OpenTelemetry span is active.
pub fn inject_trace_headers(headers: &mut HeaderMap, request_id: Option<&str>) {
    let context = Span::current().context();
    let span = context.span();
    let span_context = span.span_context();

    if span_context.is_valid() {
        // version-trace_id-span_id-trace_flags
        let traceparent = format!(
            "00-{}-{}-{:02x}",
            span_context.trace_id(),
            span_context.span_id(),
            span_context.trace_flags().to_u8()
        );
        if let Ok(value) = HeaderValue::from_str(&traceparent) {
            headers.insert(TRACEPARENT_HEADER, value);
        }

        let trace_state = span_context.trace_state().header();
        if !trace_state.is_empty() {
            if let Ok(value) = HeaderValue::from_str(&trace_state) {
                headers.insert(TRACESTATE_HEADER, value);
            }
        }
    }

    if let Some(value) = request_id.and_then(|id| HeaderValue::from_str(id).ok()) {
        headers.insert(REQUEST_ID_HEADER, value);
    }
}

/// `reqwest::RequestBuilder` that adds trace headers when sent.
pub struct TracedRequest {
    request: reqwest::RequestBuilder,
    request_id: Option<String>,
}

impl TracedRequest {
    pub fn new(request: reqwest::RequestBuilder) -> Self {
        Self {
            request,
            request_id: None,
        }
    }

    pub fn json<T: serde::Serialize + ?Sized>(self, json: &T) -> Self {
        Self {
            request: self.request.json(json),
            ..self
        }
    }

    pub fn bearer_auth<T: std::fmt::Display>(self, token: T) -> Self {
        Self {
            request: self.request.bearer_auth(token),
            ..self
        }
    }

    /// Correlate the outbound call with an inbound request.
    pub fn request_id(self, request_id: impl Into<String>) -> Self {
        Self {
            request_id: Some(request_id.into()),
            ..self
        }
    }

    pub async fn send(self) -> Result<reqwest::Response, reqwest::Error> {
        let mut headers = HeaderMap::new();
        inject_trace_headers(&mut headers, self.request_id.as_deref());

        self.request.headers(headers).send().await
    }
}

pub trait TracedClientExt {
    fn traced_post(&self, url: &str) -> TracedRequest;
}

impl TracedClientExt for reqwest::Client {
    fn traced_post(&self, url: &str) -> TracedRequest {
        TracedRequest::new(self.post(url))
    }
}
