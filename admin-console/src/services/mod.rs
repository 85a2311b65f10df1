pub mod invoice_client;

pub use invoice_client::{
    ApiError, InvoiceApiClient, InvoiceGateway, DEFAULT_FAILURE_MESSAGE, GENERATE_INVOICE_PATH,
};
