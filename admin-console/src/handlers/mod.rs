pub mod app;
pub mod invoices;
pub mod metrics;
