pub mod invoice_add;

pub use invoice_add::{InvoiceAddView, Notification, SubmitError};
