//! Domain models for the invoice add screen.

mod capability;
mod draft;
mod header;
mod line_item;
pub mod money;
mod payload;
mod tax_rate;

pub use capability::{capabilities, Capabilities};
pub use draft::{InvoiceDraft, InvoiceTotals};
pub use header::{InvoiceHeader, InvoiceHeaderForm};
pub use line_item::{InvoiceLineItem, LineItemInput};
pub use payload::{GenerateInvoice, GenerateInvoiceRequest, GenerateInvoiceResponse, InvoiceItemPayload};
pub use tax_rate::{TaxRate, UnknownTaxRate};
