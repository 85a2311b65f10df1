//! Screen permissions for the invoice pages.

/// Capability keys as granted by the auth service.
pub mod capabilities {
    pub const INVOICE_CREATE: &str = "invoicing.invoice:create";
    pub const INVOICE_READ: &str = "invoicing.invoice:read";
    pub const INVOICE_UPDATE: &str = "invoicing.invoice:update";
    pub const INVOICE_DELETE: &str = "invoicing.invoice:delete";
}

/// Permission flags handed to a view when it is built. Everything is denied
/// unless granted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub invoice_create: bool,
    pub invoice_read: bool,
    pub invoice_update: bool,
    pub invoice_delete: bool,
}

impl Capabilities {
    /// Build from granted capability keys; unknown keys are ignored.
    pub fn from_keys<'a, I>(keys: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        keys.into_iter().fold(Self::default(), |mut caps, key| {
            match key {
                capabilities::INVOICE_CREATE => caps.invoice_create = true,
                capabilities::INVOICE_READ => caps.invoice_read = true,
                capabilities::INVOICE_UPDATE => caps.invoice_update = true,
                capabilities::INVOICE_DELETE => caps.invoice_delete = true,
                _ => {}
            }
            caps
        })
    }

    pub fn allows(&self, key: &str) -> bool {
        match key {
            capabilities::INVOICE_CREATE => self.invoice_create,
            capabilities::INVOICE_READ => self.invoice_read,
            capabilities::INVOICE_UPDATE => self.invoice_update,
            capabilities::INVOICE_DELETE => self.invoice_delete,
            _ => false,
        }
    }
}
