use crate::domain::entities::InvoiceExtract;
use crate::domain::errors::DomainError;

pub trait InvoiceParser: Send + Sync {
    /// Read the first item's fields out of an NF-e document. A document
    /// that cannot be parsed as XML is an error; a parseable document with
    /// missing fields is not.
    fn extract(&self, xml: &str) -> Result<InvoiceExtract, DomainError>;
}
