//! NF-e field extraction over libxml.

mod constants;
mod parser;

pub use parser::XmlInvoiceParser;
