mod invoice;

pub use invoice::{InvoiceExtract, RateTable, ValidationResult, Verdict, FIELD_NOT_FOUND};
