mod consult;
mod invoice;

pub use consult::ConsultService;
pub use invoice::InvoiceService;
