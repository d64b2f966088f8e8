mod invoice;
mod llm;

pub use invoice::InvoiceParser;
pub use llm::LlmService;
