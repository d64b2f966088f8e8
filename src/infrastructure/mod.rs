pub mod config;
pub mod llm;
pub mod nfe;

pub use config::{AppConfig, Config, PromptsConfig};
pub use llm::OpenAiLlm;
pub use nfe::XmlInvoiceParser;
