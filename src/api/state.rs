use std::sync::Arc;

use crate::application::{ConsultService, InvoiceService};
use crate::infrastructure::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub consult_service: Arc<ConsultService>,
    pub invoice_service: Arc<InvoiceService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(consult: ConsultService, invoice: InvoiceService, config: AppConfig) -> Self {
        Self {
            consult_service: Arc::new(consult),
            invoice_service: Arc::new(invoice),
            config: Arc::new(config),
        }
    }
}
