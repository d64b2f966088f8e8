use std::net::SocketAddr;
use std::sync::Arc;

use contai::api::{create_router, AppState};
use contai::application::{ConsultService, InvoiceService};
use contai::infrastructure::{AppConfig, OpenAiLlm, XmlInvoiceParser};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    let llm = Arc::new(OpenAiLlm::new(config.config.llm.model.clone()));
    let consult = ConsultService::new(llm, config.prompts.consultant.system.clone());

    let parser = Arc::new(XmlInvoiceParser::new());
    let invoice = InvoiceService::new(parser, config.config.validation.rate_table());

    let addr = SocketAddr::new(
        config.config.server.host.parse()?,
        config.config.server.port,
    );

    let state = AppState::new(consult, invoice, config);
    let app = create_router(state);

    info!("API server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
