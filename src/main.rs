use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use study_helper::application::services::StudyService;
use study_helper::infrastructure::llm::OpenAiClient;
use study_helper::infrastructure::observability::{TracingConfig, init_tracing};
use study_helper::infrastructure::text_processing::CompositeFileLoader;
use study_helper::presentation::config::API_KEY_VAR;
use study_helper::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(&TracingConfig::from_settings(
        environment,
        &settings.logging,
    ));

    if !settings.llm.has_api_key() {
        tracing::warn!(
            variable = API_KEY_VAR,
            "No API key configured, upstream requests will be rejected"
        );
    }

    let file_loader = Arc::new(CompositeFileLoader::with_default_adapters());
    let llm_client = Arc::new(OpenAiClient::new(&settings.llm)?);

    tracing::info!(
        model = llm_client.model(),
        base_url = %settings.llm.base_url,
        "Completion client ready"
    );

    let state = AppState {
        study_service: Arc::new(StudyService::new(file_loader, llm_client)),
        max_upload_bytes: settings.max_upload_bytes(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server.host / server.port")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
