use axis_pdf_server::{build_router, config::Config, state::AppState, GENERATE_PATH};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "info,axis_pdf_server=debug,axis_form=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first: it may carry the log filter
    let config = Config::load()?;

    init_tracing(config.logging.filter.as_deref());

    tracing::info!("Starting Axis PDF Generator...");
    tracing::info!("Background images from {}", config.assets.dir.display());
    if !config.assets.dir.is_dir() {
        tracing::warn!(
            "Asset directory {} does not exist; pages will carry placeholders",
            config.assets.dir.display()
        );
    }

    let addr = config.bind_address();
    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET  /");
    tracing::info!("  - POST {}", GENERATE_PATH);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(configured: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or(DEFAULT_LOG_FILTER)))
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
