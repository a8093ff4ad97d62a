use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use papaleguas_site::config::{database, AppConfig, AppState};

fn init_tracing() {
    // Override with RUST_LOG for debugging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "papaleguas_site=info,tower_http=info,sqlx=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    tracing::info!("Opening database {}", config.database_url);
    let pool = database::create_pool(&config.database_url).await?;

    let addr = config.server_address();
    let app = papaleguas_site::create_app(AppState::new(config, pool));

    tracing::info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
