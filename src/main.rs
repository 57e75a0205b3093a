use grc_shell::config::AppConfig;
use grc_shell::routes;
use grc_shell::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().expect("invalid configuration");
    let state = AppState::from_config(&config).expect("storage init failed");

    let app = routes::app(state, &config.static_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, storage = ?config.storage_path, "grc shell listening");
    axum::serve(listener, app).await.expect("server failed");
}
