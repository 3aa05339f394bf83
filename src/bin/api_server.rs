// src/bin/api_server.rs

use std::sync::Arc;
use survey_data_service::infra::config;
use survey_data_service::transport;
use survey_data_service::{DataService, UserDirectory};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // --- User Directory ---
    let users = match config::users_fixture() {
        Some(path) => {
            let users = UserDirectory::from_fixture(&path)?;
            tracing::info!(path = %path.display(), count = users.list().len(), "loaded user fixture");
            users
        }
        None => {
            tracing::info!("no USERS_FIXTURE set, serving placeholder user directory");
            UserDirectory::placeholder()
        }
    };

    // --- Service Initialization ---
    let data_dir = config::data_dir();
    let data_service = DataService::new(&data_dir);
    tracing::info!(data_dir = %data_dir.display(), "data service initialized");

    let app_state = transport::http::AppState {
        data_service: Arc::new(data_service),
        users: Arc::new(users),
    };

    // --- API Server Initialization ---
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);

    let addr = format!("{}:{}", config::bind_addr(), config::listen_port()?);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
