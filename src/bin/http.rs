use axum::Router;
use diesel_migrations::MigrationHarness;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use pizzeria_api::handlers::{app, ApiDoc};
use pizzeria_api::{establish_connection, MIGRATIONS};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let conn = &mut establish_connection();
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run migrations");

    let router = Router::new()
        .merge(app())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:5555").await?;
    info!("Pizzeria API listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
