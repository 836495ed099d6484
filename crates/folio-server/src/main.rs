use anyhow::Result;
use axum::Router;
use std::path::Path;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "./dist".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());

    // Unknown paths fall back to index.html so client-side routes like
    // /projects resolve on deep links and reloads.
    let index = Path::new(&static_dir).join("index.html");
    let serve = ServeDir::new(&static_dir).not_found_service(ServeFile::new(index));

    let app = Router::new()
        .fallback_service(serve)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("Server listening on {}", addr);
    tracing::info!("Serving static files from {}", static_dir);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
