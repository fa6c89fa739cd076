use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::data::FeatureTable;

pub mod api;
pub mod routes;

use routes::HttpResponse;

/// Every request goes through the fallback so routing stays in [`routes::route_request`].
pub fn build_router(table: Arc<FeatureTable>) -> Router {
    Router::new()
        .fallback(dispatch)
        .with_state(table)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn dispatch(
    State(table): State<Arc<FeatureTable>>,
    method: Method,
    uri: Uri,
    body: String,
) -> Response {
    let path = uri.path().to_string();
    let method_name = method.as_str().to_string();

    // Team generation is CPU-bound; keep it off the async workers.
    let outcome = tokio::task::spawn_blocking(move || {
        routes::route_request(&table, &method_name, &path, &body)
    })
    .await;

    match outcome {
        Ok(response) => response.into_response(),
        Err(err) => {
            error!(error = %err, "request handler panicked");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
        }
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, header::HeaderValue::from_static(self.content_type));
        response
    }
}

pub async fn serve(bind_addr: &str, table: Arc<FeatureTable>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!(
        addr = %listener.local_addr()?,
        records = table.len(),
        departments = table.departments().count(),
        "synergy-select listening"
    );

    axum::serve(listener, build_router(table))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await
}

pub fn run_server(bind_addr: &str, table: FeatureTable) -> std::io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(serve(bind_addr, Arc::new(table)))
}
