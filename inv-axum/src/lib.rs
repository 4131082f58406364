#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the inv-axum crate.
//! [inv_core]: https://docs.rs/inv_core/latest/inv_core/index.html
//! [inv_axum]: https://docs.rs/inv_axum/latest/inv_axum/index.html
#![doc = include_str!("../README.md")]

mod error;
mod product_routes;
mod transaction_routes;

use aide::{
    axum::{ApiRouter, routing::get},
    openapi::OpenApi,
};
use axum::{Extension, Json, http::header};
use inv_core::ports::Application;
use schemars::JsonSchema;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors;

pub use error::{ApiError, ErrorMessage};

mod openapi;
use openapi::{api_docs, docs_routes};

pub mod config;
use config::AxumConfig;

/// Response for the health check endpoint
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

fn build<T: ApiApplication>(state: T, config: AxumConfig) -> (axum::Router, OpenApi) {
    let mut api = OpenApi::default();
    let router = ApiRouter::new()
        .api_route("/health", get(health_check))
        .merge(product_routes::router())
        .merge(transaction_routes::router())
        .nest_api_service("/docs", docs_routes())
        .finish_api_with(&mut api, api_docs)
        .layer(Extension(Arc::new(api.clone()))) // Arc is very important here or you will face massive memory and performance issues
        .with_state(state);

    let router = if config.permissive_cors {
        // allow browser clients from any origin
        router.layer(
            cors::CorsLayer::new()
                .allow_origin(cors::Any)
                .allow_methods(cors::Any)
                .allow_headers([header::CONTENT_TYPE]),
        )
    } else {
        router
    };

    (router, api)
}

/// Construct a full API router with the given state and config
pub fn router<T: ApiApplication>(state: T, config: AxumConfig) -> axum::Router {
    build(state, config).0
}

/// Generate the OpenAPI document describing the router
pub fn schema<T: ApiApplication>(state: T) -> OpenApi {
    build(state, AxumConfig::default()).1
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: ApiApplication>(
    config: AxumConfig,
    app: T,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening for requests on {}", listener.local_addr()?);

    let service = router(app, config);
    axum::serve(listener, service).await
}

/// Axum imposes all sorts of constraints on what can pass for state. This
/// trait, coupled with a blanket implementation, specifies it all upfront and
/// in one place. If a function takes a generic `T: ApiApplication`, then
/// everything one might reasonably want to do should work.
pub trait ApiApplication:
    Clone + Send + Sync + 'static + Application<Repository: Clone + Send + Sync + 'static>
{
}

// this is the blanket implementation
impl<T> ApiApplication for T where
    T: Clone + Send + Sync + 'static + Application<Repository: Clone + Send + Sync + 'static>
{
}
