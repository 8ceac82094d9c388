//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::{Router, ServiceExt};
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::store::Store;

use super::config::HttpServerConfig;
use super::favorite_routes::{favorite_routes, FAVORITE_ENDPOINTS};
use super::people_routes::{people_routes, PEOPLE_ENDPOINTS};
use super::planet_routes::{planet_routes, PLANET_ENDPOINTS};
use super::sitemap_routes::{
    method_not_allowed_handler, not_found_handler, sitemap_routes, SITEMAP_ENDPOINTS,
};
use super::state::AppState;
use super::user_routes::{user_routes, USER_ENDPOINTS};

/// The complete service: routes behind trailing-slash trimming.
///
/// Trimming has to wrap the router, since layers added to a `Router` run
/// after a route was matched.
pub type App = NormalizePath<Router>;

/// HTTP server for the holonet API
pub struct HttpServer {
    config: HttpServerConfig,
    app: App,
}

impl HttpServer {
    /// Create a new HTTP server over the given store
    pub fn new(config: HttpServerConfig, store: Store) -> Self {
        let app = build_app(&config, store);
        Self { config, app }
    }

    /// Serve until ctrl-c
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "holonet API listening");

        axum::serve(listener, ServiceExt::<Request>::into_make_service(self.app))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server stopped");
        Ok(())
    }
}

/// Build the router and wrap it so `/planets/` is served as `/planets`
pub fn build_app(config: &HttpServerConfig, store: Store) -> App {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(config, store))
}

/// Build the combined router with all endpoints
pub fn build_router(config: &HttpServerConfig, store: Store) -> Router {
    let endpoints = [
        SITEMAP_ENDPOINTS,
        PEOPLE_ENDPOINTS,
        PLANET_ENDPOINTS,
        USER_ENDPOINTS,
        FAVORITE_ENDPOINTS,
    ]
    .concat();
    let state = Arc::new(AppState::new(store, endpoints));

    Router::new()
        .merge(sitemap_routes(state.clone()))
        .merge(people_routes(state.clone()))
        .merge(planet_routes(state.clone()))
        .merge(user_routes(state.clone()))
        .merge(favorite_routes(state))
        .method_not_allowed_fallback(method_not_allowed_handler)
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
}

fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
