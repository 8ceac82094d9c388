//! Route directory
//!
//! `GET /` answers with every registered path and its methods. Unknown
//! paths fall through to a JSON 404, unsupported methods to a JSON 405.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use super::response::ErrorResponse;
use super::state::{AppState, Endpoint};

pub const SITEMAP_ENDPOINTS: &[Endpoint] = &[Endpoint::new("/", &["GET"])];

/// Route directory response
#[derive(Debug, Serialize)]
pub struct SitemapResponse {
    pub routes: BTreeMap<&'static str, Vec<&'static str>>,
}

impl SitemapResponse {
    /// Paths registered by more than one router have their methods merged
    pub fn from_endpoints(endpoints: &[Endpoint]) -> Self {
        let mut routes: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
        for endpoint in endpoints {
            let methods = routes.entry(endpoint.path).or_default();
            for method in endpoint.methods {
                if !methods.contains(method) {
                    methods.push(*method);
                }
            }
        }
        Self { routes }
    }
}

/// Create the root directory route
pub fn sitemap_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(sitemap_handler))
        .with_state(state)
}

async fn sitemap_handler(State(state): State<Arc<AppState>>) -> Json<SitemapResponse> {
    Json(SitemapResponse::from_endpoints(&state.endpoints))
}

/// Fallback for paths no router matched
pub async fn not_found_handler() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found")))
}

/// Fallback for a known path hit with a method it does not serve
pub async fn method_not_allowed_handler() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Method not allowed")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_merges_methods_per_path() {
        let endpoints = [
            Endpoint::new("/planets", &["GET"]),
            Endpoint::new("/planets", &["POST", "GET"]),
            Endpoint::new("/", &["GET"]),
        ];
        let response = SitemapResponse::from_endpoints(&endpoints);

        assert_eq!(response.routes["/planets"], vec!["GET", "POST"]);
        assert_eq!(response.routes["/"], vec!["GET"]);
        assert_eq!(response.routes.len(), 2);
    }

    #[test]
    fn test_directory_serializes_as_path_map() {
        let response = SitemapResponse::from_endpoints(&[Endpoint::new("/users", &["GET"])]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"routes": {"/users": ["GET"]}}));
    }
}
