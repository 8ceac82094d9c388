//! User HTTP Routes

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::store::{Favorite, User};

use super::errors::ApiResult;
use super::state::{AppState, Endpoint};

const USERS: &str = "/users";
const USER_FAVORITES: &str = "/users/favorites";

pub const USER_ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(USERS, &["GET"]),
    Endpoint::new(USER_FAVORITES, &["GET"]),
];

/// Create user routes
pub fn user_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(USERS, get(list_users_handler))
        .route(USER_FAVORITES, get(list_user_favorites_handler))
        .with_state(state)
}

async fn list_users_handler(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.store.list_users().await?))
}

async fn list_user_favorites_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Favorite>>> {
    let user = state.current_user().await?;
    Ok(Json(state.store.list_favorites(user.id).await?))
}
