//! Favorite HTTP Routes
//!
//! All favorite routes act for the current user (see
//! [`AppState::current_user`]). The existence check and the insert are two
//! separate statements, so two concurrent requests for the same target can
//! both succeed.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use crate::store::{Favorite, FavoriteTarget};

use super::errors::{ApiError, ApiResult};
use super::extract::EntityId;
use super::response::MessageResponse;
use super::state::{AppState, Endpoint};

const FAVORITE_PLANET: &str = "/favorite/planet/:id";
const FAVORITE_PERSON: &str = "/favorite/people/:id";

pub const FAVORITE_ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(FAVORITE_PLANET, &["POST", "DELETE"]),
    Endpoint::new(FAVORITE_PERSON, &["POST", "DELETE"]),
];

/// Create favorite routes
pub fn favorite_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            FAVORITE_PLANET,
            post(add_favorite_planet_handler).delete(remove_favorite_planet_handler),
        )
        .route(
            FAVORITE_PERSON,
            post(add_favorite_person_handler).delete(remove_favorite_person_handler),
        )
        .with_state(state)
}

async fn add_favorite_planet_handler(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> ApiResult<(StatusCode, Json<Favorite>)> {
    let user = state.current_user().await?;
    if state.store.get_planet(id).await?.is_none() {
        return Err(ApiError::not_found("Planet not found"));
    }
    add_favorite(&state, user.id, FavoriteTarget::Planet(id), "Planet").await
}

async fn add_favorite_person_handler(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> ApiResult<(StatusCode, Json<Favorite>)> {
    let user = state.current_user().await?;
    if state.store.get_character(id).await?.is_none() {
        return Err(ApiError::not_found("Character not found"));
    }
    add_favorite(&state, user.id, FavoriteTarget::Character(id), "Character").await
}

async fn remove_favorite_planet_handler(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> ApiResult<Json<MessageResponse>> {
    remove_favorite(&state, FavoriteTarget::Planet(id)).await
}

async fn remove_favorite_person_handler(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> ApiResult<Json<MessageResponse>> {
    remove_favorite(&state, FavoriteTarget::Character(id)).await
}

async fn add_favorite(
    state: &AppState,
    user_id: i64,
    target: FavoriteTarget,
    label: &str,
) -> ApiResult<(StatusCode, Json<Favorite>)> {
    if state.store.find_favorite(user_id, target).await?.is_some() {
        return Err(ApiError::AlreadyFavorited(format!(
            "{} already in favorites",
            label
        )));
    }

    let favorite = state.store.add_favorite(user_id, target).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

async fn remove_favorite(
    state: &AppState,
    target: FavoriteTarget,
) -> ApiResult<Json<MessageResponse>> {
    let user = state.current_user().await?;
    let favorite = state
        .store
        .find_favorite(user.id, target)
        .await?
        .ok_or_else(|| ApiError::not_found("Favorite not found"))?;

    // Lost a race with another delete of the same row
    if !state.store.delete_favorite(favorite.id).await? {
        return Err(ApiError::not_found("Favorite not found"));
    }

    Ok(Json(MessageResponse::new(format!(
        "Favorite {} deleted",
        target.kind_name()
    ))))
}
