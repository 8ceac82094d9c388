//! Character HTTP Routes
//!
//! Characters are served under `/people`.

use std::sync::Arc;

use axum::extract::{FromRequest, Request, State};
use axum::{http::StatusCode, routing::get, Json, Router};

use crate::schema::CHARACTER;
use crate::store::{Character, CharacterPatch, NewCharacter};

use super::errors::{ApiError, ApiResult};
use super::extract::{EntityId, JsonObject};
use super::response::MessageResponse;
use super::state::{AppState, Endpoint};

const PEOPLE: &str = "/people";
const PERSON: &str = "/people/:id";

pub const PEOPLE_ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(PEOPLE, &["GET", "POST"]),
    Endpoint::new(PERSON, &["GET", "PUT", "DELETE"]),
];

/// Create character routes
pub fn people_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(PEOPLE, get(list_people_handler).post(create_person_handler))
        .route(
            PERSON,
            get(get_person_handler)
                .put(update_person_handler)
                .delete(delete_person_handler),
        )
        .with_state(state)
}

fn character_not_found() -> ApiError {
    ApiError::not_found("Character not found")
}

async fn list_people_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Character>>> {
    Ok(Json(state.store.list_characters().await?))
}

async fn get_person_handler(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> ApiResult<Json<Character>> {
    state
        .store
        .get_character(id)
        .await?
        .map(Json)
        .ok_or_else(character_not_found)
}

async fn create_person_handler(
    State(state): State<Arc<AppState>>,
    body: JsonObject,
) -> ApiResult<(StatusCode, Json<Character>)> {
    body.require(&CHARACTER.required_inputs())?;
    let new = NewCharacter {
        name: body.required_text("name")?,
        appearance: body.required_text("appearance")?,
        affiliation: body.required_text("affiliation")?,
    };

    let character = state.store.create_character(new).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

/// The id is looked up before the body is read, so a missing character is a
/// 404 whatever the body holds.
async fn update_person_handler(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    request: Request,
) -> ApiResult<Json<Character>> {
    if state.store.get_character(id).await?.is_none() {
        return Err(character_not_found());
    }

    let body = JsonObject::from_request(request, &state).await?;
    let patch = CharacterPatch {
        name: body.text("name")?,
        appearance: body.text("appearance")?,
        affiliation: body.text("affiliation")?,
    };

    state
        .store
        .update_character(id, patch)
        .await?
        .map(Json)
        .ok_or_else(character_not_found)
}

async fn delete_person_handler(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> ApiResult<Json<MessageResponse>> {
    if state.store.delete_character(id).await? {
        Ok(Json(MessageResponse::new("Character is deleted")))
    } else {
        Err(character_not_found())
    }
}
