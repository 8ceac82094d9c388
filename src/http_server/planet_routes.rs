//! Planet HTTP Routes

use std::sync::Arc;

use axum::extract::{FromRequest, Request, State};
use axum::{http::StatusCode, routing::get, Json, Router};

use crate::schema::PLANET;
use crate::store::{NewPlanet, Planet, PlanetPatch};

use super::errors::{ApiError, ApiResult};
use super::extract::{EntityId, JsonObject};
use super::response::MessageResponse;
use super::state::{AppState, Endpoint};

const PLANETS: &str = "/planets";
const PLANET_ITEM: &str = "/planets/:id";

pub const PLANET_ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(PLANETS, &["GET", "POST"]),
    Endpoint::new(PLANET_ITEM, &["GET", "PUT", "DELETE"]),
];

/// Create planet routes
pub fn planet_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(PLANETS, get(list_planets_handler).post(create_planet_handler))
        .route(
            PLANET_ITEM,
            get(get_planet_handler)
                .put(update_planet_handler)
                .delete(delete_planet_handler),
        )
        .with_state(state)
}

fn planet_not_found() -> ApiError {
    ApiError::not_found("Planet not found")
}

async fn list_planets_handler(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Planet>>> {
    Ok(Json(state.store.list_planets().await?))
}

async fn get_planet_handler(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> ApiResult<Json<Planet>> {
    state
        .store
        .get_planet(id)
        .await?
        .map(Json)
        .ok_or_else(planet_not_found)
}

async fn create_planet_handler(
    State(state): State<Arc<AppState>>,
    body: JsonObject,
) -> ApiResult<(StatusCode, Json<Planet>)> {
    body.require(&PLANET.required_inputs())?;
    let new = NewPlanet {
        name: body.required_text("name")?,
        appearance: body.required_text("appearance")?,
        terrain: body.required_text("terrain")?,
        climate: body.required_text("climate")?,
    };

    let planet = state.store.create_planet(new).await?;
    Ok((StatusCode::CREATED, Json(planet)))
}

/// The id is looked up before the body is read, so a missing planet is a
/// 404 whatever the body holds.
async fn update_planet_handler(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    request: Request,
) -> ApiResult<Json<Planet>> {
    if state.store.get_planet(id).await?.is_none() {
        return Err(planet_not_found());
    }

    let body = JsonObject::from_request(request, &state).await?;
    let patch = PlanetPatch {
        name: body.text("name")?,
        appearance: body.text("appearance")?,
        terrain: body.text("terrain")?,
        climate: body.text("climate")?,
    };

    state
        .store
        .update_planet(id, patch)
        .await?
        .map(Json)
        .ok_or_else(planet_not_found)
}

async fn delete_planet_handler(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> ApiResult<Json<MessageResponse>> {
    if state.store.delete_planet(id).await? {
        Ok(Json(MessageResponse::new("Planet is deleted")))
    } else {
        Err(planet_not_found())
    }
}
