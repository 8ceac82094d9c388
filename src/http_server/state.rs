//! Shared handler state

use serde::Serialize;

use crate::store::{Store, User};

use super::errors::{ApiError, ApiResult};

/// One registered path and the methods it answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub path: &'static str,
    pub methods: &'static [&'static str],
}

impl Endpoint {
    pub const fn new(path: &'static str, methods: &'static [&'static str]) -> Self {
        Self { path, methods }
    }
}

/// State shared across handlers
pub struct AppState {
    pub store: Store,
    /// Every route the router serves, for the root directory
    pub endpoints: Vec<Endpoint>,
}

impl AppState {
    pub fn new(store: Store, endpoints: Vec<Endpoint>) -> Self {
        Self { store, endpoints }
    }

    /// The user favorites are read and written for. See
    /// [`Store::first_registered_user`].
    pub async fn current_user(&self) -> ApiResult<User> {
        self.store
            .first_registered_user()
            .await?
            .ok_or_else(|| ApiError::not_found("No users found"))
    }
}
