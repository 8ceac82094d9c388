//! # holonet HTTP Server Module
//!
//! Stateless axum handlers over the [`crate::store::Store`]. Each route
//! module owns its paths and advertises them for the root directory.
//!
//! # Endpoints
//!
//! - `/` - Route directory
//! - `/people`, `/people/:id` - Characters
//! - `/planets`, `/planets/:id` - Planets
//! - `/users`, `/users/favorites` - Users and the current user's favorites
//! - `/favorite/planet/:id`, `/favorite/people/:id` - Add/remove favorites

pub mod config;
pub mod errors;
pub mod extract;
pub mod favorite_routes;
pub mod people_routes;
pub mod planet_routes;
pub mod response;
pub mod server;
pub mod sitemap_routes;
pub mod state;
pub mod user_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::{build_app, build_router, App, HttpServer};
pub use state::{AppState, Endpoint};
