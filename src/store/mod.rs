//! # holonet Store
//!
//! Relational persistence for users, characters, planets, vehicles and
//! favorites. Backed by SQLite or PostgreSQL through a native `sqlx` pool; the
//! backend is picked from the connection string.
//!
//! # Invariants
//!
//! - `user.email` is unique
//! - every favorite belongs to an existing user; deleting the user deletes
//!   its favorites
//! - deleting a character, planet or vehicle keeps the favorites that
//!   referenced it, with the reference cleared
//! - duplicate favorites are not prevented at this layer

mod characters;
mod database;
mod errors;
mod favorites;
mod models;
mod planets;
mod users;
mod vehicles;

pub use database::{resolve_database_url, Backend, Store, DEFAULT_DATABASE_URL};
pub use errors::{StoreError, StoreResult};
pub use models::{
    Character, CharacterPatch, Favorite, FavoriteTarget, NewCharacter, NewPlanet, NewUser,
    NewVehicle, Planet, PlanetPatch, User, Vehicle,
};
