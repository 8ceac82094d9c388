//! Schema descriptors for holonet
//!
//! Every table the store touches is described here as a plain constant.
//! The descriptors are handed to [`crate::store::Store::connect`] which
//! checks them against the migrated database, and the store builds its
//! column lists from them. Nothing is registered globally.
//!
//! Columns marked hidden (user password and active flag) are never selected
//! for serialization.

mod tables;
mod types;

pub use tables::{CHARACTER, FAVORITE, PLANET, REGISTRY_SCHEMA, USER, VEHICLE};
pub use types::{Column, ColumnKind, Table};
