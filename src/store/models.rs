//! Record types and their wire serialization.
//!
//! Each persisted record derives `Serialize` over exactly the columns the
//! schema marks as exposed, so serializing a record never leaks hidden
//! columns.

use serde::Serialize;
use sqlx::FromRow;

/// Registered user. Password and active flag stay in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub appearance: String,
    pub affiliation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCharacter {
    pub name: String,
    pub appearance: String,
    pub affiliation: String,
}

/// Partial update; `None` leaves the stored value alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterPatch {
    pub name: Option<String>,
    pub appearance: Option<String>,
    pub affiliation: Option<String>,
}

impl CharacterPatch {
    pub fn apply(self, character: &mut Character) {
        if let Some(name) = self.name {
            character.name = name;
        }
        if let Some(appearance) = self.appearance {
            character.appearance = appearance;
        }
        if let Some(affiliation) = self.affiliation {
            character.affiliation = affiliation;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub appearance: String,
    pub terrain: String,
    pub climate: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlanet {
    pub name: String,
    pub appearance: String,
    pub terrain: String,
    pub climate: String,
}

/// Partial update; `None` leaves the stored value alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetPatch {
    pub name: Option<String>,
    pub appearance: Option<String>,
    pub terrain: Option<String>,
    pub climate: Option<String>,
}

impl PlanetPatch {
    pub fn apply(self, planet: &mut Planet) {
        if let Some(name) = self.name {
            planet.name = name;
        }
        if let Some(appearance) = self.appearance {
            planet.appearance = appearance;
        }
        if let Some(terrain) = self.terrain {
            planet.terrain = terrain;
        }
        if let Some(climate) = self.climate {
            planet.climate = climate;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub name: String,
    pub appearance: String,
    pub affiliation: String,
    pub dimensions: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVehicle {
    pub name: String,
    pub appearance: String,
    pub affiliation: String,
    pub dimensions: String,
}

/// Favorite row as stored: one owner, up to three optional targets.
///
/// Rows written through [`FavoriteTarget`] carry exactly one target. A target
/// column reads back as `None` once the referenced row is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub character_id: Option<i64>,
    pub planet_id: Option<i64>,
    pub vehicle_id: Option<i64>,
}

/// The single entity a new favorite points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Character(i64),
    Planet(i64),
    Vehicle(i64),
}

impl FavoriteTarget {
    /// Favorite column holding this target's id
    pub fn column(&self) -> &'static str {
        match self {
            FavoriteTarget::Character(_) => "character_id",
            FavoriteTarget::Planet(_) => "planet_id",
            FavoriteTarget::Vehicle(_) => "vehicle_id",
        }
    }

    pub fn id(&self) -> i64 {
        match *self {
            FavoriteTarget::Character(id)
            | FavoriteTarget::Planet(id)
            | FavoriteTarget::Vehicle(id) => id,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            FavoriteTarget::Character(_) => "character",
            FavoriteTarget::Planet(_) => "planet",
            FavoriteTarget::Vehicle(_) => "vehicle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_serialization_has_no_credentials() {
        let user = User {
            id: 1,
            email: "luke@tatooine.net".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({"id": 1, "email": "luke@tatooine.net"})
        );
    }

    #[test]
    fn test_favorite_serializes_unset_targets_as_null() {
        let favorite = Favorite {
            id: 3,
            user_id: 1,
            character_id: None,
            planet_id: Some(7),
            vehicle_id: None,
        };
        assert_eq!(
            serde_json::to_value(&favorite).unwrap(),
            json!({
                "id": 3,
                "user_id": 1,
                "character_id": null,
                "planet_id": 7,
                "vehicle_id": null
            })
        );
    }

    #[test]
    fn test_planet_patch_only_touches_supplied_fields() {
        let mut planet = Planet {
            id: 1,
            name: "Tatooine".to_string(),
            appearance: "tan".to_string(),
            terrain: "desert".to_string(),
            climate: "hot".to_string(),
        };
        PlanetPatch {
            climate: Some("arid".to_string()),
            ..Default::default()
        }
        .apply(&mut planet);

        assert_eq!(planet.climate, "arid");
        assert_eq!(planet.name, "Tatooine");
        assert_eq!(planet.terrain, "desert");
    }

    #[test]
    fn test_empty_character_patch_is_a_no_op() {
        let original = Character {
            id: 2,
            name: "Leia".to_string(),
            appearance: "white gown".to_string(),
            affiliation: "Rebellion".to_string(),
        };
        let mut character = original.clone();
        CharacterPatch::default().apply(&mut character);
        assert_eq!(character, original);
    }

    #[test]
    fn test_favorite_target_columns() {
        assert_eq!(FavoriteTarget::Character(4).column(), "character_id");
        assert_eq!(FavoriteTarget::Planet(5).column(), "planet_id");
        assert_eq!(FavoriteTarget::Vehicle(6).id(), 6);
        assert_eq!(FavoriteTarget::Vehicle(6).kind_name(), "vehicle");
    }
}
