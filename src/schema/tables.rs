//! The five tables of the registry

use super::types::{Column, ColumnKind, Table};

pub const USER: Table = Table {
    name: "user",
    columns: &[
        Column::id(),
        Column::text("email"),
        Column::hidden("password", ColumnKind::Text),
        Column::hidden("is_active", ColumnKind::Bool),
    ],
};

pub const CHARACTER: Table = Table {
    name: "character",
    columns: &[
        Column::id(),
        Column::text("name"),
        Column::text("appearance"),
        Column::text("affiliation"),
    ],
};

pub const PLANET: Table = Table {
    name: "planet",
    columns: &[
        Column::id(),
        Column::text("name"),
        Column::text("appearance"),
        Column::text("terrain"),
        Column::text("climate"),
    ],
};

pub const VEHICLE: Table = Table {
    name: "vehicle",
    columns: &[
        Column::id(),
        Column::text("name"),
        Column::text("appearance"),
        Column::text("affiliation"),
        Column::text("dimensions"),
    ],
};

pub const FAVORITE: Table = Table {
    name: "favorite",
    columns: &[
        Column::id(),
        Column::reference("user_id", "user", false),
        Column::reference("character_id", "character", true),
        Column::reference("planet_id", "planet", true),
        Column::reference("vehicle_id", "vehicle", true),
    ],
};

/// Full schema handed to the store at startup
pub const REGISTRY_SCHEMA: &[Table] = &[USER, CHARACTER, PLANET, VEHICLE, FAVORITE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serialization_omits_credentials() {
        assert_eq!(USER.select_list(), "id, email");
    }

    #[test]
    fn test_create_field_sets() {
        assert_eq!(
            CHARACTER.required_inputs(),
            vec!["name", "appearance", "affiliation"]
        );
        assert_eq!(
            PLANET.required_inputs(),
            vec!["name", "appearance", "terrain", "climate"]
        );
        assert_eq!(FAVORITE.required_inputs(), vec!["user_id"]);
    }

    #[test]
    fn test_foreign_keys_point_at_known_tables() {
        for table in REGISTRY_SCHEMA {
            for column in table.columns {
                if let ColumnKind::ForeignKey(target) = column.kind {
                    assert!(
                        REGISTRY_SCHEMA.iter().any(|t| t.name == target),
                        "{}.{} references unknown table {}",
                        table.name,
                        column.name,
                        target
                    );
                }
            }
        }
    }
}
