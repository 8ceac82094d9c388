//! Planet rows

use tracing::{debug, info};

use crate::schema::PLANET;

use super::database::{on_pool, Store};
use super::errors::StoreResult;
use super::models::{NewPlanet, Planet, PlanetPatch};

impl Store {
    pub async fn list_planets(&self) -> StoreResult<Vec<Planet>> {
        let planets: Vec<Planet> = self.fetch_all(&PLANET).await?;
        debug!(count = planets.len(), "planets listed");
        Ok(planets)
    }

    pub async fn get_planet(&self, id: i64) -> StoreResult<Option<Planet>> {
        self.fetch_by_id(&PLANET, id).await
    }

    pub async fn create_planet(&self, new: NewPlanet) -> StoreResult<Planet> {
        let sql = format!(
            "INSERT INTO {} (name, appearance, terrain, climate) VALUES ($1, $2, $3, $4) RETURNING {}",
            PLANET.quoted_name(),
            PLANET.select_list()
        );
        let planet = on_pool!(self, pool => {
            sqlx::query_as::<_, Planet>(&sql)
                .bind(new.name.as_str())
                .bind(new.appearance.as_str())
                .bind(new.terrain.as_str())
                .bind(new.climate.as_str())
                .fetch_one(pool)
                .await?
        });

        info!(id = planet.id, "planet created");
        Ok(planet)
    }

    /// Apply a partial update. `None` when the planet does not exist.
    pub async fn update_planet(&self, id: i64, patch: PlanetPatch) -> StoreResult<Option<Planet>> {
        let Some(mut planet) = self.get_planet(id).await? else {
            return Ok(None);
        };
        patch.apply(&mut planet);

        let sql = format!(
            "UPDATE {} SET name = $1, appearance = $2, terrain = $3, climate = $4 WHERE id = $5",
            PLANET.quoted_name()
        );
        on_pool!(self, pool => {
            sqlx::query(&sql)
                .bind(planet.name.as_str())
                .bind(planet.appearance.as_str())
                .bind(planet.terrain.as_str())
                .bind(planet.climate.as_str())
                .bind(id)
                .execute(pool)
                .await?;
        });

        info!(id, "planet updated");
        Ok(Some(planet))
    }

    pub async fn delete_planet(&self, id: i64) -> StoreResult<bool> {
        let deleted = self.delete_by_id(&PLANET, id).await?;
        if deleted {
            info!(id, "planet deleted");
        }
        Ok(deleted)
    }
}
