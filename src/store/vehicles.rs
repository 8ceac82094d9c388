//! Vehicle rows. Vehicles have no HTTP surface; they only exist as
//! favorite targets.

use tracing::info;

use crate::schema::VEHICLE;

use super::database::{on_pool, Store};
use super::errors::StoreResult;
use super::models::{NewVehicle, Vehicle};

impl Store {
    pub async fn get_vehicle(&self, id: i64) -> StoreResult<Option<Vehicle>> {
        self.fetch_by_id(&VEHICLE, id).await
    }

    pub async fn create_vehicle(&self, new: NewVehicle) -> StoreResult<Vehicle> {
        let sql = format!(
            "INSERT INTO {} (name, appearance, affiliation, dimensions) VALUES ($1, $2, $3, $4) RETURNING {}",
            VEHICLE.quoted_name(),
            VEHICLE.select_list()
        );
        let vehicle = on_pool!(self, pool => {
            sqlx::query_as::<_, Vehicle>(&sql)
                .bind(new.name.as_str())
                .bind(new.appearance.as_str())
                .bind(new.affiliation.as_str())
                .bind(new.dimensions.as_str())
                .fetch_one(pool)
                .await?
        });

        info!(id = vehicle.id, "vehicle created");
        Ok(vehicle)
    }
}
