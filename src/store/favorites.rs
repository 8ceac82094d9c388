//! Favorite rows

use tracing::info;

use crate::schema::FAVORITE;

use super::database::{on_pool, Store};
use super::errors::StoreResult;
use super::models::{Favorite, FavoriteTarget};

impl Store {
    /// Favorites owned by a user, ascending id
    pub async fn list_favorites(&self, user_id: i64) -> StoreResult<Vec<Favorite>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE user_id = $1 ORDER BY id ASC",
            FAVORITE.select_list(),
            FAVORITE.quoted_name()
        );
        let favorites = on_pool!(self, pool => {
            sqlx::query_as::<_, Favorite>(&sql)
                .bind(user_id)
                .fetch_all(pool)
                .await?
        });
        Ok(favorites)
    }

    /// The user's oldest favorite of the given target, if any
    pub async fn find_favorite(
        &self,
        user_id: i64,
        target: FavoriteTarget,
    ) -> StoreResult<Option<Favorite>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE user_id = $1 AND {} = $2 ORDER BY id ASC LIMIT 1",
            FAVORITE.select_list(),
            FAVORITE.quoted_name(),
            target.column()
        );
        let favorite = on_pool!(self, pool => {
            sqlx::query_as::<_, Favorite>(&sql)
                .bind(user_id)
                .bind(target.id())
                .fetch_optional(pool)
                .await?
        });
        Ok(favorite)
    }

    /// Insert a favorite with exactly one target column set.
    ///
    /// No uniqueness is enforced here; callers check with
    /// [`Store::find_favorite`] first.
    pub async fn add_favorite(&self, user_id: i64, target: FavoriteTarget) -> StoreResult<Favorite> {
        let sql = format!(
            "INSERT INTO {} (user_id, {}) VALUES ($1, $2) RETURNING {}",
            FAVORITE.quoted_name(),
            target.column(),
            FAVORITE.select_list()
        );
        let favorite = on_pool!(self, pool => {
            sqlx::query_as::<_, Favorite>(&sql)
                .bind(user_id)
                .bind(target.id())
                .fetch_one(pool)
                .await?
        });

        info!(
            id = favorite.id,
            user_id,
            kind = target.kind_name(),
            target_id = target.id(),
            "favorite added"
        );
        Ok(favorite)
    }

    pub async fn delete_favorite(&self, id: i64) -> StoreResult<bool> {
        let deleted = self.delete_by_id(&FAVORITE, id).await?;
        if deleted {
            info!(id, "favorite deleted");
        }
        Ok(deleted)
    }
}
