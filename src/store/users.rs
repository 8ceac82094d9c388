//! User rows and the current-user lookup

use tracing::{info, warn};

use crate::schema::{FAVORITE, USER};

use super::database::{on_pool, Store};
use super::errors::{StoreError, StoreResult};
use super::models::{NewUser, User};

impl Store {
    pub async fn list_users(&self) -> StoreResult<Vec<User>> {
        self.fetch_all(&USER).await
    }

    /// The user with the lowest id.
    ///
    /// There are no sessions: every favorite endpoint acts on behalf of this
    /// user. Swap this lookup out once requests carry an identity.
    pub async fn first_registered_user(&self) -> StoreResult<Option<User>> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id ASC LIMIT 1",
            USER.select_list(),
            USER.quoted_name()
        );
        let user = on_pool!(self, pool => {
            sqlx::query_as::<_, User>(&sql).fetch_optional(pool).await?
        });
        Ok(user)
    }

    pub async fn create_user(&self, new: NewUser) -> StoreResult<User> {
        let sql = format!(
            "INSERT INTO {} (email, password, is_active) VALUES ($1, $2, $3) RETURNING {}",
            USER.quoted_name(),
            USER.select_list()
        );
        let inserted = on_pool!(self, pool => {
            sqlx::query_as::<_, User>(&sql)
                .bind(new.email.as_str())
                .bind(new.password.as_str())
                .bind(new.is_active)
                .fetch_one(pool)
                .await
        });
        let user = inserted.map_err(|e| {
            if StoreError::is_unique_violation(&e) {
                warn!(email = %new.email, "email already registered");
                StoreError::DuplicateEmail(new.email.clone())
            } else {
                StoreError::Database(e)
            }
        })?;

        info!(id = user.id, "user created");
        Ok(user)
    }

    /// Delete a user together with all of its favorites, in one transaction
    pub async fn delete_user(&self, id: i64) -> StoreResult<bool> {
        let delete_favorites = format!("DELETE FROM {} WHERE user_id = $1", FAVORITE.quoted_name());
        let delete_user = format!("DELETE FROM {} WHERE id = $1", USER.quoted_name());

        let (favorites, users) = on_pool!(self, pool => {
            let mut tx = pool.begin().await?;
            let favorites = sqlx::query(&delete_favorites)
                .bind(id)
                .execute(&mut *tx)
                .await?
                .rows_affected();
            let users = sqlx::query(&delete_user)
                .bind(id)
                .execute(&mut *tx)
                .await?
                .rows_affected();
            tx.commit().await?;
            (favorites, users)
        });

        if users > 0 {
            info!(id, favorites, "user deleted");
        }
        Ok(users > 0)
    }
}
