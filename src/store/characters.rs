//! Character rows

use tracing::{debug, info};

use crate::schema::CHARACTER;

use super::database::{on_pool, Store};
use super::errors::StoreResult;
use super::models::{Character, CharacterPatch, NewCharacter};

impl Store {
    pub async fn list_characters(&self) -> StoreResult<Vec<Character>> {
        let characters: Vec<Character> = self.fetch_all(&CHARACTER).await?;
        debug!(count = characters.len(), "characters listed");
        Ok(characters)
    }

    pub async fn get_character(&self, id: i64) -> StoreResult<Option<Character>> {
        self.fetch_by_id(&CHARACTER, id).await
    }

    pub async fn create_character(&self, new: NewCharacter) -> StoreResult<Character> {
        let sql = format!(
            "INSERT INTO {} (name, appearance, affiliation) VALUES ($1, $2, $3) RETURNING {}",
            CHARACTER.quoted_name(),
            CHARACTER.select_list()
        );
        let character = on_pool!(self, pool => {
            sqlx::query_as::<_, Character>(&sql)
                .bind(new.name.as_str())
                .bind(new.appearance.as_str())
                .bind(new.affiliation.as_str())
                .fetch_one(pool)
                .await?
        });

        info!(id = character.id, "character created");
        Ok(character)
    }

    /// Apply a partial update. `None` when the character does not exist.
    pub async fn update_character(
        &self,
        id: i64,
        patch: CharacterPatch,
    ) -> StoreResult<Option<Character>> {
        let Some(mut character) = self.get_character(id).await? else {
            return Ok(None);
        };
        patch.apply(&mut character);

        let sql = format!(
            "UPDATE {} SET name = $1, appearance = $2, affiliation = $3 WHERE id = $4",
            CHARACTER.quoted_name()
        );
        on_pool!(self, pool => {
            sqlx::query(&sql)
                .bind(character.name.as_str())
                .bind(character.appearance.as_str())
                .bind(character.affiliation.as_str())
                .bind(id)
                .execute(pool)
                .await?;
        });

        info!(id, "character updated");
        Ok(Some(character))
    }

    /// Favorites pointing at the character keep their row with the
    /// reference cleared.
    pub async fn delete_character(&self, id: i64) -> StoreResult<bool> {
        let deleted = self.delete_by_id(&CHARACTER, id).await?;
        if deleted {
            info!(id, "character deleted");
        }
        Ok(deleted)
    }
}
