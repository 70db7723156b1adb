use color_eyre::Result;

use super::models::{FlashcardSet, SetSummary};
use super::Db;

impl Db {
    pub async fn create_set(&self, title: &str) -> Result<FlashcardSet> {
        let id = sqlx::query("INSERT INTO flashcard_sets (title) VALUES (?)")
            .bind(title)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        tracing::info!("new set created with id: {id}");
        Ok(FlashcardSet {
            id,
            title: title.to_string(),
        })
    }

    pub async fn sets(&self) -> Result<Vec<SetSummary>> {
        let sets = sqlx::query_as::<_, SetSummary>(
            r#"
            SELECT
              flashcard_sets.id AS id,
              flashcard_sets.title AS title,
              COUNT(questions.id) AS question_count
            FROM
              flashcard_sets
              LEFT JOIN questions ON questions.set_id = flashcard_sets.id
            GROUP BY
              flashcard_sets.id, flashcard_sets.title
            ORDER BY
              flashcard_sets.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sets)
    }

    pub async fn flashcard_set(&self, set_id: i64) -> Result<Option<FlashcardSet>> {
        let set = sqlx::query_as::<_, FlashcardSet>(
            "SELECT id, title FROM flashcard_sets WHERE id = ?",
        )
        .bind(set_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(set)
    }

    /// Returns `None` when no set has this id.
    pub async fn update_set(&self, set_id: i64, title: &str) -> Result<Option<FlashcardSet>> {
        let updated = sqlx::query("UPDATE flashcard_sets SET title = ? WHERE id = ?")
            .bind(title)
            .bind(set_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if updated == 0 {
            return Ok(None);
        }

        tracing::info!("set renamed with id: {set_id}");
        Ok(Some(FlashcardSet {
            id: set_id,
            title: title.to_string(),
        }))
    }

    /// Deletes the set and, through the foreign key cascade, its questions.
    /// Returns `false` when no set has this id.
    pub async fn delete_set(&self, set_id: i64) -> Result<bool> {
        let deleted = sqlx::query("DELETE FROM flashcard_sets WHERE id = ?")
            .bind(set_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted > 0 {
            tracing::info!("set deleted with id: {set_id}");
        }
        Ok(deleted > 0)
    }
}
