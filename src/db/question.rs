use std::collections::BTreeSet;

use color_eyre::Result;
use sqlx::{QueryBuilder, Sqlite};

use super::models::{NewQuestion, Question};
use super::Db;

const QUESTION_COLUMNS: &str =
    "id, set_id, question_text, option_a, option_b, option_c, option_d, correct_option";

impl Db {
    /// The caller checks that the set exists; a dangling `set_id` fails on the foreign key.
    pub async fn add_question(&self, set_id: i64, fields: &NewQuestion) -> Result<Question> {
        let id = sqlx::query(
            r#"
            INSERT INTO questions
              (set_id, question_text, option_a, option_b, option_c, option_d, correct_option)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(set_id)
        .bind(&fields.question_text)
        .bind(&fields.option_a)
        .bind(&fields.option_b)
        .bind(&fields.option_c)
        .bind(&fields.option_d)
        .bind(fields.correct_option)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        tracing::info!("new question created with id: {id} in set: {set_id}");
        Ok(question_from(id, set_id, fields))
    }

    pub async fn question(&self, question_id: i64) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?"
        ))
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    /// Rewrites the text fields; the owning set never changes.
    pub async fn update_question(
        &self,
        question_id: i64,
        fields: &NewQuestion,
    ) -> Result<Option<Question>> {
        let set_id: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE questions
            SET question_text = ?, option_a = ?, option_b = ?, option_c = ?, option_d = ?,
                correct_option = ?
            WHERE id = ?
            RETURNING set_id
            "#,
        )
        .bind(&fields.question_text)
        .bind(&fields.option_a)
        .bind(&fields.option_b)
        .bind(&fields.option_c)
        .bind(&fields.option_d)
        .bind(fields.correct_option)
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(set_id.map(|set_id| {
            tracing::info!("question updated with id: {question_id}");
            question_from(question_id, set_id, fields)
        }))
    }

    /// Returns the owning set id of the deleted question, `None` when it did not exist.
    pub async fn delete_question(&self, question_id: i64) -> Result<Option<i64>> {
        let set_id: Option<i64> =
            sqlx::query_scalar("DELETE FROM questions WHERE id = ? RETURNING set_id")
                .bind(question_id)
                .fetch_optional(&self.pool)
                .await?;

        if set_id.is_some() {
            tracing::info!("question deleted with id: {question_id}");
        }
        Ok(set_id)
    }

    pub async fn questions_for_set(&self, set_id: i64) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE set_id = ? ORDER BY id"
        ))
        .bind(set_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    /// Questions of `set_id` whose id is in `ids`, ordered by id. Unknown ids and ids
    /// belonging to other sets are skipped; repeated ids are bound once.
    pub async fn questions_by_ids(&self, set_id: i64, ids: &[i64]) -> Result<Vec<Question>> {
        let ids: BTreeSet<i64> = ids.iter().copied().collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE set_id = "
        ));
        query.push_bind(set_id);
        query.push(" AND id IN (");
        let mut separated = query.separated(", ");
        for id in ids {
            separated.push_bind(id);
        }
        separated.push_unseparated(") ORDER BY id");

        let questions = query
            .build_query_as::<Question>()
            .fetch_all(&self.pool)
            .await?;

        Ok(questions)
    }
}

fn question_from(id: i64, set_id: i64, fields: &NewQuestion) -> Question {
    Question {
        id,
        set_id,
        question_text: fields.question_text.clone(),
        option_a: fields.option_a.clone(),
        option_b: fields.option_b.clone(),
        option_c: fields.option_c.clone(),
        option_d: fields.option_d.clone(),
        correct_option: fields.correct_option,
    }
}
