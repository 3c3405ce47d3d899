//! Repository for the `mentors` table.

use mentorhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::mentor::{CreateMentor, Mentor, UpdateMentor};

const COLUMNS: &str = "id, name, email, password, department, created_at";

/// Provides CRUD operations for mentors.
pub struct MentorRepo;

impl MentorRepo {
    pub async fn create(pool: &PgPool, input: &CreateMentor) -> Result<Mentor, sqlx::Error> {
        let query = format!(
            "INSERT INTO mentors (name, email, password, department)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mentor>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password)
            .bind(&input.department)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Mentor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mentors WHERE id = $1");
        sqlx::query_as::<_, Mentor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Mentor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mentors WHERE email = $1");
        sqlx::query_as::<_, Mentor>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all mentors ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Mentor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mentors ORDER BY name, id");
        sqlx::query_as::<_, Mentor>(&query).fetch_all(pool).await
    }

    /// Update a mentor. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMentor,
    ) -> Result<Option<Mentor>, sqlx::Error> {
        let query = format!(
            "UPDATE mentors SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                department = COALESCE($4, department)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mentor>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.department)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was updated.
    pub async fn reset_password(
        pool: &PgPool,
        id: DbId,
        password: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE mentors SET password = $2 WHERE id = $1")
            .bind(id)
            .bind(password)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a mentor. Fails with a foreign-key violation while any project
    /// is still assigned to them; assigned students are detached.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM mentors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
