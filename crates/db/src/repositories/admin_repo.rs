//! Repository for the `admins` table.

use sqlx::PgPool;

use crate::models::admin::{Admin, CreateAdmin};

const COLUMNS: &str = "id, name, username, password, created_at";

pub struct AdminRepo;

impl AdminRepo {
    pub async fn create(pool: &PgPool, input: &CreateAdmin) -> Result<Admin, sqlx::Error> {
        let query = format!(
            "INSERT INTO admins (name, username, password)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Admin>(&query)
            .bind(&input.name)
            .bind(&input.username)
            .bind(&input.password)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Admin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins WHERE username = $1");
        sqlx::query_as::<_, Admin>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Admin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins ORDER BY id");
        sqlx::query_as::<_, Admin>(&query).fetch_all(pool).await
    }
}
