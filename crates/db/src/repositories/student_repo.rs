//! Repository for the `students` table.

use mentorhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{
    CreateStudent, MentoredStudent, Student, StudentWithMentor, UpdateStudent,
};

const COLUMNS: &str = "id, name, prn, email, password, mentor_id, github_link, created_at";

const WITH_MENTOR_COLUMNS: &str = "s.id, s.name, s.prn, s.email, s.mentor_id, s.github_link, \
     s.created_at, m.name AS mentor_name";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (name, prn, email, password, mentor_id, github_link)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.name)
            .bind(&input.prn)
            .bind(&input.email)
            .bind(&input.password)
            .bind(input.mentor_id)
            .bind(&input.github_link)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Look up a student by login email. Case-sensitive, like the stored value.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE email = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_with_mentor(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StudentWithMentor>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_MENTOR_COLUMNS}
             FROM students s LEFT JOIN mentors m ON m.id = s.mentor_id
             WHERE s.id = $1"
        );
        sqlx::query_as::<_, StudentWithMentor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all students with their mentor's name, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<StudentWithMentor>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_MENTOR_COLUMNS}
             FROM students s LEFT JOIN mentors m ON m.id = s.mentor_id
             ORDER BY s.name, s.id"
        );
        sqlx::query_as::<_, StudentWithMentor>(&query)
            .fetch_all(pool)
            .await
    }

    /// Students assigned to a mentor, each with their most recently updated
    /// project (if any).
    pub async fn list_by_mentor(
        pool: &PgPool,
        mentor_id: DbId,
    ) -> Result<Vec<MentoredStudent>, sqlx::Error> {
        sqlx::query_as::<_, MentoredStudent>(
            "SELECT s.id, s.name, s.prn, s.email, s.github_link,
                    p.title AS project_title,
                    p.status AS project_status,
                    p.progress_percentage
             FROM students s
             LEFT JOIN LATERAL (
                 SELECT title, status, progress_percentage FROM projects
                 WHERE student_id = s.id
                 ORDER BY last_updated DESC, id DESC
                 LIMIT 1
             ) p ON TRUE
             WHERE s.mentor_id = $1
             ORDER BY s.name, s.id",
        )
        .bind(mentor_id)
        .fetch_all(pool)
        .await
    }

    /// Update a student. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                name = COALESCE($2, name),
                prn = COALESCE($3, prn),
                email = COALESCE($4, email),
                mentor_id = COALESCE($5, mentor_id),
                github_link = COALESCE($6, github_link)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.prn)
            .bind(&input.email)
            .bind(input.mentor_id)
            .bind(&input.github_link)
            .fetch_optional(pool)
            .await
    }

    /// Set the profile github link. Returns `true` if a row was updated.
    pub async fn update_github_link(
        pool: &PgPool,
        id: DbId,
        link: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE students SET github_link = $2 WHERE id = $1")
            .bind(id)
            .bind(link)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns `true` if a row was updated.
    pub async fn assign_mentor(
        pool: &PgPool,
        id: DbId,
        mentor_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE students SET mentor_id = $2 WHERE id = $1")
            .bind(id)
            .bind(mentor_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns `true` if a row was updated.
    pub async fn reset_password(
        pool: &PgPool,
        id: DbId,
        password: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE students SET password = $2 WHERE id = $1")
            .bind(id)
            .bind(password)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a student and, by cascade, their projects.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
