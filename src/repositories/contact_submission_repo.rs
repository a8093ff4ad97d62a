use chrono::Utc;
use sqlx::SqlitePool;

use crate::middleware::error_handling::Result;
use crate::models::{ContactSubmission, NewContactSubmission, SubmissionStatus, UpdateSubmissionStatus};

const SUBMISSION_COLUMNS: &str =
    "id, name, email, phone, service_type, message, created_at, updated_at, status, notes";

pub struct ContactSubmissionRepository {
    pool: SqlitePool,
}

impl ContactSubmissionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new submission with status `new` and both timestamps set to now.
    ///
    /// Runs in its own transaction; a constraint violation rolls it back and
    /// leaves previously committed rows untouched.
    pub async fn create(&self, submission: &NewContactSubmission) -> Result<ContactSubmission> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, ContactSubmission>(&format!(
            r#"
            INSERT INTO contact_submissions
                (name, email, phone, service_type, message, created_at, updated_at, status)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            SUBMISSION_COLUMNS
        ))
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.phone)
        .bind(&submission.service_type)
        .bind(&submission.message)
        .bind(now)
        .bind(now)
        .bind(SubmissionStatus::New)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ContactSubmission>> {
        let submission = sqlx::query_as::<_, ContactSubmission>(&format!(
            "SELECT {} FROM contact_submissions WHERE id = ?",
            SUBMISSION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(submission)
    }

    /// All submissions, most recent first.
    pub async fn list_recent(&self) -> Result<Vec<ContactSubmission>> {
        let submissions = sqlx::query_as::<_, ContactSubmission>(&format!(
            "SELECT {} FROM contact_submissions ORDER BY created_at DESC, id DESC",
            SUBMISSION_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(submissions)
    }

    /// Set status and internal notes, refreshing `updated_at`.
    /// Returns `None` when no submission has this id.
    pub async fn update_status(
        &self,
        id: i64,
        update: &UpdateSubmissionStatus,
    ) -> Result<Option<ContactSubmission>> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, ContactSubmission>(&format!(
            r#"
            UPDATE contact_submissions
            SET status = ?, notes = ?, updated_at = ?
            WHERE id = ?
            RETURNING {}
            "#,
            SUBMISSION_COLUMNS
        ))
        .bind(update.status)
        .bind(&update.notes)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(updated)
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
