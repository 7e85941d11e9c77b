use chrono::Utc;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{NewReport, Report, ReportStatus};

/// Service for report persistence
pub struct ReportService {
    pool: PgPool,
}

impl ReportService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a validated report and return its store-assigned id.
    /// New reports always start out Pending.
    pub async fn create(&self, data: &NewReport) -> Result<i64> {
        let created_at = data.created_at.unwrap_or_else(Utc::now);

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO reports (image, latitude, longitude, note, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&data.image)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(&data.note)
        .bind(ReportStatus::Pending)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create report: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Created report: {} at ({}, {})",
            id,
            data.latitude,
            data.longitude
        );

        Ok(id)
    }

    /// List reports, newest first, optionally filtered by exact status
    /// value. An unknown status value matches nothing rather than failing;
    /// distance filtering is deliberately left to the triage view.
    pub async fn list(&self, status: Option<&str>) -> Result<Vec<Report>> {
        let reports = match status {
            Some(status) => {
                sqlx::query_as::<_, Report>(
                    r#"
                    SELECT id, image, latitude, longitude, note, status, created_at
                    FROM reports
                    WHERE status = $1
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(status)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Report>(
                    r#"
                    SELECT id, image, latitude, longitude, note, status, created_at
                    FROM reports
                    ORDER BY created_at DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| {
            tracing::error!("Failed to list reports: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(reports)
    }

    /// Set a report's status. Re-applying the current status is a no-op
    /// success; concurrent updates on the same id are last-write-wins.
    pub async fn update_status(&self, id: i64, status: ReportStatus) -> Result<()> {
        let result = sqlx::query("UPDATE reports SET status = $1 WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update report status: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Report not found".to_string()));
        }

        tracing::info!("Updated report {} to status: {}", id, status);

        Ok(())
    }
}
