use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Row};
use std::str::FromStr;
use uuid::Uuid;
use vocast_core::models::{UploadStatus, VoiceoverFilter, VoiceoverRecord};
use vocast_core::AppError;

use crate::store::VoiceoverStore;

/// Postgres-backed voiceover store
#[derive(Clone)]
pub struct PgVoiceoverStore {
    pool: PgPool,
}

impl PgVoiceoverStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn record_from_row(row: &sqlx::postgres::PgRow) -> Result<VoiceoverRecord, AppError> {
        let status: String = row.try_get("status")?;
        let status = UploadStatus::from_str(&status).map_err(AppError::Internal)?;

        Ok(VoiceoverRecord {
            id: row.try_get::<Uuid, _>("id")?,
            voiceover_name: row.try_get("voiceover_name")?,
            project_date: row.try_get::<NaiveDate, _>("project_date")?,
            date_uploaded: row.try_get::<DateTime<Utc>, _>("date_uploaded")?,
            audio_key: row.try_get("audio_key")?,
            thumbnail_key: row.try_get("thumbnail_key")?,
            status,
        })
    }
}

#[async_trait]
impl VoiceoverStore for PgVoiceoverStore {
    async fn put(&self, record: &VoiceoverRecord) -> Result<(), AppError> {
        // Dynamic queries, no offline prepare needed.
        sqlx::query(
            r#"
            INSERT INTO voiceovers (
                id, voiceover_name, project_date, date_uploaded,
                audio_key, thumbnail_key, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.id)
        .bind(&record.voiceover_name)
        .bind(record.project_date)
        .bind(record.date_uploaded)
        .bind(&record.audio_key)
        .bind(&record.thumbnail_key)
        .bind(record.status.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<VoiceoverRecord>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, voiceover_name, project_date, date_uploaded,
                   audio_key, thumbnail_key, status
            FROM voiceovers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::record_from_row).transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM voiceovers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn scan(&self, filter: &VoiceoverFilter) -> Result<Vec<VoiceoverRecord>, AppError> {
        // Full-scan-and-filter: every row is fetched and the predicate
        // evaluated in process, keeping filter semantics identical to
        // the memory store. No index support is assumed.
        let rows = sqlx::query(
            r#"
            SELECT id, voiceover_name, project_date, date_uploaded,
                   audio_key, thumbnail_key, status
            FROM voiceovers
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            let record = Self::record_from_row(row)?;
            if filter.matches(&record) {
                records.push(record);
            }
        }

        tracing::debug!(
            scanned = rows.len(),
            matched = records.len(),
            "Voiceover scan completed"
        );

        Ok(records)
    }
}
