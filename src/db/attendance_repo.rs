// src/db/attendance_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::attendance::AttendanceRecord};

#[derive(Clone)]
pub struct AttendanceRepository {
    pool: PgPool,
}

impl AttendanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn check_in(
        &self,
        gym_id: Uuid,
        branch_id: Uuid,
        member_id: Uuid,
    ) -> Result<AttendanceRecord, AppError> {
        let record = sqlx::query_as::<_, AttendanceRecord>(
            r#"
            INSERT INTO attendance (gym_id, branch_id, member_id)
            VALUES ($1, $2, $3)
            RETURNING id, gym_id, branch_id, member_id, checked_in_at
            "#,
        )
        .bind(gym_id)
        .bind(branch_id)
        .bind(member_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn list_today(&self, gym_id: Uuid) -> Result<Vec<AttendanceRecord>, AppError> {
        let records = sqlx::query_as::<_, AttendanceRecord>(
            r#"
            SELECT id, gym_id, branch_id, member_id, checked_in_at
            FROM attendance
            WHERE gym_id = $1
              AND checked_in_at::date = CURRENT_DATE
            ORDER BY checked_in_at DESC
            "#,
        )
        .bind(gym_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
