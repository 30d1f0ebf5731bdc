// src/models/attendance.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub gym_id: Uuid,
    pub branch_id: Uuid,
    pub member_id: Uuid,
    pub checked_in_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckInPayload {
    pub member_id: Uuid,
    pub branch_id: Uuid,
}
