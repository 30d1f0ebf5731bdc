// src/models/member.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::Type, ToSchema, PartialEq)]
#[sqlx(type_name = "member_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum MemberStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Uuid,
    pub gym_id: Uuid,
    pub branch_id: Uuid,
    pub plan_id: Option<Uuid>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: MemberStatus,
    pub joined_at: DateTime<Utc>,
}

// Plano de matrícula (mensalidade, trimestral etc.)
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: Uuid,
    pub gym_id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub duration_days: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMemberPayload {
    #[validate(length(min = 1, message = "Member name is required"))]
    pub name: String,
    pub branch_id: Uuid,
    pub plan_id: Option<Uuid>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePlanPayload {
    #[validate(length(min = 1, message = "Plan name is required"))]
    pub name: String,
    pub price: Decimal,
    #[validate(range(min = 1, message = "Duration must be at least one day"))]
    pub duration_days: i32,
}
