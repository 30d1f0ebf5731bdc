// src/models/finance.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::Type, ToSchema, PartialEq)]
#[sqlx(type_name = "payment_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Overdue,
}

// Um pagamento recebido (a "transação" do caminho de fallback da receita).
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub gym_id: Uuid,
    pub branch_id: Uuid,
    pub member_id: Option<Uuid>,
    pub amount: Decimal,
    pub method: Option<String>,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePaymentPayload {
    pub branch_id: Uuid,
    pub member_id: Option<Uuid>,
    pub amount: Decimal,
    pub method: Option<String>,
    pub status: Option<PaymentStatus>,
}
