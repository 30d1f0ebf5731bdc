// src/db/finance_repo.rs

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::finance::{Payment, PaymentStatus},
};

#[derive(Clone)]
pub struct FinanceRepository {
    pool: PgPool,
}

impl FinanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_payment(
        &self,
        gym_id: Uuid,
        branch_id: Uuid,
        member_id: Option<Uuid>,
        amount: Decimal,
        method: Option<&str>,
        status: PaymentStatus,
    ) -> Result<Payment, AppError> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (gym_id, branch_id, member_id, amount, method, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, gym_id, branch_id, member_id, amount, method, status, created_at
            "#,
        )
        .bind(gym_id)
        .bind(branch_id)
        .bind(member_id)
        .bind(amount)
        .bind(method)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(payment)
    }

    pub async fn list_payments(&self, gym_id: Uuid) -> Result<Vec<Payment>, AppError> {
        let payments = sqlx::query_as::<_, Payment>(
            r#"
            SELECT id, gym_id, branch_id, member_id, amount, method, status, created_at
            FROM payments
            WHERE gym_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(gym_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }
}
