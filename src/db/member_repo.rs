// src/db/member_repo.rs

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::member::{Member, Plan},
};

#[derive(Clone)]
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_member(
        &self,
        gym_id: Uuid,
        branch_id: Uuid,
        plan_id: Option<Uuid>,
        name: &str,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Member, AppError> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (gym_id, branch_id, plan_id, name, email, phone)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, gym_id, branch_id, plan_id, name, email, phone, status, joined_at
            "#,
        )
        .bind(gym_id)
        .bind(branch_id)
        .bind(plan_id)
        .bind(name)
        .bind(email)
        .bind(phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(member)
    }

    pub async fn list_members(&self, gym_id: Uuid) -> Result<Vec<Member>, AppError> {
        let members = sqlx::query_as::<_, Member>(
            r#"
            SELECT id, gym_id, branch_id, plan_id, name, email, phone, status, joined_at
            FROM members
            WHERE gym_id = $1
            ORDER BY joined_at DESC
            "#,
        )
        .bind(gym_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    pub async fn create_plan(
        &self,
        gym_id: Uuid,
        name: &str,
        price: Decimal,
        duration_days: i32,
    ) -> Result<Plan, AppError> {
        let plan = sqlx::query_as::<_, Plan>(
            r#"
            INSERT INTO plans (gym_id, name, price, duration_days)
            VALUES ($1, $2, $3, $4)
            RETURNING id, gym_id, name, price, duration_days, is_active, created_at
            "#,
        )
        .bind(gym_id)
        .bind(name)
        .bind(price)
        .bind(duration_days)
        .fetch_one(&self.pool)
        .await?;

        Ok(plan)
    }

    pub async fn list_plans(&self, gym_id: Uuid) -> Result<Vec<Plan>, AppError> {
        let plans = sqlx::query_as::<_, Plan>(
            r#"
            SELECT id, gym_id, name, price, duration_days, is_active, created_at
            FROM plans
            WHERE gym_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(gym_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(plans)
    }
}
