// src/db/dashboard_repo.rs

use rust_decimal::Decimal;
use sqlx::{Acquire, Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{dashboard::DashboardStats, member::Member},
};

// Todas as consultas deste repositório rodam sobre a conexão RLS entregue
// pelo handler, por isso ele não guarda a pool.
#[derive(Clone, Default)]
pub struct DashboardRepository;

impl DashboardRepository {
    pub fn new() -> Self {
        Self
    }

    // Resumo geral: os contadores dos cards, num snapshot consistente.
    pub async fn get_stats<'e, E>(
        &self,
        executor: E,
        gym_id: Uuid,
    ) -> Result<DashboardStats, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        // Transação para um snapshot consistente dos contadores
        let mut tx = executor.begin().await?;

        let total_members = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM members WHERE gym_id = $1",
        )
        .bind(gym_id)
        .fetch_one(&mut *tx)
        .await?;

        let active_members = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM members WHERE gym_id = $1 AND status = 'ACTIVE'",
        )
        .bind(gym_id)
        .fetch_one(&mut *tx)
        .await?;

        // Receita do mês corrente (só o que já foi pago)
        let monthly_revenue = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(SUM(amount), 0)
            FROM payments
            WHERE gym_id = $1
              AND status = 'PAID'
              AND created_at >= date_trunc('month', now())
            "#,
        )
        .bind(gym_id)
        .fetch_one(&mut *tx)
        .await?;

        let todays_attendance = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM attendance
            WHERE gym_id = $1
              AND checked_in_at::date = CURRENT_DATE
            "#,
        )
        .bind(gym_id)
        .fetch_one(&mut *tx)
        .await?;

        let pending_payments = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM payments WHERE gym_id = $1 AND status = 'PENDING'",
        )
        .bind(gym_id)
        .fetch_one(&mut *tx)
        .await?;

        // Fecha a transação (leitura, mas commit é clean)
        tx.commit().await?;

        Ok(DashboardStats {
            total_members,
            active_members,
            monthly_revenue,
            todays_attendance,
            pending_payments,
            debug: None,
        })
    }

    // Amostra bruta de membros para o modo ?debug=1
    pub async fn members_sample<'e, E>(
        &self,
        executor: E,
        gym_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Member>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let members = sqlx::query_as::<_, Member>(
            r#"
            SELECT id, gym_id, branch_id, plan_id, name, email, phone, status, joined_at
            FROM members
            WHERE gym_id = $1
            ORDER BY joined_at DESC
            LIMIT $2
            "#,
        )
        .bind(gym_id)
        .bind(limit)
        .fetch_all(executor)
        .await?;

        Ok(members)
    }
}
