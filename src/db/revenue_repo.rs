// src/db/revenue_repo.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::revenue::PnlRow};

// Acesso a dados do pipeline de receita. Roda sempre sobre a conexão RLS
// do handler, por isso não guarda a pool.
#[derive(Clone, Default)]
pub struct RevenueRepository;

impl RevenueRepository {
    pub fn new() -> Self {
        Self
    }

    // Filiais da academia (sem ordem garantida; a ordem não importa aqui).
    pub async fn branch_ids<'e, E>(&self, executor: E, gym_id: Uuid) -> Result<Vec<Uuid>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let ids = sqlx::query_scalar::<_, Uuid>("SELECT id FROM branches WHERE gym_id = $1")
            .bind(gym_id)
            .fetch_all(executor)
            .await?;

        Ok(ids)
    }

    // Caminho preferencial: a função de agregação do banco.
    pub async fn branch_pnl<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PnlRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, PnlRow>(
            "SELECT total_income, total_expense FROM branch_profit_loss($1, $2, $3)",
        )
        .bind(branch_id)
        .bind(start)
        .bind(end)
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    // Fallback: soma bruta dos pagamentos da filial dentro da janela
    // (inclusiva nas duas pontas). Não enxerga despesas.
    pub async fn sum_payments<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Decimal, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let total = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(SUM(amount), 0)
            FROM payments
            WHERE branch_id = $1
              AND created_at BETWEEN $2 AND $3
            "#,
        )
        .bind(branch_id)
        .bind(start)
        .bind(end)
        .fetch_one(executor)
        .await?;

        Ok(total)
    }
}
