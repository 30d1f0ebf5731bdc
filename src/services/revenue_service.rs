// src/services/revenue_service.rs
//
// O pipeline de agregação mensal: 12 meses de receita e despesa por academia,
// somando a contribuição de cada filial. Prefere a função de agregação do
// banco; cai para a soma bruta de payments quando ela falha, demora demais ou
// não devolve linhas.

use std::time::Duration;

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgConnection;
use tokio::time::timeout;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::RevenueRepository,
    models::revenue::{BranchFigures, MonthBucket, MonthTotals, PnlRow, RevenueSeries, trailing_months},
};

const MONTHS: usize = 12;

// Uma filial lenta não pode segurar a resposta inteira: cada chamada ao banco
// é limitada e estouro de tempo conta como erro (ou seja, dispara o fallback).
const BACKEND_CALL_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct RevenueService {
    repo: RevenueRepository,
}

impl RevenueService {
    pub fn new(repo: RevenueRepository) -> Self {
        Self { repo }
    }

    /// Série dos últimos 12 meses, do mais antigo para o atual.
    /// Academia sem filiais devolve a série toda zerada, nunca erro.
    pub async fn monthly_series(
        &self,
        conn: &mut PgConnection,
        gym_id: Uuid,
    ) -> Result<RevenueSeries, AppError> {
        // Falha ao listar filiais é estrutural: aborta a requisição (500).
        let branches = self.repo.branch_ids(&mut *conn, gym_id).await?;
        let buckets = trailing_months(Utc::now(), MONTHS);

        let mut series = RevenueSeries {
            labels: Vec::with_capacity(MONTHS),
            income: Vec::with_capacity(MONTHS),
            expense: Vec::with_capacity(MONTHS),
        };

        // Laço sequencial mês-maior, filial-menor. A soma é comutativa, então
        // a ordem das filiais não importa; só a ordem dos meses na saída.
        for bucket in &buckets {
            let mut totals = MonthTotals::default();
            for &branch_id in &branches {
                totals.add(self.branch_figures(&mut *conn, branch_id, bucket).await);
            }
            let (income, expense) = totals.finalize();
            tracing::debug!(month = %bucket.key, income, expense, "mês fechado");

            series.labels.push(bucket.label.clone());
            series.income.push(income);
            series.expense.push(expense);
        }

        Ok(series)
    }

    // A decisão procedimento-ou-fallback para uma filial num mês. Falhas aqui
    // nunca abortam o lote: dado parcial vale mais que dashboard quebrado.
    async fn branch_figures(
        &self,
        conn: &mut PgConnection,
        branch_id: Uuid,
        bucket: &MonthBucket,
    ) -> BranchFigures {
        // .ok() normaliza o estouro de tempo para None: daqui pra baixo,
        // timeout e erro são a mesma coisa.
        let pnl = timeout(
            BACKEND_CALL_TIMEOUT,
            self.repo.branch_pnl(&mut *conn, branch_id, bucket.start, bucket.end),
        )
        .await
        .ok();

        if let Some(figures) = pnl_outcome(pnl, branch_id, &bucket.key) {
            // Procedimento respondeu com linhas: o fallback nem é consultado.
            return figures;
        }

        let fallback = timeout(
            BACKEND_CALL_TIMEOUT,
            self.repo.sum_payments(&mut *conn, branch_id, bucket.start, bucket.end),
        )
        .await
        .ok();

        fallback_outcome(fallback, branch_id, &bucket.key)
    }
}

// Interpreta a resposta da função de agregação (None = tempo estourado).
// Some(figures) encerra a filial no mês; None manda para o fallback.
fn pnl_outcome(
    outcome: Option<Result<Vec<PnlRow>, AppError>>,
    branch_id: Uuid,
    month_key: &str,
) -> Option<BranchFigures> {
    match outcome {
        Some(Ok(rows)) if !rows.is_empty() => Some(BranchFigures::from_procedure_rows(&rows)),
        Some(Ok(_)) => {
            tracing::debug!(%branch_id, month = %month_key, "função sem linhas, usando fallback");
            None
        }
        Some(Err(e)) => {
            tracing::warn!(%branch_id, month = %month_key, "função de agregação falhou: {e}");
            None
        }
        None => {
            tracing::warn!(%branch_id, month = %month_key, "função de agregação estourou o tempo");
            None
        }
    }
}

// Interpreta a resposta do fallback (None = tempo estourado). Qualquer
// falha vira contribuição zero, nunca erro.
fn fallback_outcome(
    outcome: Option<Result<Decimal, AppError>>,
    branch_id: Uuid,
    month_key: &str,
) -> BranchFigures {
    match outcome {
        Some(Ok(total)) => BranchFigures::from_fallback_sum(total),
        Some(Err(e)) => {
            tracing::warn!(%branch_id, month = %month_key, "fallback falhou, contribuição zero: {e}");
            BranchFigures::Fallback { income: 0.0 }
        }
        None => {
            tracing::warn!(%branch_id, month = %month_key, "fallback estourou o tempo, contribuição zero");
            BranchFigures::Fallback { income: 0.0 }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONTH: &str = "2025-01";

    fn branch() -> Uuid {
        Uuid::new_v4()
    }

    #[test]
    fn procedimento_com_linhas_dispensa_o_fallback() {
        let rows = vec![PnlRow {
            total_income: Some(Decimal::new(12004, 1)),
            total_expense: Some(Decimal::new(3006, 1)),
        }];
        // Some aqui significa que branch_figures retorna antes de sequer
        // montar a query de fallback.
        let figures = pnl_outcome(Some(Ok(rows)), branch(), MONTH);
        assert_eq!(
            figures,
            Some(BranchFigures::Procedure { income: 1200.4, expense: 300.6 })
        );
    }

    #[test]
    fn procedimento_sem_linhas_manda_para_o_fallback() {
        assert_eq!(pnl_outcome(Some(Ok(Vec::new())), branch(), MONTH), None);
    }

    #[test]
    fn erro_do_procedimento_manda_para_o_fallback() {
        let err = AppError::DatabaseError(sqlx::Error::PoolClosed);
        assert_eq!(pnl_outcome(Some(Err(err)), branch(), MONTH), None);
    }

    #[test]
    fn tempo_estourado_do_procedimento_manda_para_o_fallback() {
        assert_eq!(pnl_outcome(None, branch(), MONTH), None);
    }

    #[test]
    fn fallback_soma_os_pagamentos_brutos() {
        let figures = fallback_outcome(Some(Ok(Decimal::new(500, 0))), branch(), MONTH);
        assert_eq!(figures, BranchFigures::Fallback { income: 500.0 });
    }

    #[test]
    fn falha_do_fallback_vira_contribuicao_zero() {
        let err = AppError::DatabaseError(sqlx::Error::PoolClosed);
        let figures = fallback_outcome(Some(Err(err)), branch(), MONTH);
        assert_eq!(figures, BranchFigures::Fallback { income: 0.0 });

        let figures = fallback_outcome(None, branch(), MONTH);
        assert_eq!(figures, BranchFigures::Fallback { income: 0.0 });
    }
}
