// src/models/revenue.rs
//
// Tipos do pipeline de receita mensal. Tudo aqui é efêmero: os baldes de mês
// e a série agregada são montados a cada requisição e descartados na resposta.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use utoipa::ToSchema;

/// Janela de um mês-calendário `[start, end]`, com rótulo de exibição.
#[derive(Debug, Clone)]
pub struct MonthBucket {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Rótulo curto para o gráfico, ex. "Jan 2025".
    pub label: String,
    /// Chave ISO "YYYY-MM". Não entra na resposta; usada em logs de diagnóstico
    /// e reservada para dedup futuro.
    pub key: String,
}

/// Constrói os últimos `count` meses terminando no mês de `now`, do mais
/// antigo para o mais recente.
pub fn trailing_months(now: DateTime<Utc>, count: usize) -> Vec<MonthBucket> {
    let mut buckets = Vec::with_capacity(count);

    // Aritmética em "meses desde o ano zero" para atravessar viradas de ano.
    let current = now.year() * 12 + now.month0() as i32;

    for i in (0..count as i32).rev() {
        let total = current - i;
        let (year, month0) = (total.div_euclid(12), total.rem_euclid(12) as u32);

        let start = first_instant_of_month(year, month0 + 1);
        let next_start = if month0 == 11 {
            first_instant_of_month(year + 1, 1)
        } else {
            first_instant_of_month(year, month0 + 2)
        };
        // Último instante do mês na precisão do timestamptz (microssegundo).
        // Qualquer coisa maior deixaria um vão entre os baldes e um pagamento
        // carimbado no finzinho do mês não cairia em mês nenhum.
        let end = next_start - Duration::microseconds(1);

        buckets.push(MonthBucket {
            start,
            end,
            label: start.format("%b %Y").to_string(),
            key: start.format("%Y-%m").to_string(),
        });
    }

    buckets
}

fn first_instant_of_month(year: i32, month: u32) -> DateTime<Utc> {
    // month vem de aritmética mod 12, sempre em 1..=12.
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .expect("dia 1 de um mês válido sempre existe")
}

/// Linha retornada pela função de agregação `branch_profit_loss`.
#[derive(Debug, sqlx::FromRow)]
pub struct PnlRow {
    pub total_income: Option<Decimal>,
    pub total_expense: Option<Decimal>,
}

/// De onde vieram os números de uma filial num mês: da função de agregação do
/// banco, ou do fallback somando `payments` na mão. A escolha é feita uma vez
/// por filial/mês; a acumulação não distingue a origem.
///
/// Limitação conhecida (herdada do sistema original): o fallback só enxerga
/// receita. Despesas ficam invisíveis sempre que a função não está disponível.
#[derive(Debug, Clone, PartialEq)]
pub enum BranchFigures {
    Procedure { income: f64, expense: f64 },
    Fallback { income: f64 },
}

impl BranchFigures {
    /// Soma as linhas da função de agregação. Valores ausentes contam como zero.
    pub fn from_procedure_rows(rows: &[PnlRow]) -> Self {
        let mut income = 0.0;
        let mut expense = 0.0;
        for row in rows {
            income += row.total_income.as_ref().and_then(Decimal::to_f64).unwrap_or(0.0);
            expense += row.total_expense.as_ref().and_then(Decimal::to_f64).unwrap_or(0.0);
        }
        BranchFigures::Procedure { income, expense }
    }

    pub fn from_fallback_sum(amount: Decimal) -> Self {
        BranchFigures::Fallback {
            income: amount.to_f64().unwrap_or(0.0),
        }
    }
}

/// Acumulador de um mês. Soma em f64 e arredonda uma única vez no fechamento,
/// depois que todas as filiais contribuíram.
#[derive(Debug, Default)]
pub struct MonthTotals {
    income: f64,
    expense: f64,
}

impl MonthTotals {
    pub fn add(&mut self, figures: BranchFigures) {
        match figures {
            BranchFigures::Procedure { income, expense } => {
                self.income += income;
                self.expense += expense;
            }
            BranchFigures::Fallback { income } => {
                self.income += income;
            }
        }
    }

    /// Fecha o mês: arredonda para o inteiro mais próximo.
    pub fn finalize(self) -> (i64, i64) {
        (self.income.round() as i64, self.expense.round() as i64)
    }
}

/// A resposta de GET /api/gym/revenue: uma entrada por mês, do mais antigo
/// para o atual. Centavos nunca aparecem aqui.
#[derive(Debug, Serialize, ToSchema)]
pub struct RevenueSeries {
    pub labels: Vec<String>,
    pub income: Vec<i64>,
    pub expense: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 15, 30, 0).unwrap()
    }

    #[test]
    fn gera_doze_meses_em_ordem_cronologica() {
        let buckets = trailing_months(at(2025, 6, 20), 12);
        assert_eq!(buckets.len(), 12);
        assert_eq!(buckets[0].label, "Jul 2024");
        assert_eq!(buckets[11].label, "Jun 2025");
        for pair in buckets.windows(2) {
            assert!(pair[0].start < pair[1].start);
        }
    }

    #[test]
    fn ultimo_balde_e_o_mes_corrente() {
        let now = Utc::now();
        let buckets = trailing_months(now, 12);
        assert_eq!(buckets[11].label, now.format("%b %Y").to_string());
    }

    #[test]
    fn atravessa_virada_de_ano() {
        let buckets = trailing_months(at(2025, 1, 15), 12);
        assert_eq!(buckets[0].label, "Feb 2024");
        assert_eq!(buckets[0].key, "2024-02");
        assert_eq!(buckets[11].label, "Jan 2025");
        assert_eq!(buckets[11].key, "2025-01");
    }

    #[test]
    fn balde_cobre_o_mes_inteiro_sem_invadir_o_vizinho() {
        let buckets = trailing_months(at(2025, 3, 10), 2);
        let feb = &buckets[0];
        let mar = &buckets[1];

        assert_eq!(feb.start, Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap());
        // Fim do balde é o último instante do mês (granularidade de µs)...
        assert_eq!(feb.end + Duration::microseconds(1), mar.start);
        // ...e nunca encosta no início do mês seguinte.
        assert!(feb.end < mar.start);
        assert_eq!(mar.start, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn pagamento_no_ultimo_instante_do_mes_cai_no_balde_certo() {
        let buckets = trailing_months(at(2025, 3, 10), 2);
        let (feb, mar) = (&buckets[0], &buckets[1]);

        // timestamptz tem precisão de microssegundo: um pagamento carimbado
        // a 500µs da virada ainda é de fevereiro, e só de fevereiro.
        let late_payment = mar.start - Duration::microseconds(500);
        assert!(late_payment <= feb.end, "pagamento de fevereiro fora do balde de fevereiro");
        assert!(late_payment < mar.start);
    }

    #[test]
    fn linhas_da_funcao_somam_receita_e_despesa() {
        let rows = vec![PnlRow {
            total_income: Some(Decimal::new(12004, 1)),  // 1200.4
            total_expense: Some(Decimal::new(3006, 1)), // 300.6
        }];
        let mut totals = MonthTotals::default();
        totals.add(BranchFigures::from_procedure_rows(&rows));
        // Arredonda depois de somar, nunca por transação.
        assert_eq!(totals.finalize(), (1200, 301));
    }

    #[test]
    fn valores_ausentes_contam_como_zero() {
        let rows = vec![
            PnlRow { total_income: None, total_expense: None },
            PnlRow { total_income: Some(Decimal::new(500, 0)), total_expense: None },
        ];
        let mut totals = MonthTotals::default();
        totals.add(BranchFigures::from_procedure_rows(&rows));
        assert_eq!(totals.finalize(), (500, 0));
    }

    #[test]
    fn fallback_so_contribui_para_receita() {
        let mut totals = MonthTotals::default();
        totals.add(BranchFigures::from_fallback_sum(Decimal::new(500, 0)));
        totals.add(BranchFigures::from_fallback_sum(Decimal::new(500, 0)));
        assert_eq!(totals.finalize(), (1000, 0));
    }

    #[test]
    fn arredondamento_acontece_no_fechamento_do_mes() {
        // Três contribuições fracionárias: 0.3 + 0.3 + 0.5 = 1.1 -> 1.
        // Arredondando por contribuição daria 0 + 0 + 1 = 1 por acaso;
        // com 0.4 + 0.4 + 0.4 = 1.2 -> 1 a diferença aparece (0 se fosse antes).
        let mut totals = MonthTotals::default();
        for _ in 0..3 {
            totals.add(BranchFigures::from_fallback_sum(Decimal::new(4, 1)));
        }
        assert_eq!(totals.finalize(), (1, 0));
    }

    #[test]
    fn mes_sem_filiais_fecha_zerado() {
        let totals = MonthTotals::default();
        assert_eq!(totals.finalize(), (0, 0));
    }
}
