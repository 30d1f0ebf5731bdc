// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::member::Member;

// O resumo que alimenta os cards da página inicial.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_members: i64,
    pub active_members: i64,
    /// Receita do mês corrente (pagamentos com status PAID).
    pub monthly_revenue: Decimal,
    pub todays_attendance: i64,
    pub pending_payments: i64,

    // Só aparece com ?debug=1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<DashboardDebug>,
}

// Amostra bruta para diagnóstico. Uma falha aqui vira mensagem, não erro 500.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDebug {
    pub members_sample: Vec<Member>,
    pub members_error: Option<String>,
}
