// src/handlers/dashboard.rs

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::{db_utils::get_rls_connection, error::AppError},
    config::AppState,
    middleware::{auth::AuthenticatedUser, tenancy::GymContext},
    models::dashboard::DashboardStats,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct DashboardQuery {
    /// Com debug=1, anexa uma amostra bruta de membros para diagnóstico.
    pub debug: Option<String>,
}

// GET /api/gym/dashboard
#[utoipa::path(
    get,
    path = "/api/gym/dashboard",
    tag = "Gym",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Resumo do dashboard da academia", body = DashboardStats),
        (status = 401, description = "Não autorizado"),
        (status = 400, description = "Usuário sem academia vinculada")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_dashboard(
    State(app_state): State<AppState>,
    Query(query): Query<DashboardQuery>,
    user: AuthenticatedUser,
    gym: GymContext,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = get_rls_connection(&app_state, &gym, &user).await?;

    let with_debug = query.debug.as_deref() == Some("1");
    let stats = app_state
        .dashboard_service
        .stats(&mut conn, gym.0, with_debug)
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}
