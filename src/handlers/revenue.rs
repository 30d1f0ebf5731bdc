// src/handlers/revenue.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    common::{db_utils::get_rls_connection, error::AppError},
    config::AppState,
    middleware::{auth::AuthenticatedUser, tenancy::GymContext},
    models::revenue::RevenueSeries,
};

// GET /api/gym/revenue
#[utoipa::path(
    get,
    path = "/api/gym/revenue",
    tag = "Gym",
    responses(
        (status = 200, description = "Série de 12 meses de receita e despesa", body = RevenueSeries),
        (status = 401, description = "Não autorizado"),
        (status = 400, description = "Usuário sem academia vinculada"),
        (status = 500, description = "Erro inesperado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_revenue(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    gym: GymContext,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = get_rls_connection(&app_state, &gym, &user).await?;

    let series = app_state
        .revenue_service
        .monthly_series(&mut conn, gym.0)
        .await?;

    Ok((StatusCode::OK, Json(series)))
}
