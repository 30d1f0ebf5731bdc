// src/handlers/finance.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::tenancy::GymContext,
    models::finance::{CreatePaymentPayload, Payment},
};

// POST /api/payments
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = "Finance",
    request_body = CreatePaymentPayload,
    responses(
        (status = 201, description = "Pagamento registrado", body = Payment),
        (status = 400, description = "Usuário sem academia vinculada")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_payment(
    State(app_state): State<AppState>,
    gym: GymContext,
    Json(payload): Json<CreatePaymentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let payment = app_state
        .membership_service
        .record_payment(
            gym.0,
            payload.branch_id,
            payload.member_id,
            payload.amount,
            payload.method.as_deref(),
            payload.status,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(payment)))
}

// GET /api/payments
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = "Finance",
    responses(
        (status = 200, description = "Pagamentos da academia", body = Vec<Payment>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_payments(
    State(app_state): State<AppState>,
    gym: GymContext,
) -> Result<impl IntoResponse, AppError> {
    let payments = app_state.membership_service.list_payments(gym.0).await?;
    Ok((StatusCode::OK, Json(payments)))
}
