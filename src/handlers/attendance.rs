// src/handlers/attendance.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::tenancy::GymContext,
    models::attendance::{AttendanceRecord, CheckInPayload},
};

// POST /api/attendance/check-in
#[utoipa::path(
    post,
    path = "/api/attendance/check-in",
    tag = "Attendance",
    request_body = CheckInPayload,
    responses(
        (status = 201, description = "Presença registrada", body = AttendanceRecord),
        (status = 400, description = "Usuário sem academia vinculada")
    ),
    security(("api_jwt" = []))
)]
pub async fn check_in(
    State(app_state): State<AppState>,
    gym: GymContext,
    Json(payload): Json<CheckInPayload>,
) -> Result<impl IntoResponse, AppError> {
    let record = app_state
        .membership_service
        .check_in(gym.0, payload.branch_id, payload.member_id)
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

// GET /api/attendance/today
#[utoipa::path(
    get,
    path = "/api/attendance/today",
    tag = "Attendance",
    responses(
        (status = 200, description = "Presenças de hoje", body = Vec<AttendanceRecord>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_today(
    State(app_state): State<AppState>,
    gym: GymContext,
) -> Result<impl IntoResponse, AppError> {
    let records = app_state.membership_service.attendance_today(gym.0).await?;
    Ok((StatusCode::OK, Json(records)))
}
