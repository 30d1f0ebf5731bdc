// src/handlers/member.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::tenancy::GymContext,
    models::member::{CreateMemberPayload, CreatePlanPayload, Member, Plan},
};

// POST /api/members
#[utoipa::path(
    post,
    path = "/api/members",
    tag = "Members",
    request_body = CreateMemberPayload,
    responses(
        (status = 201, description = "Membro matriculado", body = Member),
        (status = 400, description = "Usuário sem academia vinculada")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_member(
    State(app_state): State<AppState>,
    gym: GymContext,
    Json(payload): Json<CreateMemberPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let member = app_state
        .membership_service
        .register_member(
            gym.0,
            payload.branch_id,
            payload.plan_id,
            &payload.name,
            payload.email.as_deref(),
            payload.phone.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(member)))
}

// GET /api/members
#[utoipa::path(
    get,
    path = "/api/members",
    tag = "Members",
    responses(
        (status = 200, description = "Membros da academia", body = Vec<Member>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_members(
    State(app_state): State<AppState>,
    gym: GymContext,
) -> Result<impl IntoResponse, AppError> {
    let members = app_state.membership_service.list_members(gym.0).await?;
    Ok((StatusCode::OK, Json(members)))
}

// POST /api/plans
#[utoipa::path(
    post,
    path = "/api/plans",
    tag = "Members",
    request_body = CreatePlanPayload,
    responses(
        (status = 201, description = "Plano criado", body = Plan)
    ),
    security(("api_jwt" = []))
)]
pub async fn create_plan(
    State(app_state): State<AppState>,
    gym: GymContext,
    Json(payload): Json<CreatePlanPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let plan = app_state
        .membership_service
        .create_plan(gym.0, &payload.name, payload.price, payload.duration_days)
        .await?;

    Ok((StatusCode::CREATED, Json(plan)))
}

// GET /api/plans
#[utoipa::path(
    get,
    path = "/api/plans",
    tag = "Members",
    responses(
        (status = 200, description = "Planos da academia", body = Vec<Plan>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_plans(
    State(app_state): State<AppState>,
    gym: GymContext,
) -> Result<impl IntoResponse, AppError> {
    let plans = app_state.membership_service.list_plans(gym.0).await?;
    Ok((StatusCode::OK, Json(plans)))
}
