// src/handlers/tenancy.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{auth::AuthenticatedUser, tenancy::GymContext},
    models::tenancy::{Branch, CreateBranchPayload, CreateGymPayload, Gym},
};

// POST /api/gyms
#[utoipa::path(
    post,
    path = "/api/gyms",
    tag = "Tenancy",
    request_body = CreateGymPayload,
    responses(
        (status = 201, description = "Academia criada e dono vinculado", body = Gym),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_gym(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateGymPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let gym = app_state
        .tenancy_service
        .create_gym_and_assign_owner(&payload.name, user.0.id)
        .await?;

    Ok((StatusCode::CREATED, Json(gym)))
}

// POST /api/gyms/branches
#[utoipa::path(
    post,
    path = "/api/gyms/branches",
    tag = "Tenancy",
    request_body = CreateBranchPayload,
    responses(
        (status = 201, description = "Filial criada", body = Branch),
        (status = 400, description = "Usuário sem academia vinculada")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_branch(
    State(app_state): State<AppState>,
    gym: GymContext,
    Json(payload): Json<CreateBranchPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let branch = app_state
        .tenancy_service
        .create_branch(gym.0, &payload.name, payload.address.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(branch)))
}

// GET /api/gyms/branches
#[utoipa::path(
    get,
    path = "/api/gyms/branches",
    tag = "Tenancy",
    responses(
        (status = 200, description = "Filiais da academia", body = Vec<Branch>),
        (status = 400, description = "Usuário sem academia vinculada")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_branches(
    State(app_state): State<AppState>,
    gym: GymContext,
) -> Result<impl IntoResponse, AppError> {
    let branches = app_state.tenancy_service.list_branches(gym.0).await?;
    Ok((StatusCode::OK, Json(branches)))
}
