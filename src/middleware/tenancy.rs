// src/middleware/tenancy.rs

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::{common::error::AppError, models::auth::User};

// O contexto de tenant: o gym_id resolvido a partir do metadado da sessão.
// É um valor explícito passado para os serviços; nenhuma camada abaixo do
// handler volta a ler a sessão.
#[derive(Debug, Clone, Copy)]
pub struct GymContext(pub Uuid);

impl<S> FromRequestParts<S> for GymContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // O auth_guard já rodou e pendurou o usuário na requisição.
        let user = parts
            .extensions
            .get::<User>()
            .ok_or(AppError::InvalidToken)?;

        // Sessão válida mas sem academia vinculada: 400, não 401.
        user.gym_id.map(GymContext).ok_or(AppError::MissingGymId)
    }
}
