use crate::common::error::AppError;
use crate::config::AppState;
use crate::middleware::auth::AuthenticatedUser;
use crate::middleware::tenancy::GymContext;

// ---
// Helper RLS: A "Chave" para o Banco de Dados
// ---

// Escopo de sessão (is_local = false), obrigatório: fora de transação,
// um set_config local evapora ao fim do próprio SELECT e a RLS voltaria
// a não enxergar tenant nenhum nas queries seguintes.
pub(crate) const SET_GYM_ID_SQL: &str = "SELECT set_config('app.gym_id', $1, false)";
pub(crate) const SET_USER_ID_SQL: &str = "SELECT set_config('app.user_id', $1, false)";

/// Adquire uma conexão da pool e define as variáveis RLS (a "chave").
/// Toda rota com escopo de academia passa por aqui antes de tocar no banco.
pub(crate) async fn get_rls_connection(
    app_state: &AppState,
    gym_ctx: &GymContext,
    user: &AuthenticatedUser,
) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, AppError> {
    // 1. Adquire conexão
    // O operador '?' converte automaticamente sqlx::Error -> AppError::DatabaseError
    let mut conn = app_state.db_pool.acquire().await?;

    // 2. Define Gym ID (o tenant)
    sqlx::query(SET_GYM_ID_SQL)
        .bind(gym_ctx.0.to_string())
        .execute(&mut *conn)
        .await?;

    // 3. Define User ID
    sqlx::query(SET_USER_ID_SQL)
        .bind(user.0.id.to_string())
        .execute(&mut *conn)
        .await?;

    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chave_rls_usa_escopo_de_sessao() {
        // set_config local (terceiro argumento true) some junto com o
        // statement quando não há transação aberta; a chave precisa
        // sobreviver até a query de verdade.
        assert!(SET_GYM_ID_SQL.ends_with(", false)"));
        assert!(SET_USER_ID_SQL.ends_with(", false)"));
    }
}
