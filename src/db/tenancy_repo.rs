// src/db/tenancy_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::tenancy::{Branch, Gym},
};

#[derive(Clone)]
pub struct TenancyRepository {
    pool: PgPool,
}

impl TenancyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Cria a academia. Chamado dentro da transação que também vincula o dono,
    // por isso recebe o executor de fora.
    pub async fn create_gym<'e, E>(
        &self,
        executor: E,
        name: &str,
        owner_id: Uuid,
    ) -> Result<Gym, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let gym = sqlx::query_as::<_, Gym>(
            r#"
            INSERT INTO gyms (name, owner_id)
            VALUES ($1, $2)
            RETURNING id, name, owner_id, created_at
            "#,
        )
        .bind(name)
        .bind(owner_id)
        .fetch_one(executor)
        .await?;

        Ok(gym)
    }

    pub async fn create_branch<'e, E>(
        &self,
        executor: E,
        gym_id: Uuid,
        name: &str,
        address: Option<&str>,
    ) -> Result<Branch, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let branch = sqlx::query_as::<_, Branch>(
            r#"
            INSERT INTO branches (gym_id, name, address)
            VALUES ($1, $2, $3)
            RETURNING id, gym_id, name, address, created_at
            "#,
        )
        .bind(gym_id)
        .bind(name)
        .bind(address)
        .fetch_one(executor)
        .await?;

        Ok(branch)
    }

    pub async fn list_branches(&self, gym_id: Uuid) -> Result<Vec<Branch>, AppError> {
        let branches = sqlx::query_as::<_, Branch>(
            r#"
            SELECT id, gym_id, name, address, created_at
            FROM branches
            WHERE gym_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(gym_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(branches)
    }
}
