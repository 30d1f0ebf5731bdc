// src/services/tenancy_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{TenancyRepository, UserRepository},
    models::tenancy::{Branch, Gym},
};

#[derive(Clone)]
pub struct TenancyService {
    tenancy_repo: TenancyRepository,
    user_repo: UserRepository,
    pool: PgPool,
}

impl TenancyService {
    pub fn new(tenancy_repo: TenancyRepository, user_repo: UserRepository, pool: PgPool) -> Self {
        Self { tenancy_repo, user_repo, pool }
    }

    // Operação transacional: criar a academia, vincular o dono e abrir a
    // primeira filial. Ou tudo, ou nada.
    pub async fn create_gym_and_assign_owner(
        &self,
        name: &str,
        owner_id: Uuid,
    ) -> Result<Gym, AppError> {
        let mut tx = self.pool.begin().await?;

        let gym = self.tenancy_repo.create_gym(&mut *tx, name, owner_id).await?;

        self.user_repo.assign_gym(&mut *tx, owner_id, gym.id).await?;

        // Toda academia nasce com uma filial principal
        self.tenancy_repo
            .create_branch(&mut *tx, gym.id, "Main Branch", None)
            .await?;

        tx.commit().await?;

        tracing::info!("🏋️ Academia '{}' criada para o usuário {owner_id}", gym.name);
        Ok(gym)
    }

    pub async fn create_branch(
        &self,
        gym_id: Uuid,
        name: &str,
        address: Option<&str>,
    ) -> Result<Branch, AppError> {
        self.tenancy_repo
            .create_branch(&self.pool, gym_id, name, address)
            .await
    }

    pub async fn list_branches(&self, gym_id: Uuid) -> Result<Vec<Branch>, AppError> {
        self.tenancy_repo.list_branches(gym_id).await
    }
}
