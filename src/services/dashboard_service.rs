// src/services/dashboard_service.rs

use sqlx::PgConnection;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::DashboardRepository,
    models::dashboard::{DashboardDebug, DashboardStats},
};

const DEBUG_SAMPLE_LIMIT: i64 = 5;

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(repo: DashboardRepository) -> Self {
        Self { repo }
    }

    pub async fn stats(
        &self,
        conn: &mut PgConnection,
        gym_id: Uuid,
        with_debug: bool,
    ) -> Result<DashboardStats, AppError> {
        let mut stats = self.repo.get_stats(&mut *conn, gym_id).await?;

        if with_debug {
            // Falha na amostra não derruba o dashboard: vira mensagem no debug.
            let debug = match self.repo.members_sample(&mut *conn, gym_id, DEBUG_SAMPLE_LIMIT).await
            {
                Ok(sample) => DashboardDebug { members_sample: sample, members_error: None },
                Err(e) => {
                    tracing::warn!("amostra de membros falhou no modo debug: {e}");
                    DashboardDebug { members_sample: Vec::new(), members_error: Some(e.to_string()) }
                }
            };
            stats.debug = Some(debug);
        }

        Ok(stats)
    }
}
