// src/config.rs

use std::{env, time::Duration};

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{
    db::{
        AttendanceRepository, DashboardRepository, FinanceRepository, MemberRepository,
        RevenueRepository, TenancyRepository, UserRepository,
    },
    services::{
        auth::AuthService, dashboard_service::DashboardService,
        membership_service::MembershipService, revenue_service::RevenueService,
        tenancy_service::TenancyService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub tenancy_service: TenancyService,
    pub membership_service: MembershipService,
    pub dashboard_service: DashboardService,
    pub revenue_service: RevenueService,
}

impl AppState {
    // Carrega a configuração do ambiente e monta o gráfico de dependências.
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let tenancy_repo = TenancyRepository::new(db_pool.clone());

        let auth_service =
            AuthService::new(user_repo.clone(), jwt_secret.clone(), db_pool.clone());
        let tenancy_service =
            TenancyService::new(tenancy_repo, user_repo, db_pool.clone());
        let membership_service = MembershipService::new(
            MemberRepository::new(db_pool.clone()),
            FinanceRepository::new(db_pool.clone()),
            AttendanceRepository::new(db_pool.clone()),
        );
        let dashboard_service = DashboardService::new(DashboardRepository::new());
        let revenue_service = RevenueService::new(RevenueRepository::new());

        Ok(Self {
            db_pool,
            auth_service,
            tenancy_service,
            membership_service,
            dashboard_service,
            revenue_service,
        })
    }

    // Porta do listener HTTP (PORT, padrão 3000).
    pub fn listen_addr() -> String {
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        format!("0.0.0.0:{port}")
    }
}
