// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Tenancy ---
        handlers::tenancy::create_gym,
        handlers::tenancy::create_branch,
        handlers::tenancy::list_branches,

        // --- Members ---
        handlers::member::create_member,
        handlers::member::list_members,
        handlers::member::create_plan,
        handlers::member::list_plans,

        // --- Finance ---
        handlers::finance::create_payment,
        handlers::finance::list_payments,

        // --- Attendance ---
        handlers::attendance::check_in,
        handlers::attendance::list_today,

        // --- Gym (dashboard e receita) ---
        handlers::dashboard::get_dashboard,
        handlers::revenue::get_revenue,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- Tenancy ---
            models::tenancy::Gym,
            models::tenancy::Branch,
            models::tenancy::CreateGymPayload,
            models::tenancy::CreateBranchPayload,

            // --- Members ---
            models::member::MemberStatus,
            models::member::Member,
            models::member::Plan,
            models::member::CreateMemberPayload,
            models::member::CreatePlanPayload,

            // --- Finance ---
            models::finance::PaymentStatus,
            models::finance::Payment,
            models::finance::CreatePaymentPayload,

            // --- Attendance ---
            models::attendance::AttendanceRecord,
            models::attendance::CheckInPayload,

            // --- Gym ---
            models::dashboard::DashboardStats,
            models::dashboard::DashboardDebug,
            models::revenue::RevenueSeries,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Users", description = "Dados do Usuário e Perfil"),
        (name = "Tenancy", description = "Gestão de Academias e Filiais"),
        (name = "Members", description = "Matrículas e Planos"),
        (name = "Finance", description = "Pagamentos"),
        (name = "Attendance", description = "Controle de Presença"),
        (name = "Gym", description = "Dashboard e Relatório de Receita")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
