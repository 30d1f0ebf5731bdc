pub mod user_repo;
pub use user_repo::UserRepository;
pub mod tenancy_repo;
pub use tenancy_repo::TenancyRepository;
pub mod member_repo;
pub use member_repo::MemberRepository;
pub mod finance_repo;
pub use finance_repo::FinanceRepository;
pub mod attendance_repo;
pub use attendance_repo::AttendanceRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
pub mod revenue_repo;
pub use revenue_repo::RevenueRepository;
