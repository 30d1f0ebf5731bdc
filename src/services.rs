pub mod auth;
pub mod dashboard_service;
pub mod membership_service;
pub mod revenue_service;
pub mod tenancy_service;
