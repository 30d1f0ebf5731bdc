pub mod attendance;
pub mod auth;
pub mod dashboard;
pub mod finance;
pub mod member;
pub mod revenue;
pub mod tenancy;
