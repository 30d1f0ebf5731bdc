// src/services/membership_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{AttendanceRepository, FinanceRepository, MemberRepository},
    models::{
        attendance::AttendanceRecord,
        finance::{Payment, PaymentStatus},
        member::{Member, Plan},
    },
};

// O dia a dia da academia: matrículas, planos, pagamentos e presença.
#[derive(Clone)]
pub struct MembershipService {
    member_repo: MemberRepository,
    finance_repo: FinanceRepository,
    attendance_repo: AttendanceRepository,
}

impl MembershipService {
    pub fn new(
        member_repo: MemberRepository,
        finance_repo: FinanceRepository,
        attendance_repo: AttendanceRepository,
    ) -> Self {
        Self { member_repo, finance_repo, attendance_repo }
    }

    pub async fn register_member(
        &self,
        gym_id: Uuid,
        branch_id: Uuid,
        plan_id: Option<Uuid>,
        name: &str,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Member, AppError> {
        self.member_repo
            .create_member(gym_id, branch_id, plan_id, name, email, phone)
            .await
    }

    pub async fn list_members(&self, gym_id: Uuid) -> Result<Vec<Member>, AppError> {
        self.member_repo.list_members(gym_id).await
    }

    pub async fn create_plan(
        &self,
        gym_id: Uuid,
        name: &str,
        price: Decimal,
        duration_days: i32,
    ) -> Result<Plan, AppError> {
        self.member_repo.create_plan(gym_id, name, price, duration_days).await
    }

    pub async fn list_plans(&self, gym_id: Uuid) -> Result<Vec<Plan>, AppError> {
        self.member_repo.list_plans(gym_id).await
    }

    pub async fn record_payment(
        &self,
        gym_id: Uuid,
        branch_id: Uuid,
        member_id: Option<Uuid>,
        amount: Decimal,
        method: Option<&str>,
        status: Option<PaymentStatus>,
    ) -> Result<Payment, AppError> {
        self.finance_repo
            .create_payment(
                gym_id,
                branch_id,
                member_id,
                amount,
                method,
                status.unwrap_or(PaymentStatus::Paid),
            )
            .await
    }

    pub async fn list_payments(&self, gym_id: Uuid) -> Result<Vec<Payment>, AppError> {
        self.finance_repo.list_payments(gym_id).await
    }

    pub async fn check_in(
        &self,
        gym_id: Uuid,
        branch_id: Uuid,
        member_id: Uuid,
    ) -> Result<AttendanceRecord, AppError> {
        self.attendance_repo.check_in(gym_id, branch_id, member_id).await
    }

    pub async fn attendance_today(&self, gym_id: Uuid) -> Result<Vec<AttendanceRecord>, AppError> {
        self.attendance_repo.list_today(gym_id).await
    }
}
