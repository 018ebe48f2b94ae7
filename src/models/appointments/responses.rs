use super::entities::Appointment;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 预约列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/appointment.ts")]
pub struct AppointmentListResponse {
    pub items: Vec<Appointment>,
    pub pagination: PaginationInfo,
}
