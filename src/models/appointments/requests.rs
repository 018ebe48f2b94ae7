use super::entities::AppointmentStatus;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 预约查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/appointment.ts")]
pub struct AppointmentQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub student_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub status: Option<AppointmentStatus>,
}

// 创建预约请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/appointment.ts")]
pub struct CreateAppointmentRequest {
    pub student_id: i64,
    pub teacher_id: i64,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub notes: Option<String>,
}

// 更新预约请求（状态流转、打卡、改期）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/appointment.ts")]
pub struct UpdateAppointmentRequest {
    pub status: Option<AppointmentStatus>,
    pub punch_in_time: Option<chrono::DateTime<chrono::Utc>>,
    pub start_time: Option<chrono::DateTime<chrono::Utc>>,
    pub end_time: Option<chrono::DateTime<chrono::Utc>>,
    pub notes: Option<String>,
}

// 预约列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/appointment.ts")]
pub struct AppointmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub status: Option<AppointmentStatus>,
}
