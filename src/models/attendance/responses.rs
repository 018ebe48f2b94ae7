use super::entities::ClassAttendanceRecord;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 上课记录列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListResponse {
    pub items: Vec<ClassAttendanceRecord>,
    pub pagination: PaginationInfo,
}
