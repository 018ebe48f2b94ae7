use super::entities::TimetableEntry;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 课程表列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableListResponse {
    pub items: Vec<TimetableEntry>,
    pub pagination: PaginationInfo,
}

// 批量创建响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct BulkCreateTimetableResponse {
    pub items: Vec<TimetableEntry>,
    pub created_count: i64,
}
