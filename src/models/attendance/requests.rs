use super::entities::ClassDuration;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 教师打卡请求（teacher_id 取自登录身份）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct MarkAttendanceRequest {
    pub student_id: i64,
    pub subject_id: i64,
    pub timetable_id: Option<i64>,
    pub class_date: chrono::NaiveDate,
    pub start_time: String,
    pub duration: ClassDuration,
    pub notes: Option<String>,
}

// 上课记录查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub teacher_id: Option<i64>,
    pub student_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
}

// 上课记录列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub teacher_id: Option<i64>,
    pub student_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
}
