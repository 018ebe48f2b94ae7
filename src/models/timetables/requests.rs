use super::entities::DayOfWeek;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 课程表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub student_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub day_of_week: Option<DayOfWeek>,
}

// 创建课程表条目请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct CreateTimetableEntryRequest {
    pub student_id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub day_of_week: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
    pub notes: Option<String>,
}

// 批量创建的单个时段（student_id 由外层请求统一给出）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableSlotRequest {
    pub teacher_id: i64,
    pub subject_id: i64,
    pub day_of_week: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
    pub notes: Option<String>,
}

// 批量创建课程表请求（全部成功或全部失败）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct BulkCreateTimetableRequest {
    pub student_id: i64,
    pub entries: Vec<TimetableSlotRequest>,
}

// 更新课程表条目请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct UpdateTimetableEntryRequest {
    pub teacher_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub day_of_week: Option<DayOfWeek>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub notes: Option<String>,
    pub is_active: Option<bool>,
}

// 课程表列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub day_of_week: Option<DayOfWeek>,
}
