use crate::models::attendance::entities::ClassAttendanceRecord;
use serde::Serialize;
use std::collections::BTreeMap;
use ts_rs::TS;

// 按学生细分
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct StudentBreakdown {
    pub student_id: i64,
    pub student_name: String,
    pub classes: i64,
    pub hours: f64,
    pub subjects: Vec<String>,
}

// 按科目细分
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct SubjectBreakdown {
    pub subject_id: i64,
    pub subject_name: String,
    pub classes: i64,
    pub hours: f64,
}

// 按教师细分（学生统计用）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct TeacherBreakdown {
    pub teacher_id: i64,
    pub teacher_name: String,
    pub classes: i64,
    pub hours: f64,
}

// 月度趋势点，month 为 "YYYY-MM"，升序排列，无课的月份不出现
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct MonthlyTrendPoint {
    pub month: String,
    pub classes: i64,
    pub hours: f64,
}

// 遗漏课程：排期在过去某天但没有对应上课记录
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct MissedClass {
    pub date: chrono::NaiveDate,
    pub day_name: String,
    pub student_id: i64,
    pub student_name: String,
    pub subject_id: i64,
    pub subject_name: String,
    pub start_time: String,
    pub end_time: String,
}

// 教师详细统计
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct TeacherStatsResponse {
    pub teacher_id: i64,
    pub total_classes: i64,
    pub total_hours: f64,
    pub unique_students: i64,
    pub unique_subjects: i64,
    pub duration_breakdown: BTreeMap<String, i64>,
    pub student_breakdown: Vec<StudentBreakdown>,
    pub subject_breakdown: Vec<SubjectBreakdown>,
    pub missed_classes: Vec<MissedClass>,
    // 出勤率字符串，保留一位小数；无排课时为 "0"
    pub attendance_rate: String,
}

// 学生详细统计
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct StudentStatsResponse {
    pub student_id: i64,
    pub total_classes: i64,
    pub total_hours: f64,
    pub unique_teachers: i64,
    pub unique_subjects: i64,
    pub duration_breakdown: BTreeMap<String, i64>,
    pub teacher_breakdown: Vec<TeacherBreakdown>,
    pub subject_breakdown: Vec<SubjectBreakdown>,
    pub monthly_trend: Vec<MonthlyTrendPoint>,
    pub recent_records: Vec<ClassAttendanceRecord>,
}

// 全局统计
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct OverallStatsResponse {
    pub total_classes: i64,
    pub unique_teachers: i64,
    pub unique_students: i64,
    pub unique_subjects: i64,
}

// 教师排行条目
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct TopTeacher {
    pub teacher_id: i64,
    pub teacher_name: String,
    pub total_classes: i64,
    pub unique_students: i64,
}

// 教师排行响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct TopTeachersResponse {
    pub items: Vec<TopTeacher>,
}

// 遗漏课程响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct MissedClassesResponse {
    pub items: Vec<MissedClass>,
}
