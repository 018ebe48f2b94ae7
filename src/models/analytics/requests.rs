use serde::Deserialize;
use ts_rs::TS;

// 统计类型
#[derive(Debug, Clone, Copy, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub enum AnalyticsType {
    Teacher,
    Student,
    Overall,
    TopTeachers,
    Missed,
}

impl<'de> Deserialize<'de> for AnalyticsType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "teacher" => Ok(AnalyticsType::Teacher),
            "student" => Ok(AnalyticsType::Student),
            "overall" => Ok(AnalyticsType::Overall),
            "top-teachers" => Ok(AnalyticsType::TopTeachers),
            "missed" => Ok(AnalyticsType::Missed),
            _ => Err(serde::de::Error::custom(format!(
                "无效的统计类型: '{s}'. 支持: teacher, student, overall, top-teachers, missed"
            ))),
        }
    }
}

// 统计查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct AnalyticsQueryParams {
    #[serde(rename = "type")]
    #[ts(rename = "type")]
    pub query_type: AnalyticsType,
    pub teacher_id: Option<i64>,
    pub student_id: Option<i64>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub limit: Option<i64>,
}
