use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 预约状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "../frontend/src/types/generated/appointment.ts")]
pub enum AppointmentStatus {
    Scheduled, // 已排期
    Completed, // 已完成
    Cancelled, // 已取消
    NoShow,    // 缺席
}

impl AppointmentStatus {
    pub const SCHEDULED: &'static str = "scheduled";
    pub const COMPLETED: &'static str = "completed";
    pub const CANCELLED: &'static str = "cancelled";
    pub const NO_SHOW: &'static str = "no-show";
}

impl<'de> Deserialize<'de> for AppointmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<AppointmentStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的预约状态: '{s}'. 支持: scheduled, completed, cancelled, no-show"
            ))
        })
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "{}", AppointmentStatus::SCHEDULED),
            AppointmentStatus::Completed => write!(f, "{}", AppointmentStatus::COMPLETED),
            AppointmentStatus::Cancelled => write!(f, "{}", AppointmentStatus::CANCELLED),
            AppointmentStatus::NoShow => write!(f, "{}", AppointmentStatus::NO_SHOW),
        }
    }
}

impl std::str::FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "no-show" => Ok(AppointmentStatus::NoShow),
            _ => Err(format!("Invalid appointment status: {s}")),
        }
    }
}

// 预约：一次性的师生课程，使用完整时间戳
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/appointment.ts")]
pub struct Appointment {
    pub id: i64,
    pub student_id: i64,
    pub teacher_id: i64,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    // 完成打卡时间（status=completed 时按约定填写）
    pub punch_in_time: Option<chrono::DateTime<chrono::Utc>>,
    pub deleted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
