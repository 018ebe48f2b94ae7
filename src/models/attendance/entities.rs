use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课时时长（写入侧的封闭枚举）
//
// 读取侧（统计）对存量数据保持宽容：未知时长记 0 小时，见 hours_of()。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub enum ClassDuration {
    #[serde(rename = "30min")]
    Min30,
    #[serde(rename = "45min")]
    Min45,
    #[serde(rename = "1hr")]
    Hr1,
    #[serde(rename = "1.5hr")]
    Hr1_5,
    #[serde(rename = "1.75hr")]
    Hr1_75,
    #[serde(rename = "2hr")]
    Hr2,
    #[serde(rename = "2.5hr")]
    Hr2_5,
    #[serde(rename = "3hr")]
    Hr3,
}

impl ClassDuration {
    pub const ALL: [ClassDuration; 8] = [
        ClassDuration::Min30,
        ClassDuration::Min45,
        ClassDuration::Hr1,
        ClassDuration::Hr1_5,
        ClassDuration::Hr1_75,
        ClassDuration::Hr2,
        ClassDuration::Hr2_5,
        ClassDuration::Hr3,
    ];

    /// 时长对应的小时数
    pub fn hours(&self) -> f64 {
        match self {
            ClassDuration::Min30 => 0.5,
            ClassDuration::Min45 => 0.75,
            ClassDuration::Hr1 => 1.0,
            ClassDuration::Hr1_5 => 1.5,
            ClassDuration::Hr1_75 => 1.75,
            ClassDuration::Hr2 => 2.0,
            ClassDuration::Hr2_5 => 2.5,
            ClassDuration::Hr3 => 3.0,
        }
    }

    /// 宽容解析：未知的存量时长值贡献 0 小时，不报错
    pub fn hours_of(raw: &str) -> f64 {
        raw.parse::<ClassDuration>().map(|d| d.hours()).unwrap_or(0.0)
    }
}

impl<'de> Deserialize<'de> for ClassDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<ClassDuration>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的课时时长: '{s}'. 支持: 30min, 45min, 1hr, 1.5hr, 1.75hr, 2hr, 2.5hr, 3hr"
            ))
        })
    }
}

impl std::fmt::Display for ClassDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ClassDuration::Min30 => "30min",
            ClassDuration::Min45 => "45min",
            ClassDuration::Hr1 => "1hr",
            ClassDuration::Hr1_5 => "1.5hr",
            ClassDuration::Hr1_75 => "1.75hr",
            ClassDuration::Hr2 => "2hr",
            ClassDuration::Hr2_5 => "2.5hr",
            ClassDuration::Hr3 => "3hr",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for ClassDuration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "30min" => Ok(ClassDuration::Min30),
            "45min" => Ok(ClassDuration::Min45),
            "1hr" => Ok(ClassDuration::Hr1),
            "1.5hr" => Ok(ClassDuration::Hr1_5),
            "1.75hr" => Ok(ClassDuration::Hr1_75),
            "2hr" => Ok(ClassDuration::Hr2),
            "2.5hr" => Ok(ClassDuration::Hr2_5),
            "3hr" => Ok(ClassDuration::Hr3),
            _ => Err(format!("Invalid class duration: {s}")),
        }
    }
}

// 上课记录：某节课实际发生的事实，创建后不再修改
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct ClassAttendanceRecord {
    pub id: i64,
    pub teacher_id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    // 来源课程表条目（临时加课时为空）
    pub timetable_id: Option<i64>,
    pub class_date: chrono::NaiveDate,
    pub start_time: String,
    // 存储原始字符串，统计侧宽容解析
    pub duration: String,
    pub notes: Option<String>,
    pub marked_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_hours_table() {
        assert_eq!(ClassDuration::Min30.hours(), 0.5);
        assert_eq!(ClassDuration::Min45.hours(), 0.75);
        assert_eq!(ClassDuration::Hr1.hours(), 1.0);
        assert_eq!(ClassDuration::Hr1_5.hours(), 1.5);
        assert_eq!(ClassDuration::Hr1_75.hours(), 1.75);
        assert_eq!(ClassDuration::Hr2.hours(), 2.0);
        assert_eq!(ClassDuration::Hr2_5.hours(), 2.5);
        assert_eq!(ClassDuration::Hr3.hours(), 3.0);
    }

    #[test]
    fn test_hours_of_unknown_is_zero() {
        assert_eq!(ClassDuration::hours_of("4hr"), 0.0);
        assert_eq!(ClassDuration::hours_of(""), 0.0);
        assert_eq!(ClassDuration::hours_of("1.5hr"), 1.5);
    }

    #[test]
    fn test_duration_roundtrip() {
        for d in ClassDuration::ALL {
            assert_eq!(d.to_string().parse::<ClassDuration>(), Ok(d));
        }
    }
}
