//! 内存聚合：对批量取回的上课记录做分组统计。
//!
//! 所有分组都在应用内存中完成，SQL 侧只负责初始过滤。

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::models::analytics::responses::{
    MissedClass, MonthlyTrendPoint, OverallStatsResponse, StudentBreakdown, StudentStatsResponse,
    SubjectBreakdown, TeacherBreakdown, TeacherStatsResponse, TopTeacher, TopTeachersResponse,
};
use crate::models::attendance::entities::{ClassAttendanceRecord, ClassDuration};

const RECENT_RECORDS_LIMIT: usize = 10;

pub(crate) fn display_name(names: &HashMap<i64, String>, id: i64) -> String {
    names
        .get(&id)
        .cloned()
        .unwrap_or_else(|| format!("Unknown ({id})"))
}

/// 出勤率：attended / scheduled × 100，保留一位小数；无排课时返回 "0"
pub(crate) fn format_attendance_rate(attended: i64, scheduled: i64) -> String {
    if scheduled == 0 {
        "0".to_string()
    } else {
        format!("{:.1}", attended as f64 / scheduled as f64 * 100.0)
    }
}

fn duration_breakdown(records: &[ClassAttendanceRecord]) -> BTreeMap<String, i64> {
    let mut breakdown = BTreeMap::new();
    for record in records {
        *breakdown.entry(record.duration.clone()).or_insert(0) += 1;
    }
    breakdown
}

fn total_hours(records: &[ClassAttendanceRecord]) -> f64 {
    records
        .iter()
        .map(|r| ClassDuration::hours_of(&r.duration))
        .sum()
}

fn subject_breakdown(
    records: &[ClassAttendanceRecord],
    subject_names: &HashMap<i64, String>,
) -> Vec<SubjectBreakdown> {
    let mut order: Vec<i64> = Vec::new();
    let mut grouped: HashMap<i64, (i64, f64)> = HashMap::new();
    for record in records {
        let entry = grouped.entry(record.subject_id).or_insert_with(|| {
            order.push(record.subject_id);
            (0, 0.0)
        });
        entry.0 += 1;
        entry.1 += ClassDuration::hours_of(&record.duration);
    }
    order
        .into_iter()
        .map(|subject_id| {
            let (classes, hours) = grouped[&subject_id];
            SubjectBreakdown {
                subject_id,
                subject_name: display_name(subject_names, subject_id),
                classes,
                hours,
            }
        })
        .collect()
}

/// 教师详细统计
pub(crate) fn teacher_stats(
    teacher_id: i64,
    records: &[ClassAttendanceRecord],
    student_names: &HashMap<i64, String>,
    subject_names: &HashMap<i64, String>,
    weekly_scheduled: i64,
    missed_classes: Vec<MissedClass>,
) -> TeacherStatsResponse {
    let unique_students: HashSet<i64> = records.iter().map(|r| r.student_id).collect();
    let unique_subjects: HashSet<i64> = records.iter().map(|r| r.subject_id).collect();

    // 按学生细分，保持记录首次出现的顺序
    let mut student_order: Vec<i64> = Vec::new();
    let mut per_student: HashMap<i64, (i64, f64, Vec<String>)> = HashMap::new();
    for record in records {
        let entry = per_student.entry(record.student_id).or_insert_with(|| {
            student_order.push(record.student_id);
            (0, 0.0, Vec::new())
        });
        entry.0 += 1;
        entry.1 += ClassDuration::hours_of(&record.duration);
        let subject = display_name(subject_names, record.subject_id);
        if !entry.2.contains(&subject) {
            entry.2.push(subject);
        }
    }
    let student_breakdown = student_order
        .into_iter()
        .map(|student_id| {
            let (classes, hours, subjects) = per_student.remove(&student_id).unwrap_or_default();
            StudentBreakdown {
                student_id,
                student_name: display_name(student_names, student_id),
                classes,
                hours,
                subjects,
            }
        })
        .collect();

    TeacherStatsResponse {
        teacher_id,
        total_classes: records.len() as i64,
        total_hours: total_hours(records),
        unique_students: unique_students.len() as i64,
        unique_subjects: unique_subjects.len() as i64,
        duration_breakdown: duration_breakdown(records),
        student_breakdown,
        subject_breakdown: subject_breakdown(records, subject_names),
        missed_classes,
        attendance_rate: format_attendance_rate(records.len() as i64, weekly_scheduled),
    }
}

/// 学生详细统计（records 需按 class_date 升序传入）
pub(crate) fn student_stats(
    student_id: i64,
    records: &[ClassAttendanceRecord],
    teacher_names: &HashMap<i64, String>,
    subject_names: &HashMap<i64, String>,
) -> StudentStatsResponse {
    let unique_teachers: HashSet<i64> = records.iter().map(|r| r.teacher_id).collect();
    let unique_subjects: HashSet<i64> = records.iter().map(|r| r.subject_id).collect();

    let mut teacher_order: Vec<i64> = Vec::new();
    let mut per_teacher: HashMap<i64, (i64, f64)> = HashMap::new();
    for record in records {
        let entry = per_teacher.entry(record.teacher_id).or_insert_with(|| {
            teacher_order.push(record.teacher_id);
            (0, 0.0)
        });
        entry.0 += 1;
        entry.1 += ClassDuration::hours_of(&record.duration);
    }
    let teacher_breakdown = teacher_order
        .into_iter()
        .map(|teacher_id| {
            let (classes, hours) = per_teacher[&teacher_id];
            TeacherBreakdown {
                teacher_id,
                teacher_name: display_name(teacher_names, teacher_id),
                classes,
                hours,
            }
        })
        .collect();

    // 月度趋势："YYYY-MM" 键，BTreeMap 保证升序，无课的月份不出现
    let mut per_month: BTreeMap<String, (i64, f64)> = BTreeMap::new();
    for record in records {
        let month = record.class_date.format("%Y-%m").to_string();
        let entry = per_month.entry(month).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += ClassDuration::hours_of(&record.duration);
    }
    let monthly_trend = per_month
        .into_iter()
        .map(|(month, (classes, hours))| MonthlyTrendPoint {
            month,
            classes,
            hours,
        })
        .collect();

    // "最近" 取 class_date 降序的前 10 条
    let mut recent: Vec<ClassAttendanceRecord> = records.to_vec();
    recent.sort_by(|a, b| b.class_date.cmp(&a.class_date));
    recent.truncate(RECENT_RECORDS_LIMIT);

    StudentStatsResponse {
        student_id,
        total_classes: records.len() as i64,
        total_hours: total_hours(records),
        unique_teachers: unique_teachers.len() as i64,
        unique_subjects: unique_subjects.len() as i64,
        duration_breakdown: duration_breakdown(records),
        teacher_breakdown,
        subject_breakdown: subject_breakdown(records, subject_names),
        monthly_trend,
        recent_records: recent,
    }
}

/// 全局统计
pub(crate) fn overall_stats(records: &[ClassAttendanceRecord]) -> OverallStatsResponse {
    let teachers: HashSet<i64> = records.iter().map(|r| r.teacher_id).collect();
    let students: HashSet<i64> = records.iter().map(|r| r.student_id).collect();
    let subjects: HashSet<i64> = records.iter().map(|r| r.subject_id).collect();
    OverallStatsResponse {
        total_classes: records.len() as i64,
        unique_teachers: teachers.len() as i64,
        unique_students: students.len() as i64,
        unique_subjects: subjects.len() as i64,
    }
}

/// 教师排行：按总课数降序，平手时保持底层查询顺序（稳定排序）
pub(crate) fn top_teachers(
    records: &[ClassAttendanceRecord],
    teacher_names: &HashMap<i64, String>,
    limit: usize,
) -> TopTeachersResponse {
    let mut order: Vec<i64> = Vec::new();
    let mut grouped: HashMap<i64, (i64, HashSet<i64>)> = HashMap::new();
    for record in records {
        let entry = grouped.entry(record.teacher_id).or_insert_with(|| {
            order.push(record.teacher_id);
            (0, HashSet::new())
        });
        entry.0 += 1;
        entry.1.insert(record.student_id);
    }

    let mut items: Vec<TopTeacher> = order
        .into_iter()
        .map(|teacher_id| {
            let (total_classes, students) = &grouped[&teacher_id];
            TopTeacher {
                teacher_id,
                teacher_name: display_name(teacher_names, teacher_id),
                total_classes: *total_classes,
                unique_students: students.len() as i64,
            }
        })
        .collect();
    items.sort_by(|a, b| b.total_classes.cmp(&a.total_classes));
    items.truncate(limit);

    TopTeachersResponse { items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(
        teacher_id: i64,
        student_id: i64,
        subject_id: i64,
        class_date: &str,
        duration: &str,
    ) -> ClassAttendanceRecord {
        ClassAttendanceRecord {
            id: 0,
            teacher_id,
            student_id,
            subject_id,
            timetable_id: None,
            class_date: NaiveDate::parse_from_str(class_date, "%Y-%m-%d").unwrap(),
            start_time: "09:00".to_string(),
            duration: duration.to_string(),
            notes: None,
            marked_at: chrono::Utc::now(),
        }
    }

    fn names(pairs: &[(i64, &str)]) -> HashMap<i64, String> {
        pairs.iter().map(|(id, n)| (*id, n.to_string())).collect()
    }

    #[test]
    fn test_teacher_totals_and_duration_breakdown() {
        // 两节 1hr 加一节 30min：总 2.5 小时
        let records = vec![
            record(1, 10, 100, "2026-03-02", "1hr"),
            record(1, 10, 100, "2026-03-03", "1hr"),
            record(1, 11, 101, "2026-03-04", "30min"),
        ];
        let stats = teacher_stats(
            1,
            &records,
            &names(&[(10, "Alice"), (11, "Bob")]),
            &names(&[(100, "Math"), (101, "Physics")]),
            4,
            Vec::new(),
        );
        assert_eq!(stats.total_classes, 3);
        assert_eq!(stats.total_hours, 2.5);
        assert_eq!(stats.unique_students, 2);
        assert_eq!(stats.unique_subjects, 2);
        assert_eq!(stats.duration_breakdown.get("1hr"), Some(&2));
        assert_eq!(stats.duration_breakdown.get("30min"), Some(&1));
        assert_eq!(stats.attendance_rate, "75.0");
    }

    #[test]
    fn test_unknown_duration_contributes_zero_hours() {
        let records = vec![
            record(1, 10, 100, "2026-03-02", "1hr"),
            record(1, 10, 100, "2026-03-03", "4hr"),
        ];
        let stats = teacher_stats(1, &records, &names(&[]), &names(&[]), 0, Vec::new());
        assert_eq!(stats.total_classes, 2);
        assert_eq!(stats.total_hours, 1.0);
        assert_eq!(stats.duration_breakdown.get("4hr"), Some(&1));
    }

    #[test]
    fn test_attendance_rate_zero_when_nothing_scheduled() {
        assert_eq!(format_attendance_rate(5, 0), "0");
        assert_eq!(format_attendance_rate(0, 0), "0");
        assert_eq!(format_attendance_rate(1, 3), "33.3");
        assert_eq!(format_attendance_rate(3, 3), "100.0");
    }

    #[test]
    fn test_student_breakdown_distinct_subjects() {
        let records = vec![
            record(1, 10, 100, "2026-03-02", "1hr"),
            record(1, 10, 100, "2026-03-09", "1hr"),
            record(1, 10, 101, "2026-03-10", "1hr"),
        ];
        let stats = teacher_stats(
            1,
            &records,
            &names(&[(10, "Alice")]),
            &names(&[(100, "Math"), (101, "Physics")]),
            0,
            Vec::new(),
        );
        assert_eq!(stats.student_breakdown.len(), 1);
        let alice = &stats.student_breakdown[0];
        assert_eq!(alice.classes, 3);
        assert_eq!(alice.subjects, vec!["Math", "Physics"]);
    }

    #[test]
    fn test_monthly_trend_ascending_with_gaps_absent() {
        let records = vec![
            record(1, 10, 100, "2026-01-15", "1hr"),
            record(1, 10, 100, "2026-03-02", "30min"),
            record(1, 10, 100, "2026-01-20", "1hr"),
        ];
        let stats = student_stats(10, &records, &names(&[]), &names(&[]));
        let months: Vec<&str> = stats
            .monthly_trend
            .iter()
            .map(|p| p.month.as_str())
            .collect();
        assert_eq!(months, vec!["2026-01", "2026-03"]);
        assert_eq!(stats.monthly_trend[0].classes, 2);
        assert_eq!(stats.monthly_trend[0].hours, 2.0);
        assert_eq!(stats.monthly_trend[1].hours, 0.5);
    }

    #[test]
    fn test_recent_records_are_ten_newest() {
        let mut records = Vec::new();
        for day in 1..=15 {
            records.push(record(1, 10, 100, &format!("2026-03-{day:02}"), "1hr"));
        }
        let stats = student_stats(10, &records, &names(&[]), &names(&[]));
        assert_eq!(stats.recent_records.len(), 10);
        assert_eq!(
            stats.recent_records[0].class_date,
            NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
        );
        assert_eq!(
            stats.recent_records[9].class_date,
            NaiveDate::from_ymd_opt(2026, 3, 6).unwrap()
        );
    }

    #[test]
    fn test_top_teachers_ranking_and_limit() {
        let records = vec![
            record(2, 10, 100, "2026-03-02", "1hr"),
            record(1, 10, 100, "2026-03-02", "1hr"),
            record(1, 11, 100, "2026-03-03", "1hr"),
            record(3, 12, 100, "2026-03-02", "1hr"),
        ];
        let top = top_teachers(&records, &names(&[(1, "A"), (2, "B"), (3, "C")]), 2);
        assert_eq!(top.items.len(), 2);
        assert_eq!(top.items[0].teacher_id, 1);
        assert_eq!(top.items[0].total_classes, 2);
        assert_eq!(top.items[0].unique_students, 2);
        // 平手时保持底层顺序：2 在 3 之前出现
        assert_eq!(top.items[1].teacher_id, 2);
    }

    #[test]
    fn test_overall_stats_cardinalities() {
        let records = vec![
            record(1, 10, 100, "2026-03-02", "1hr"),
            record(1, 11, 100, "2026-03-02", "1hr"),
            record(2, 10, 101, "2026-03-02", "1hr"),
        ];
        let stats = overall_stats(&records);
        assert_eq!(stats.total_classes, 3);
        assert_eq!(stats.unique_teachers, 2);
        assert_eq!(stats.unique_students, 2);
        assert_eq!(stats.unique_subjects, 2);
    }
}
