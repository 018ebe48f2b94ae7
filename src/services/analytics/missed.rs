//! 遗漏课程扫描：课程表排了课、日期已过却没有对应上课记录。

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

use crate::models::analytics::responses::MissedClass;
use crate::models::attendance::entities::ClassAttendanceRecord;
use crate::models::timetables::entities::{DayOfWeek, TimetableEntry};

/// 从 start 到 end（含两端）逐日扫描教师的生效课程表条目。
///
/// 某天某条目若没有同学生、同科目且 class_date 恰为该日的上课记录，
/// 且该日严格早于 today，则记为遗漏。今天和未来的课永远不算遗漏。
/// 故意写成朴素的 O(天数 × 条目数) 双重循环，便于核对语义。
pub(crate) fn find_missed_classes(
    timetables: &[TimetableEntry],
    records: &[ClassAttendanceRecord],
    student_names: &HashMap<i64, String>,
    subject_names: &HashMap<i64, String>,
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> Vec<MissedClass> {
    let mut missed = Vec::new();

    let mut day = start;
    while day <= end {
        let weekday = DayOfWeek::from_weekday(day.weekday());
        for entry in timetables.iter().filter(|e| e.day_of_week == weekday) {
            let marked = records.iter().any(|r| {
                r.student_id == entry.student_id
                    && r.subject_id == entry.subject_id
                    && r.class_date == day
            });
            if !marked && day < today {
                missed.push(MissedClass {
                    date: day,
                    day_name: weekday.display_name().to_string(),
                    student_id: entry.student_id,
                    student_name: super::compute::display_name(student_names, entry.student_id),
                    subject_id: entry.subject_id,
                    subject_name: super::compute::display_name(subject_names, entry.subject_id),
                    start_time: entry.start_time.clone(),
                    end_time: entry.end_time.clone(),
                });
            }
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    missed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn entry(student_id: i64, subject_id: i64, day_of_week: DayOfWeek) -> TimetableEntry {
        let now = chrono::Utc::now();
        TimetableEntry {
            id: 1,
            student_id,
            teacher_id: 1,
            subject_id,
            day_of_week,
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            notes: None,
            is_active: true,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn record(student_id: i64, subject_id: i64, class_date: &str) -> ClassAttendanceRecord {
        ClassAttendanceRecord {
            id: 0,
            teacher_id: 1,
            student_id,
            subject_id,
            timetable_id: Some(1),
            class_date: date(class_date),
            start_time: "09:00".to_string(),
            duration: "1hr".to_string(),
            notes: None,
            marked_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_unmarked_past_monday_is_missed() {
        // 2026-03-02 是周一，范围覆盖它且没有任何记录
        let timetables = vec![entry(10, 100, DayOfWeek::Monday)];
        let missed = find_missed_classes(
            &timetables,
            &[],
            &HashMap::new(),
            &HashMap::new(),
            date("2026-03-01"),
            date("2026-03-07"),
            date("2026-03-10"),
        );
        assert_eq!(missed.len(), 1);
        assert_eq!(missed[0].date, date("2026-03-02"));
        assert_eq!(missed[0].day_name, "Monday");
        assert_eq!(missed[0].start_time, "09:00");
    }

    #[test]
    fn test_marked_class_is_not_missed() {
        let timetables = vec![entry(10, 100, DayOfWeek::Monday)];
        let records = vec![record(10, 100, "2026-03-02")];
        let missed = find_missed_classes(
            &timetables,
            &records,
            &HashMap::new(),
            &HashMap::new(),
            date("2026-03-01"),
            date("2026-03-07"),
            date("2026-03-10"),
        );
        assert!(missed.is_empty());
    }

    #[test]
    fn test_record_on_other_date_does_not_cover() {
        // 记录在别的周一，精确日期不匹配仍算遗漏
        let timetables = vec![entry(10, 100, DayOfWeek::Monday)];
        let records = vec![record(10, 100, "2026-03-09")];
        let missed = find_missed_classes(
            &timetables,
            &records,
            &HashMap::new(),
            &HashMap::new(),
            date("2026-03-01"),
            date("2026-03-07"),
            date("2026-03-10"),
        );
        assert_eq!(missed.len(), 1);
        assert_eq!(missed[0].date, date("2026-03-02"));
    }

    #[test]
    fn test_today_and_future_never_missed() {
        // 范围覆盖 3/2、3/9、3/16 三个周一，today = 3/9
        let timetables = vec![entry(10, 100, DayOfWeek::Monday)];
        let missed = find_missed_classes(
            &timetables,
            &[],
            &HashMap::new(),
            &HashMap::new(),
            date("2026-03-01"),
            date("2026-03-20"),
            date("2026-03-09"),
        );
        assert_eq!(missed.len(), 1);
        assert_eq!(missed[0].date, date("2026-03-02"));
    }

    #[test]
    fn test_range_is_inclusive_of_both_ends() {
        // 范围恰好是一个过去的周一
        let timetables = vec![entry(10, 100, DayOfWeek::Monday)];
        let missed = find_missed_classes(
            &timetables,
            &[],
            &HashMap::new(),
            &HashMap::new(),
            date("2026-03-02"),
            date("2026-03-02"),
            date("2026-03-10"),
        );
        assert_eq!(missed.len(), 1);
    }
}
