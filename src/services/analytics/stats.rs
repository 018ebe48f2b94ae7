use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::Result;
use crate::models::analytics::responses::{
    MissedClass, MissedClassesResponse, OverallStatsResponse, StudentStatsResponse,
    TeacherStatsResponse, TopTeachersResponse,
};
use crate::storage::Storage;

use super::{compute, missed};

const DEFAULT_TOP_TEACHERS_LIMIT: i64 = 10;

async fn user_names(storage: &Arc<dyn Storage>, ids: Vec<i64>) -> Result<HashMap<i64, String>> {
    let users = storage.get_users_by_ids(&ids).await?;
    Ok(users
        .into_iter()
        .map(|(id, user)| (id, user.profile.profile_name))
        .collect())
}

async fn subject_names(storage: &Arc<dyn Storage>, ids: Vec<i64>) -> Result<HashMap<i64, String>> {
    let subjects = storage.get_subjects_by_ids(&ids).await?;
    Ok(subjects
        .into_iter()
        .map(|(id, subject)| (id, subject.name))
        .collect())
}

fn dedup(mut ids: Vec<i64>) -> Vec<i64> {
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// 教师详细统计：记录聚合 + 遗漏课程扫描（仅当给出日期范围时）
pub(crate) async fn teacher_stats(
    storage: &Arc<dyn Storage>,
    teacher_id: i64,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<TeacherStatsResponse> {
    let records = storage
        .list_attendance_in_range(Some(teacher_id), None, start_date, end_date)
        .await?;
    let timetables = storage.list_active_timetables_for_teacher(teacher_id).await?;

    let student_ids = dedup(
        records
            .iter()
            .map(|r| r.student_id)
            .chain(timetables.iter().map(|e| e.student_id))
            .collect(),
    );
    let subject_ids = dedup(
        records
            .iter()
            .map(|r| r.subject_id)
            .chain(timetables.iter().map(|e| e.subject_id))
            .collect(),
    );
    let students = user_names(storage, student_ids).await?;
    let subjects = subject_names(storage, subject_ids).await?;

    let missed_classes = match (start_date, end_date) {
        (Some(start), Some(end)) => missed::find_missed_classes(
            &timetables,
            &records,
            &students,
            &subjects,
            start,
            end,
            chrono::Utc::now().date_naive(),
        ),
        _ => Vec::new(),
    };

    Ok(compute::teacher_stats(
        teacher_id,
        &records,
        &students,
        &subjects,
        timetables.len() as i64,
        missed_classes,
    ))
}

/// 学生详细统计
pub(crate) async fn student_stats(
    storage: &Arc<dyn Storage>,
    student_id: i64,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<StudentStatsResponse> {
    let records = storage
        .list_attendance_in_range(None, Some(student_id), start_date, end_date)
        .await?;

    let teacher_ids = dedup(records.iter().map(|r| r.teacher_id).collect());
    let subject_ids = dedup(records.iter().map(|r| r.subject_id).collect());
    let teachers = user_names(storage, teacher_ids).await?;
    let subjects = subject_names(storage, subject_ids).await?;

    Ok(compute::student_stats(
        student_id,
        &records,
        &teachers,
        &subjects,
    ))
}

/// 全局统计
pub(crate) async fn overall_stats(
    storage: &Arc<dyn Storage>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<OverallStatsResponse> {
    let records = storage
        .list_attendance_in_range(None, None, start_date, end_date)
        .await?;
    Ok(compute::overall_stats(&records))
}

/// 教师排行
pub(crate) async fn top_teachers(
    storage: &Arc<dyn Storage>,
    limit: Option<i64>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<TopTeachersResponse> {
    let records = storage
        .list_attendance_in_range(None, None, start_date, end_date)
        .await?;
    let teacher_ids = dedup(records.iter().map(|r| r.teacher_id).collect());
    let teachers = user_names(storage, teacher_ids).await?;

    let limit = limit.unwrap_or(DEFAULT_TOP_TEACHERS_LIMIT).max(0) as usize;
    Ok(compute::top_teachers(&records, &teachers, limit))
}

/// 遗漏课程
pub(crate) async fn missed_classes(
    storage: &Arc<dyn Storage>,
    teacher_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<MissedClassesResponse> {
    let records = storage
        .list_attendance_in_range(Some(teacher_id), None, Some(start_date), Some(end_date))
        .await?;
    let timetables = storage.list_active_timetables_for_teacher(teacher_id).await?;

    let student_ids = dedup(timetables.iter().map(|e| e.student_id).collect());
    let subject_ids = dedup(timetables.iter().map(|e| e.subject_id).collect());
    let students = user_names(storage, student_ids).await?;
    let subjects = subject_names(storage, subject_ids).await?;

    let items: Vec<MissedClass> = missed::find_missed_classes(
        &timetables,
        &records,
        &students,
        &subjects,
        start_date,
        end_date,
        chrono::Utc::now().date_naive(),
    );
    Ok(MissedClassesResponse { items })
}
