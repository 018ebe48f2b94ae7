use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TimetableService;
use crate::models::{
    ApiResponse, ErrorCode,
    timetables::{
        requests::{BulkCreateTimetableRequest, TimetableSlotRequest},
        responses::BulkCreateTimetableResponse,
    },
};
use crate::utils::schedule::times_overlap;
use crate::utils::validate::validate_time_range;

/// 批量请求内部的两两冲突检查（同一学生的所有时段，以及同教师的时段）
///
/// 返回第一对冲突时段的描述；与已有数据的冲突由存储层在事务内检查。
pub(crate) fn find_batch_conflict(entries: &[TimetableSlotRequest]) -> Option<String> {
    for (i, a) in entries.iter().enumerate() {
        for b in entries.iter().skip(i + 1) {
            if a.day_of_week != b.day_of_week {
                continue;
            }
            // 同一学生的批量请求：学生侧天然共享；教师侧仅同教师时互斥
            if times_overlap(&a.start_time, &a.end_time, &b.start_time, &b.end_time) {
                return Some(format!(
                    "slot {}-{} on {} overlaps slot {}-{} in the same request",
                    a.start_time,
                    a.end_time,
                    a.day_of_week.display_name(),
                    b.start_time,
                    b.end_time
                ));
            }
        }
    }
    None
}

pub async fn bulk_create_entries(
    service: &TimetableService,
    bulk_data: BulkCreateTimetableRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if bulk_data.entries.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "No timetable entries provided",
        )));
    }

    // 逐条校验时间格式
    for slot in &bulk_data.entries {
        if let Err(msg) = validate_time_range(&slot.start_time, &slot.end_time) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
        }
    }

    // 请求内部两两冲突（全部针对同一学生，先于任何写入检测）
    if let Some(msg) = find_batch_conflict(&bulk_data.entries) {
        return Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::TimetableConflict, msg)));
    }

    let storage = service.get_storage(request);

    match storage.get_user_by_id(bulk_data.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Bulk create failed: {e}"),
                )),
            );
        }
    }

    match storage
        .bulk_create_timetable_entries(bulk_data.student_id, bulk_data.entries)
        .await
    {
        Ok(items) => {
            let created_count = items.len() as i64;
            info!(
                "Bulk created {} timetable entries for student {}",
                created_count, bulk_data.student_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                BulkCreateTimetableResponse {
                    items,
                    created_count,
                },
                format!("成功创建 {created_count} 条课程表条目"),
            )))
        }
        Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::TimetableConflict,
            e.message(),
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Bulk create failed: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::timetables::entities::DayOfWeek;

    fn slot(day: DayOfWeek, start: &str, end: &str) -> TimetableSlotRequest {
        TimetableSlotRequest {
            teacher_id: 1,
            subject_id: 1,
            day_of_week: day,
            start_time: start.to_string(),
            end_time: end.to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_batch_overlap_detected() {
        let entries = vec![
            slot(DayOfWeek::Monday, "09:00", "10:00"),
            slot(DayOfWeek::Monday, "09:30", "10:30"),
        ];
        let conflict = find_batch_conflict(&entries);
        assert!(conflict.is_some());
        assert!(conflict.unwrap().contains("overlaps"));
    }

    #[test]
    fn test_touching_slots_allowed() {
        // 端点相接不算冲突（半开区间语义）
        let entries = vec![
            slot(DayOfWeek::Tuesday, "09:00", "10:00"),
            slot(DayOfWeek::Tuesday, "10:00", "11:00"),
        ];
        assert!(find_batch_conflict(&entries).is_none());
    }

    #[test]
    fn test_different_days_never_conflict() {
        let entries = vec![
            slot(DayOfWeek::Monday, "09:00", "10:00"),
            slot(DayOfWeek::Tuesday, "09:00", "10:00"),
        ];
        assert!(find_batch_conflict(&entries).is_none());
    }
}
