use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TimetableService;
use crate::models::{ApiResponse, ErrorCode, timetables::requests::CreateTimetableEntryRequest};
use crate::utils::validate::validate_time_range;

pub async fn create_entry(
    service: &TimetableService,
    entry_data: CreateTimetableEntryRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 时间格式与先后关系校验（存储访问之前完成）
    if let Err(msg) = validate_time_range(&entry_data.start_time, &entry_data.end_time) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    let storage = service.get_storage(request);

    // 确认参与者与科目存在
    match storage.get_user_by_id(entry_data.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Student not found",
            )));
        }
        Err(e) => return Ok(internal_error(e)),
    }
    match storage.get_user_by_id(entry_data.teacher_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Teacher not found",
            )));
        }
        Err(e) => return Ok(internal_error(e)),
    }
    match storage.get_subject_by_id(entry_data.subject_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "Subject not found",
            )));
        }
        Err(e) => return Ok(internal_error(e)),
    }

    match storage.create_timetable_entry(entry_data).await {
        Ok(entry) => {
            info!(
                "Timetable entry {} created for student {}",
                entry.id, entry.student_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(entry, "课程表条目创建成功")))
        }
        Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::TimetableConflict,
            e.message(),
        ))),
        Err(e) => Ok(internal_error(e)),
    }
}

fn internal_error(e: crate::errors::TMSystemError) -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("Timetable operation failed: {e}"),
    ))
}
