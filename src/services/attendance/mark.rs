use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, attendance::requests::MarkAttendanceRequest};
use crate::utils::validate::validate_time_hhmm;

pub async fn mark_attendance(
    service: &AttendanceService,
    mark_data: MarkAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 打卡记在当前登录教师名下
    let teacher = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    if let Err(msg) = validate_time_hhmm(&mark_data.start_time) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    let storage = service.get_storage(request);

    match storage.get_user_by_id(mark_data.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Student not found",
            )));
        }
        Err(e) => return Ok(internal_error(e)),
    }
    match storage.get_subject_by_id(mark_data.subject_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "Subject not found",
            )));
        }
        Err(e) => return Ok(internal_error(e)),
    }

    match storage.mark_attendance(teacher.id, mark_data).await {
        Ok(record) => {
            info!(
                "Attendance {} marked by teacher {} for student {} on {}",
                record.id, record.teacher_id, record.student_id, record.class_date
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(record, "打卡成功")))
        }
        Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::AttendanceAlreadyMarked,
            e.message(),
        ))),
        Err(e) => Ok(internal_error(e)),
    }
}

fn internal_error(e: crate::errors::TMSystemError) -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("Attendance operation failed: {e}"),
    ))
}
