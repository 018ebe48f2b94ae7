use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AppointmentService;
use crate::models::{ApiResponse, ErrorCode, appointments::requests::CreateAppointmentRequest};

pub async fn create_appointment(
    service: &AppointmentService,
    appointment_data: CreateAppointmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 时间先后关系校验（存储访问之前完成）
    if appointment_data.end_time <= appointment_data.start_time {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Appointment end time must be after start time",
        )));
    }

    let storage = service.get_storage(request);

    // 确认参与者存在
    match storage.get_user_by_id(appointment_data.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Student not found",
            )));
        }
        Err(e) => return Ok(internal_error(e)),
    }
    match storage.get_user_by_id(appointment_data.teacher_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Teacher not found",
            )));
        }
        Err(e) => return Ok(internal_error(e)),
    }

    match storage.create_appointment(appointment_data).await {
        Ok(appointment) => {
            info!(
                "Appointment {} created for student {} with teacher {}",
                appointment.id, appointment.student_id, appointment.teacher_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(appointment, "预约创建成功")))
        }
        Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::AppointmentConflict,
            e.message(),
        ))),
        Err(e) => Ok(internal_error(e)),
    }
}

fn internal_error(e: crate::errors::TMSystemError) -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("Appointment operation failed: {e}"),
    ))
}
