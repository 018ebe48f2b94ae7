use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AppointmentService;
use crate::models::{ApiResponse, ErrorCode, appointments::requests::UpdateAppointmentRequest};

pub async fn update_appointment(
    service: &AppointmentService,
    appointment_id: i64,
    update_data: UpdateAppointmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 两端都给出时校验先后关系；单端改期与已有值的合并校验在存储层事务内完成
    if let (Some(start), Some(end)) = (&update_data.start_time, &update_data.end_time) {
        if end <= start {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Appointment end time must be after start time",
            )));
        }
    }

    let storage = service.get_storage(request);

    match storage
        .update_appointment(appointment_id, update_data)
        .await
    {
        Ok(Some(appointment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            appointment,
            "Appointment updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AppointmentNotFound,
            "Appointment not found",
        ))),
        Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::AppointmentConflict,
            e.message(),
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update appointment: {e}"),
            )),
        ),
    }
}
