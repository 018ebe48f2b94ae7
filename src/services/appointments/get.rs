use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AppointmentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_appointment(
    service: &AppointmentService,
    appointment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_appointment_by_id(appointment_id).await {
        Ok(Some(appointment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            appointment,
            "Appointment retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AppointmentNotFound,
            "Appointment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get appointment: {e}"),
            )),
        ),
    }
}
