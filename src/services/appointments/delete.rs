use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AppointmentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_appointment(
    service: &AppointmentService,
    appointment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_appointment(appointment_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Appointment deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AppointmentNotFound,
            "Appointment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Appointment deletion failed: {e}"),
            )),
        ),
    }
}
