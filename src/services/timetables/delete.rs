use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TimetableService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_entry(
    service: &TimetableService,
    entry_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_timetable_entry(entry_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Timetable entry deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TimetableNotFound,
            "Timetable entry not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Timetable entry deletion failed: {e}"),
            )),
        ),
    }
}
