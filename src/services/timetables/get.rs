use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TimetableService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_entry(
    service: &TimetableService,
    entry_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_timetable_entry_by_id(entry_id).await {
        Ok(Some(entry)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            entry,
            "Timetable entry retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TimetableNotFound,
            "Timetable entry not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get timetable entry: {e}"),
            )),
        ),
    }
}
