use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TimetableService;
use crate::models::{ApiResponse, ErrorCode, timetables::requests::UpdateTimetableEntryRequest};
use crate::utils::validate::{validate_time_hhmm, validate_time_range};

pub async fn update_entry(
    service: &TimetableService,
    entry_id: i64,
    update_data: UpdateTimetableEntryRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 两端都给出时校验先后关系，只给一端时校验格式，
    // 与已有值合并后的先后关系由存储层在事务内保证
    match (&update_data.start_time, &update_data.end_time) {
        (Some(start), Some(end)) => {
            if let Err(msg) = validate_time_range(start, end) {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
            }
        }
        (Some(time), None) | (None, Some(time)) => {
            if let Err(msg) = validate_time_hhmm(time) {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
            }
        }
        (None, None) => {}
    }

    let storage = service.get_storage(request);

    match storage.update_timetable_entry(entry_id, update_data).await {
        Ok(Some(entry)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            entry,
            "Timetable entry updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TimetableNotFound,
            "Timetable entry not found",
        ))),
        Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::TimetableConflict,
            e.message(),
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update timetable entry: {e}"),
            )),
        ),
    }
}
