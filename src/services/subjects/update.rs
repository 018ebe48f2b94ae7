use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode, subjects::requests::UpdateSubjectRequest};

pub async fn update_subject(
    service: &SubjectService,
    subject_id: i64,
    update_data: UpdateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref name) = update_data.name
        && name.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Subject name cannot be empty",
        )));
    }

    let storage = service.get_storage(request);

    match storage.update_subject(subject_id, update_data).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            subject,
            "Subject updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "Subject not found",
        ))),
        Err(e) => {
            let msg = format!("Subject update failed: {e}");
            if msg.contains("UNIQUE constraint failed") || msg.contains("Duplicate") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::SubjectAlreadyExists,
                    "Subject name already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
