use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode, subjects::requests::CreateSubjectRequest};

pub async fn create_subject(
    service: &SubjectService,
    subject_data: CreateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if subject_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Subject name cannot be empty",
        )));
    }

    let storage = service.get_storage(request);

    // 先做一次友好检查，唯一索引兜底并发场景
    match storage.get_subject_by_name(subject_data.name.trim()).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::SubjectAlreadyExists,
                "Subject already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check subject: {e}"),
                )),
            );
        }
    }

    match storage.create_subject(subject_data).await {
        Ok(subject) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(subject, "科目创建成功")))
        }
        Err(e) => {
            let msg = format!("Subject creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") || msg.contains("Duplicate") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::SubjectAlreadyExists,
                    "Subject already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
