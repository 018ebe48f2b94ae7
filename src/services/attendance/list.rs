use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::requests::{AttendanceListQuery, AttendanceQueryParams},
};

pub async fn list_attendance(
    service: &AttendanceService,
    query: AttendanceQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut list_query = AttendanceListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        teacher_id: query.teacher_id,
        student_id: query.student_id,
        subject_id: query.subject_id,
        start_date: query.start_date,
        end_date: query.end_date,
    };

    // 教师只能查自己打的卡，学生只能查自己的上课记录，管理员不受限
    if let Some(user) = RequireJWT::extract_user_claims(request) {
        match user.role {
            UserRole::Teacher => list_query.teacher_id = Some(user.id),
            UserRole::Student => list_query.student_id = Some(user.id),
            _ => {}
        }
    }

    match storage.list_attendance_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Attendance records retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve attendance records: {e}"),
            )),
        ),
    }
}
