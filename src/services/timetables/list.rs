use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TimetableService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{
    ApiResponse, ErrorCode,
    timetables::requests::{TimetableListQuery, TimetableQueryParams},
};

pub async fn list_entries(
    service: &TimetableService,
    query: TimetableQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut list_query = TimetableListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        student_id: query.student_id,
        teacher_id: query.teacher_id,
        day_of_week: query.day_of_week,
    };

    // 学生/教师只能查自己的课程表，管理员不受限
    if let Some(user) = RequireJWT::extract_user_claims(request) {
        match user.role {
            UserRole::Student => list_query.student_id = Some(user.id),
            UserRole::Teacher => list_query.teacher_id = Some(user.id),
            _ => {}
        }
    }

    match storage
        .list_timetable_entries_with_pagination(list_query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Timetable entries retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve timetable entries: {e}"),
            )),
        ),
    }
}
