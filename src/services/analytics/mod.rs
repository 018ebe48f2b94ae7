pub mod compute;
pub mod missed;
pub mod stats;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::middlewares::RequireJWT;
use crate::models::analytics::requests::{AnalyticsQueryParams, AnalyticsType};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct AnalyticsService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnalyticsService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 统计查询入口，按 type 分发
    pub async fn get_statistics(
        &self,
        query: AnalyticsQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let user = match RequireJWT::extract_user_claims(request) {
            Some(user) => user,
            None => {
                return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::Unauthorized,
                    "Authentication required",
                )));
            }
        };
        let storage = self.get_storage(request);

        match query.query_type {
            AnalyticsType::Teacher => {
                // 教师只能查自己，管理员需显式指定教师
                let teacher_id = match resolve_subject_id(
                    &user.role,
                    user.id,
                    query.teacher_id,
                    UserRole::Teacher,
                    "teacher_id",
                ) {
                    Ok(id) => id,
                    Err(response) => return Ok(response),
                };
                match stats::teacher_stats(&storage, teacher_id, query.start_date, query.end_date)
                    .await
                {
                    Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                        response,
                        "Teacher statistics retrieved successfully",
                    ))),
                    Err(e) => Ok(internal_error(e)),
                }
            }
            AnalyticsType::Student => {
                let student_id = match resolve_subject_id(
                    &user.role,
                    user.id,
                    query.student_id,
                    UserRole::Student,
                    "student_id",
                ) {
                    Ok(id) => id,
                    Err(response) => return Ok(response),
                };
                match stats::student_stats(&storage, student_id, query.start_date, query.end_date)
                    .await
                {
                    Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                        response,
                        "Student statistics retrieved successfully",
                    ))),
                    Err(e) => Ok(internal_error(e)),
                }
            }
            AnalyticsType::Overall => {
                if !UserRole::admin_roles().contains(&&user.role) {
                    return Ok(forbidden());
                }
                match stats::overall_stats(&storage, query.start_date, query.end_date).await {
                    Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                        response,
                        "Overall statistics retrieved successfully",
                    ))),
                    Err(e) => Ok(internal_error(e)),
                }
            }
            AnalyticsType::TopTeachers => {
                if !UserRole::admin_roles().contains(&&user.role) {
                    return Ok(forbidden());
                }
                match stats::top_teachers(&storage, query.limit, query.start_date, query.end_date)
                    .await
                {
                    Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                        response,
                        "Top teachers retrieved successfully",
                    ))),
                    Err(e) => Ok(internal_error(e)),
                }
            }
            AnalyticsType::Missed => {
                let teacher_id = match resolve_subject_id(
                    &user.role,
                    user.id,
                    query.teacher_id,
                    UserRole::Teacher,
                    "teacher_id",
                ) {
                    Ok(id) => id,
                    Err(response) => return Ok(response),
                };
                // 扫描需要确定的日历范围
                let (start, end) = match (query.start_date, query.end_date) {
                    (Some(start), Some(end)) => (start, end),
                    _ => {
                        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::BadRequest,
                            "start_date and end_date are required for missed class queries",
                        )));
                    }
                };
                match stats::missed_classes(&storage, teacher_id, start, end).await {
                    Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                        response,
                        "Missed classes retrieved successfully",
                    ))),
                    Err(e) => Ok(internal_error(e)),
                }
            }
        }
    }
}

// 查谁的统计：管理员必须显式指定目标，教师/学生固定为本人
fn resolve_subject_id(
    role: &UserRole,
    current_user_id: i64,
    requested: Option<i64>,
    owner_role: UserRole,
    param_name: &str,
) -> Result<i64, HttpResponse> {
    if UserRole::admin_roles().contains(&role) {
        return requested.ok_or_else(|| {
            HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("{param_name} is required"),
            ))
        });
    }
    if *role == owner_role {
        return match requested {
            Some(id) if id != current_user_id => Err(forbidden()),
            _ => Ok(current_user_id),
        };
    }
    Err(forbidden())
}

fn forbidden() -> HttpResponse {
    HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::PermissionDenied,
        "Access denied.",
    ))
}

fn internal_error(e: crate::errors::TMSystemError) -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("Analytics query failed: {e}"),
    ))
}
