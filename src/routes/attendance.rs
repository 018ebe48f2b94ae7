use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::{AttendanceQueryParams, MarkAttendanceRequest};
use crate::models::users::entities::UserRole;
use crate::services::AttendanceService;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

// HTTP处理程序
pub async fn mark_attendance(
    req: HttpRequest,
    mark_data: web::Json<MarkAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .mark_attendance(mark_data.into_inner(), &req)
        .await
}

pub async fn list_attendance(
    req: HttpRequest,
    query: web::Query<AttendanceQueryParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_attendance(query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出上课记录 - 所有成员可访问（业务层按角色过滤）
                    .route(web::get().to(list_attendance))
                    // 教师打卡 - 教师和管理员
                    .route(
                        web::post()
                            .to(mark_attendance)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
