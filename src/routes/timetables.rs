use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::timetables::requests::{
    BulkCreateTimetableRequest, CreateTimetableEntryRequest, TimetableQueryParams,
    UpdateTimetableEntryRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::TimetableService;
use crate::utils::SafeTimetableIdI64;

// 懒加载的全局 TimetableService 实例
static TIMETABLE_SERVICE: Lazy<TimetableService> = Lazy::new(TimetableService::new_lazy);

// HTTP处理程序
pub async fn list_entries(
    req: HttpRequest,
    query: web::Query<TimetableQueryParams>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.list_entries(query.into_inner(), &req).await
}

pub async fn create_entry(
    req: HttpRequest,
    entry_data: web::Json<CreateTimetableEntryRequest>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE
        .create_entry(entry_data.into_inner(), &req)
        .await
}

pub async fn bulk_create_entries(
    req: HttpRequest,
    bulk_data: web::Json<BulkCreateTimetableRequest>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE
        .bulk_create_entries(bulk_data.into_inner(), &req)
        .await
}

pub async fn get_entry(
    req: HttpRequest,
    timetable_id: SafeTimetableIdI64,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.get_entry(timetable_id.0, &req).await
}

pub async fn update_entry(
    req: HttpRequest,
    timetable_id: SafeTimetableIdI64,
    update_data: web::Json<UpdateTimetableEntryRequest>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE
        .update_entry(timetable_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_entry(
    req: HttpRequest,
    timetable_id: SafeTimetableIdI64,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.delete_entry(timetable_id.0, &req).await
}

// 配置路由
pub fn configure_timetable_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/timetables")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出课程表 - 所有成员可访问（业务层按角色过滤）
                    .route(web::get().to(list_entries))
                    // 创建课程表条目 - 仅管理员
                    .route(
                        web::post()
                            .to(create_entry)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                // 批量创建 - 仅管理员
                web::resource("/bulk").route(
                    web::post()
                        .to(bulk_create_entries)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/{timetable_id}")
                    // 获取课程表条目 - 所有成员可访问
                    .route(web::get().to(get_entry))
                    // 更新课程表条目 - 仅管理员
                    .route(
                        web::put()
                            .to(update_entry)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    // 删除课程表条目 - 仅管理员
                    .route(
                        web::delete()
                            .to(delete_entry)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
