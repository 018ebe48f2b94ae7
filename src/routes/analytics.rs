use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::analytics::requests::AnalyticsQueryParams;
use crate::models::users::entities::UserRole;
use crate::services::AnalyticsService;

// 懒加载的全局 AnalyticsService 实例
static ANALYTICS_SERVICE: Lazy<AnalyticsService> = Lazy::new(AnalyticsService::new_lazy);

// HTTP处理程序：统计查询，按 type 参数分发，细粒度权限在业务层
pub async fn get_statistics(
    req: HttpRequest,
    query: web::Query<AnalyticsQueryParams>,
) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE
        .get_statistics(query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_analytics_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/analytics")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::get()
                        .to(get_statistics)
                        .wrap(middlewares::RequireRole::new_any(UserRole::member_roles())),
                ),
            ),
    );
}
