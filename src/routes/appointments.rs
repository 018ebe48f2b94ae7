use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::appointments::requests::{
    AppointmentQueryParams, CreateAppointmentRequest, UpdateAppointmentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AppointmentService;
use crate::utils::SafeAppointmentIdI64;

// 懒加载的全局 AppointmentService 实例
static APPOINTMENT_SERVICE: Lazy<AppointmentService> = Lazy::new(AppointmentService::new_lazy);

// HTTP处理程序
pub async fn list_appointments(
    req: HttpRequest,
    query: web::Query<AppointmentQueryParams>,
) -> ActixResult<HttpResponse> {
    APPOINTMENT_SERVICE
        .list_appointments(query.into_inner(), &req)
        .await
}

pub async fn create_appointment(
    req: HttpRequest,
    appointment_data: web::Json<CreateAppointmentRequest>,
) -> ActixResult<HttpResponse> {
    APPOINTMENT_SERVICE
        .create_appointment(appointment_data.into_inner(), &req)
        .await
}

pub async fn get_appointment(
    req: HttpRequest,
    appointment_id: SafeAppointmentIdI64,
) -> ActixResult<HttpResponse> {
    APPOINTMENT_SERVICE
        .get_appointment(appointment_id.0, &req)
        .await
}

pub async fn update_appointment(
    req: HttpRequest,
    appointment_id: SafeAppointmentIdI64,
    update_data: web::Json<UpdateAppointmentRequest>,
) -> ActixResult<HttpResponse> {
    APPOINTMENT_SERVICE
        .update_appointment(appointment_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_appointment(
    req: HttpRequest,
    appointment_id: SafeAppointmentIdI64,
) -> ActixResult<HttpResponse> {
    APPOINTMENT_SERVICE
        .delete_appointment(appointment_id.0, &req)
        .await
}

// 配置路由
pub fn configure_appointment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/appointments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出预约 - 所有成员可访问（业务层按角色过滤）
                    .route(web::get().to(list_appointments))
                    // 创建预约 - 仅管理员
                    .route(
                        web::post()
                            .to(create_appointment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{appointment_id}")
                    // 获取预约详情 - 所有成员可访问
                    .route(web::get().to(get_appointment))
                    // 更新预约（状态流转/打卡/改期）- 仅管理员
                    .route(
                        web::put()
                            .to(update_appointment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    // 删除预约 - 仅管理员
                    .route(
                        web::delete()
                            .to(delete_appointment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
