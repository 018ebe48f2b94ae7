pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::appointments::requests::{
    AppointmentQueryParams, CreateAppointmentRequest, UpdateAppointmentRequest,
};
use crate::storage::Storage;

pub struct AppointmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AppointmentService {
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

    // 获取预约列表
    pub async fn list_appointments(
        &self,
        query: AppointmentQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_appointments(self, query, request).await
    }

    // 创建预约
    pub async fn create_appointment(
        &self,
        appointment_data: CreateAppointmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_appointment(self, appointment_data, request).await
    }

    // 根据ID获取预约
    pub async fn get_appointment(
        &self,
        appointment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_appointment(self, appointment_id, request).await
    }

    // 更新预约
    pub async fn update_appointment(
        &self,
        appointment_id: i64,
        update_data: UpdateAppointmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_appointment(self, appointment_id, update_data, request).await
    }

    // 删除预约
    pub async fn delete_appointment(
        &self,
        appointment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_appointment(self, appointment_id, request).await
    }
}
