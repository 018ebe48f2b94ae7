pub mod bulk_create;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::timetables::requests::{
    BulkCreateTimetableRequest, CreateTimetableEntryRequest, TimetableQueryParams,
    UpdateTimetableEntryRequest,
};
use crate::storage::Storage;

pub struct TimetableService {
    storage: Option<Arc<dyn Storage>>,
}

impl TimetableService {
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

    // 获取课程表列表
    pub async fn list_entries(
        &self,
        query: TimetableQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_entries(self, query, request).await
    }

    // 创建课程表条目
    pub async fn create_entry(
        &self,
        entry_data: CreateTimetableEntryRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_entry(self, entry_data, request).await
    }

    // 批量创建课程表条目
    pub async fn bulk_create_entries(
        &self,
        bulk_data: BulkCreateTimetableRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        bulk_create::bulk_create_entries(self, bulk_data, request).await
    }

    // 根据ID获取课程表条目
    pub async fn get_entry(
        &self,
        entry_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_entry(self, entry_id, request).await
    }

    // 更新课程表条目
    pub async fn update_entry(
        &self,
        entry_id: i64,
        update_data: UpdateTimetableEntryRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_entry(self, entry_id, update_data, request).await
    }

    // 删除课程表条目
    pub async fn delete_entry(
        &self,
        entry_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_entry(self, entry_id, request).await
    }
}
