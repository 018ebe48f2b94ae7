pub mod list;
pub mod mark;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{AttendanceQueryParams, MarkAttendanceRequest};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    // 教师打卡（记一节课）
    pub async fn mark_attendance(
        &self,
        mark_data: MarkAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mark::mark_attendance(self, mark_data, request).await
    }

    // 获取上课记录列表
    pub async fn list_attendance(
        &self,
        query: AttendanceQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_attendance(self, query, request).await
    }
}
