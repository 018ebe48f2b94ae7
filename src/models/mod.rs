//! 数据模型定义
//!
//! 业务实体、请求与响应模型，按领域划分子模块。

pub mod analytics;
pub mod appointments;
pub mod attendance;
pub mod auth;
pub mod common;
pub mod subjects;
pub mod timetables;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

use serde::Serialize;
use ts_rs::TS;

// 业务错误码（HTTP 状态码之外的细分类别，供前端分支处理）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 1000,
    Unauthorized = 1001,
    AuthFailed = 1002,
    PermissionDenied = 1003,
    NotFound = 1004,
    InternalServerError = 1005,
    UserNotFound = 2001,
    UserAlreadyExists = 2002,
    SubjectNotFound = 3001,
    SubjectAlreadyExists = 3002,
    TimetableNotFound = 4001,
    TimetableConflict = 4002,
    AppointmentNotFound = 5001,
    AppointmentConflict = 5002,
    AttendanceAlreadyMarked = 6001,
}

/// 程序启动时间（用于系统状态接口与启动耗时统计）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
