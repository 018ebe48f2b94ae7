//! 路径参数安全提取器
//!
//! 将路径中的数字 ID 解析为 i64，解析失败时返回统一的 400 响应，
//! 避免在每个处理函数里重复校验。

use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorBadRequest};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! define_safe_id_extractor {
    ($(
        $name:ident($param:literal)
    ),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy)]
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                    let raw = req.match_info().query($param);
                    let parsed = raw.parse::<i64>().ok().filter(|id| *id > 0);
                    ready(match parsed {
                        Some(id) => Ok($name(id)),
                        None => Err(ErrorBadRequest(
                            serde_json::to_string(&ApiResponse::error_empty(
                                ErrorCode::BadRequest,
                                format!("Invalid {}: '{}'", $param, raw),
                            ))
                            .unwrap_or_default(),
                        )),
                    })
                }
            }
        )*
    };
}

define_safe_id_extractor! {
    SafeUserIdI64("user_id"),
    SafeSubjectIdI64("subject_id"),
    SafeTimetableIdI64("timetable_id"),
    SafeAppointmentIdI64("appointment_id"),
}
