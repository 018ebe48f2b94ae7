//! 对象缓存抽象层
//!
//! 通过插件注册机制解耦缓存实现，启动时按配置的 `cache.type` 实例化。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};
