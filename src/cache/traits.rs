use async_trait::async_trait;

/// 缓存查询结果
///
/// 区分“键存在但无值”与“键不存在”，以便实现方表达不同的缓存语义。
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    ExistsButNoValue,
    NotFound,
}

/// 对象缓存统一接口
///
/// 所有实现以字符串形式存取，调用方自行负责序列化。
#[async_trait]
pub trait ObjectCache: Send + Sync {
    /// 获取原始字符串值
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// 写入原始字符串值，ttl 单位为秒（0 表示使用实现方默认值）
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    /// 删除指定键
    async fn remove(&self, key: &str);

    /// 清空所有缓存项
    async fn invalidate_all(&self);
}

/// 声明并注册一个对象缓存插件
///
/// 在编译单元加载时 (ctor) 将构造函数注册到全局注册表中，
/// 启动流程按配置名取出并实例化。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:expr, $plugin:ty) => {
        ::paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_plugin_ $plugin:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(|| {
                        Box::pin(async {
                            let plugin = <$plugin>::new()
                                .map_err($crate::errors::TMSystemError::cache_connection)?;
                            Ok(Box::new(plugin) as Box<dyn $crate::cache::ObjectCache>)
                        })
                    }),
                );
            }
        }
    };
}
