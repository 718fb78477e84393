//! bootstrap - 统一启动骨架
//!
//! 二进制入口复用的配置加载与 tracing 初始化

mod runtime;

pub use runtime::*;
