//! 东方财富 A 股数据客户端
//!
//! 获取股票列表快照、行情字段和历史K线，
//! 把 `f2`、`f12` 等字段代码翻译成命名的类型化数据，
//! 并把裸代码映射为 `<代码>.<交易所>` 形式。

pub mod config;   // 配置
pub mod handlers; // HTTP 请求处理器
pub mod models;   // 数据模型定义
pub mod services; // 业务逻辑服务

pub use services::eastmoney::{EmClient, EmError};
