//! 东方财富 A 股数据服务
//!
//! ## 数据来源
//! - push2.eastmoney.com：股票列表、行情快照
//! - push2his.eastmoney.com：历史K线
//!
//! ## 主要功能
//! - 交易所后缀识别与 secid 转换
//! - 行情字段代码到列名的翻译
//! - 列表、行情、K线响应的规整
//! - 最近交易日推算

mod client;
mod common;
mod error;
mod exchange;
mod fetcher;
mod fields;
mod kline;
mod normalize;
mod trade_date;

pub use client::{EmClient, Endpoints};
pub use common::{get_beijing_time, EM_KLINE_HOST, EM_LIST_HOST, EM_QUOTE_HOST, EM_UT};
pub use error::{EmError, Result};
pub use exchange::{classify, to_secid};
pub use fetcher::{HttpFetcher, ReqwestFetcher};
pub use fields::{describe, resolve_fields, FieldDescriptor, FieldProfile, ValueKind, FIELD_TABLE};
pub use kline::parse_kline;
pub use normalize::{normalize_candles, normalize_quotes, normalize_stock_list};
pub use trade_date::{get_trade_date, last_trading_date};
