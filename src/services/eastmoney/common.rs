//! 公共常量和辅助函数

use chrono::Utc;
use chrono_tz::Asia::Shanghai;

// ==================== 东方财富 API 常量 ====================

/// 固定的 ut 参数
pub const EM_UT: &str = "6d2ffaa6a585d612eda28417681d58fb";
/// 股票列表（快照）接口主机
pub const EM_LIST_HOST: &str = "http://80.push2.eastmoney.com";
/// 行情接口主机
pub const EM_QUOTE_HOST: &str = "http://push2.eastmoney.com";
/// 历史K线接口主机
pub const EM_KLINE_HOST: &str = "http://push2his.eastmoney.com";

pub const CLIST_PATH: &str = "/api/qt/clist/get";
pub const ULIST_PATH: &str = "/api/qt/ulist/get";
pub const KLINE_PATH: &str = "/api/qt/stock/kline/get";

/// K线接口 fields1
pub const KLINE_FIELDS1: &str = "f1,f2,f3,f4,f5,f6";
/// K线接口 fields2
pub const KLINE_FIELDS2: &str = "f51,f52,f53,f54,f55,f56,f57,f58,f59,f60,f61";

// ==================== 请求字段组合 ====================

pub const SHORT_CHG_HQ_FIELDS: &str = "f3,f12,f13";
pub const SHORT_CLOSE_HQ_FIELDS: &str = "f2,f3,f12,f13,f18";
pub const SHORT_OHLC_HQ_FIELDS: &str = "f1,f2,f3,f5,f12,f13,f14,f17,f15,f16,f17,f18";
pub const LONG_HQ_FIELDS: &str = "f1,f2,f3,f4,f5,f6,f7,f8,f9,f10,f11,f12,f13,f14,f15,f16,f17,f18,f20,f21,f23,f24,f25,f22,f31,f32,f33,f41,f46,f62,f100,f115";
/// 财务字段组合，股票列表接口固定使用
pub const FIN_HQ_FIELDS: &str = "f1,f9,f12,f13,f14,f20,f21,f41,f46,f100,f115";

/// 浏览器 User-Agent
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
/// Referer
pub const REFERER: &str = "https://quote.eastmoney.com/";

/// 获取北京时间字符串（ISO 8601 格式，带+08:00时区）
pub fn get_beijing_time() -> String {
    Utc::now().with_timezone(&Shanghai).to_rfc3339()
}
