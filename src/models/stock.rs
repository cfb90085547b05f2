//! 股票数据模型
//! 
//! 定义 A 股列表、行情快照和 K 线的数据结构

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 股票列表条目
/// 
/// 对应列表快照接口中的一只股票
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StockListEntry {
    /// 股票代码（带交易所后缀，如 600000.SH）
    #[serde(rename = "ts_code")]
    pub code: String,
    /// 股票名称
    pub name: String,
    /// 最新价
    pub close: f64,
    /// 涨跌幅（百分比）
    pub pct_chg: f64,
    /// 成交量
    #[serde(rename = "vol")]
    pub volume: f64,
    /// 成交额
    pub amount: f64,
    /// 所属行业
    pub industry: String,
}

/// 行情字段值
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum QuoteValue {
    Number(f64),
    Text(String),
}

impl QuoteValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            QuoteValue::Number(v) => Some(*v),
            QuoteValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            QuoteValue::Text(s) => Some(s),
            QuoteValue::Number(_) => None,
        }
    }
}

/// 单只股票的行情：列名 -> 值
pub type QuoteRecord = BTreeMap<String, QuoteValue>;

/// 多只股票的行情：股票代码 -> 行情
pub type QuoteMap = BTreeMap<String, QuoteRecord>;

/// K线数据
/// 
/// 包含单个周期的 OHLCV 数据
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Candle {
    /// 日期
    pub date: String,
    /// 开盘价
    pub open: f64,
    /// 收盘价
    pub close: f64,
    /// 最高价
    pub high: f64,
    /// 最低价
    pub low: f64,
    /// 成交量
    #[serde(rename = "vol")]
    pub volume: f64,
    /// 成交额
    pub amount: f64,
}

/// 股票列表查询参数
#[derive(Debug, Deserialize)]
pub struct StockListQuery {
    /// 市场过滤条件（原样拼入 fs=m:<market>）
    pub market: String,
}

/// 行情查询参数
#[derive(Debug, Deserialize)]
pub struct StockHqQuery {
    /// 逗号分隔的股票代码，如 600000.SH,000001.SZ
    pub codes: String,
    /// 字段组合名或字段代码列表
    pub fields: Option<String>,
}

/// K线查询参数
#[derive(Debug, Deserialize)]
pub struct KlineQuery {
    /// K线周期（klt），如 101 日线
    pub period: Option<String>,
    /// 返回数量限制
    pub limit: Option<usize>,
}
