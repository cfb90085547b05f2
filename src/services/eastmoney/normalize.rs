//! 响应数据规整
//!
//! 先把响应体按固定结构解码（`data.diff` 或 `data.klines`），
//! 结构不符直接返回格式错误，不产生部分结果。

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::{EmError, Result};
use super::exchange::classify;
use super::fields::{describe, ValueKind};
use super::kline::parse_kline;
use crate::models::{Candle, QuoteMap, QuoteRecord, QuoteValue, StockListEntry};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct DiffData<T> {
    diff: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct KlineData {
    klines: Vec<String>,
}

/// 列表接口中的单只股票
#[derive(Debug, Deserialize)]
struct RawListItem {
    f12: String,
    f14: String,
    f2: f64,
    f3: f64,
    f5: f64,
    f6: f64,
    f100: String,
}

fn decode<T: DeserializeOwned>(body: &[u8], what: &str) -> Result<T> {
    let envelope: Envelope<T> = serde_json::from_slice(body)
        .map_err(|e| EmError::malformed(format!("{}结构不符: {}", what, e)))?;
    Ok(envelope.data)
}

/// 解析股票列表快照
pub fn normalize_stock_list(body: &[u8]) -> Result<Vec<StockListEntry>> {
    let data: DiffData<RawListItem> = decode(body, "股票列表")?;

    Ok(data
        .diff
        .into_iter()
        .map(|item| StockListEntry {
            code: classify(&item.f12),
            name: item.f14,
            close: item.f2,
            pct_chg: item.f3,
            volume: item.f5,
            amount: item.f6,
            industry: item.f100,
        })
        .collect())
}

/// 解析行情快照
///
/// 字典中没有的字段直接丢弃；字典中有但类型不符的字段视为格式错误。
pub fn normalize_quotes(body: &[u8], requested_fields: &str) -> Result<QuoteMap> {
    let data: DiffData<Map<String, Value>> = decode(body, "行情")?;

    let mut quotes = QuoteMap::new();
    for stock in data.diff {
        let raw_code = stock
            .get("f12")
            .and_then(Value::as_str)
            .ok_or_else(|| EmError::malformed("行情记录缺少字符串字段 f12"))?;
        let code = classify(raw_code);

        for requested in requested_fields.split(',').map(str::trim) {
            if !requested.is_empty() && !stock.contains_key(requested) {
                log::debug!("{} 未返回字段 {}", code, requested);
            }
        }

        let mut record = QuoteRecord::new();
        for (key, value) in &stock {
            if let Some(desc) = describe(key) {
                record.insert(desc.output_name.to_string(), coerce(key, desc.kind, value)?);
            }
        }
        quotes.insert(code, record);
    }

    Ok(quotes)
}

fn coerce(key: &str, kind: ValueKind, value: &Value) -> Result<QuoteValue> {
    let coerced = match kind {
        ValueKind::Number => value.as_f64().map(QuoteValue::Number),
        ValueKind::Text => value.as_str().map(|s| QuoteValue::Text(s.to_string())),
    };
    coerced.ok_or_else(|| {
        EmError::malformed(format!("字段 {} 类型错误: 期望 {:?}，实际 {}", key, kind, value))
    })
}

/// 解析 K 线序列，顺序与接口返回一致
pub fn normalize_candles(body: &[u8]) -> Result<Vec<Candle>> {
    let data: KlineData = decode(body, "K线")?;
    data.klines.iter().map(|line| parse_kline(line)).collect()
}
