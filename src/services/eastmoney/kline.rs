//! K线数据解析
//!
//! 单条记录格式：`日期,开盘,收盘,最高,最低,成交量,成交额[,...]`

use super::error::{EmError, Result};
use crate::models::Candle;

/// 至少需要的字段个数
const MIN_KLINE_FIELDS: usize = 7;

/// 解析一条 K 线记录
///
/// 数值字段解析失败时记为 0，不报错；字段不足 7 个时返回格式错误。
/// 第 7 个之后的字段（振幅、涨跌幅等）忽略。
pub fn parse_kline(line: &str) -> Result<Candle> {
    let items: Vec<&str> = line.split(',').collect();
    if items.len() < MIN_KLINE_FIELDS {
        return Err(EmError::malformed(format!(
            "K线字段不足: 需要 {} 个，实际 {} 个 ({})",
            MIN_KLINE_FIELDS,
            items.len(),
            line
        )));
    }

    Ok(Candle {
        date: items[0].to_string(),
        open: parse_float(items[1]),
        close: parse_float(items[2]),
        high: parse_float(items[3]),
        low: parse_float(items[4]),
        volume: parse_float(items[5]),
        amount: parse_float(items[6]),
    })
}

fn parse_float(s: &str) -> f64 {
    s.trim().parse::<f64>().unwrap_or(0.0)
}
