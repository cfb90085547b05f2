//! 最近交易日推算
//!
//! 简单的近似规则，不考虑法定节假日：
//! 1. 周六退 1 天，周日退 2 天；
//! 2. 当地时间 15:00 收盘前，当天数据未定稿，再退 1 天。

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Asia::Shanghai;

/// 根据给定时间推算最近一个已收盘的交易日，格式 `YYYYMMDD`
pub fn last_trading_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    let mut date = now.date_naive();
    match date.weekday() {
        Weekday::Sat => date = date - Duration::days(1),
        Weekday::Sun => date = date - Duration::days(2),
        _ => {}
    }

    if now.hour() < 15 {
        date = date - Duration::days(1);
    }

    date.format("%Y%m%d").to_string()
}

/// 按北京时间推算最近交易日
pub fn get_trade_date() -> String {
    last_trading_date(&Utc::now().with_timezone(&Shanghai))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<chrono_tz::Tz> {
        Shanghai.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_last_trading_date() {
        // 2024-01-09 为周二
        let test_cases = vec![
            (at(2024, 1, 9, 10), "20240108"),
            (at(2024, 1, 9, 16), "20240109"),
            (at(2024, 1, 9, 15), "20240109"),
            (at(2024, 1, 13, 16), "20240112"),
            (at(2024, 1, 13, 10), "20240111"),
            (at(2024, 1, 14, 16), "20240112"),
            (at(2024, 1, 14, 9), "20240111"),
            (at(2024, 1, 1, 9), "20231231"),
        ];

        for (now, expected) in &test_cases {
            let result = last_trading_date(now);
            println!("  {} -> {} (期望: {})", now, result, expected);
            assert_eq!(result, *expected);
        }
    }

    #[test]
    fn test_uses_local_hour() {
        // UTC 08:00 即北京时间 16:00
        let utc = Utc.with_ymd_and_hms(2024, 1, 9, 8, 0, 0).unwrap();
        assert_eq!(last_trading_date(&utc), "20240108");
        assert_eq!(last_trading_date(&utc.with_timezone(&Shanghai)), "20240109");
    }

    #[test]
    fn test_get_trade_date_format() {
        let date = get_trade_date();
        assert_eq!(date.len(), 8);
        assert!(date.chars().all(|c| c.is_ascii_digit()));
    }
}
