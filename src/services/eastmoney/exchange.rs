//! 交易所识别
//!
//! 代码首位规则：
//! - `6` 开头：上交所 `.SH`
//! - `8`、`4` 开头：北交所 `.BJ`
//! - 其余：深交所 `.SZ`

/// 给裸代码加上交易所后缀，如 `600000` -> `600000.SH`
pub fn classify(raw_code: &str) -> String {
    if raw_code.starts_with('6') {
        format!("{}.SH", raw_code)
    } else if raw_code.starts_with('8') || raw_code.starts_with('4') {
        format!("{}.BJ", raw_code)
    } else {
        format!("{}.SZ", raw_code)
    }
}

/// 交易所后缀与 secid 市场前缀的对应关系
const MARKET_PREFIXES: [(&str, &str); 3] = [(".SH", "1."), (".SZ", "0."), (".BJ", "2.")];

/// 把 `600000.SH` 转成接口使用的 secid `1.600000`
///
/// 后缀无法识别时原样返回代码，不加市场前缀。
pub fn to_secid(ts_code: &str) -> String {
    for (suffix, prefix) in MARKET_PREFIXES {
        if let Some(bare) = ts_code.strip_suffix(suffix) {
            return format!("{}{}", prefix, bare);
        }
    }
    log::warn!("无法识别的交易所后缀: {}，secid 不加市场前缀", ts_code);
    ts_code.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let test_cases = vec![
            ("600000", "600000.SH"),
            ("688981", "688981.SH"),
            ("000001", "000001.SZ"),
            ("300750", "300750.SZ"),
            ("430047", "430047.BJ"),
            ("830799", "830799.BJ"),
            ("", ".SZ"),
            ("abc", "abc.SZ"),
        ];

        for (input, expected) in &test_cases {
            let result = classify(input);
            println!("  {} -> {} (期望: {})", input, result, expected);
            assert_eq!(result, *expected);
        }
    }

    #[test]
    fn test_to_secid() {
        let test_cases = vec![
            ("600000.SH", "1.600000"),
            ("000001.SZ", "0.000001"),
            ("430047.BJ", "2.430047"),
        ];

        for (input, expected) in &test_cases {
            assert_eq!(to_secid(input), *expected);
        }
    }

    #[test]
    fn test_classify_then_secid() {
        for raw in ["600000", "000001", "830799", "399001"] {
            let secid = to_secid(&classify(raw));
            let (prefix, bare) = secid.split_once('.').unwrap();
            assert_eq!(bare, raw);
            assert!(["0", "1", "2"].contains(&prefix));
        }
    }

    #[test]
    fn test_unknown_suffix_passthrough() {
        assert_eq!(to_secid("600000.HK"), "600000.HK");
        assert_eq!(to_secid("600000"), "600000");
    }
}
