//! 东方财富行情字段字典
//!
//! 把接口返回的 `f2`、`f12` 这类字段代码翻译成可读的列名和值类型。
//! 字典在首次访问时建立索引，之后只读。

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

use super::common::{
    FIN_HQ_FIELDS, LONG_HQ_FIELDS, SHORT_CHG_HQ_FIELDS, SHORT_CLOSE_HQ_FIELDS,
    SHORT_OHLC_HQ_FIELDS,
};

/// 字段值类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Text,
}

/// 单个字段的描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// 接口字段代码，如 `f2`
    pub vendor_code: &'static str,
    /// 输出列名
    pub output_name: &'static str,
    /// 值类型
    pub kind: ValueKind,
    /// 是否为价格/百分比类数值
    pub price_like: bool,
}

const fn num(vendor_code: &'static str, output_name: &'static str, price_like: bool) -> FieldDescriptor {
    FieldDescriptor { vendor_code, output_name, kind: ValueKind::Number, price_like }
}

const fn text(vendor_code: &'static str, output_name: &'static str) -> FieldDescriptor {
    FieldDescriptor { vendor_code, output_name, kind: ValueKind::Text, price_like: false }
}

/// 全部已知字段
pub const FIELD_TABLE: &[FieldDescriptor] = &[
    text("-", "无名"),
    num("f1", "zoom", false),
    num("f2", "close", true),
    num("f3", "pct_chg", true),
    num("f4", "change", true),
    num("f5", "vol", false),
    num("f6", "amount", false),
    num("f7", "zhenfu", true),
    num("f8", "huanshoulv", true),
    num("f9", "pe", true),
    num("f10", "liangbi", true),
    num("f11", "chg5m", false),
    text("f12", "symbol"),
    text("f13", "market"),
    text("f14", "name"),
    num("f15", "high", true),
    num("f16", "low", true),
    num("f17", "open", true),
    num("f18", "pre_close", true),
    num("f20", "tmv", false),
    num("f21", "fmv", false),
    num("f22", "zhangsu", true),
    num("f23", "pbr", false),
    num("f24", "chg60d", true),
    num("f25", "chgnch", true),
    num("f31", "buy", true),
    num("f32", "sell", true),
    num("f33", "weibi", true),
    num("f41", "trqchg", true),
    num("f46", "npqchg", true),
    num("f62", "zhulijlr", false),
    text("f100", "industry"),
    num("f115", "pettm", true),
];

fn index() -> &'static HashMap<&'static str, &'static FieldDescriptor> {
    static INDEX: OnceLock<HashMap<&'static str, &'static FieldDescriptor>> = OnceLock::new();
    INDEX.get_or_init(|| FIELD_TABLE.iter().map(|d| (d.vendor_code, d)).collect())
}

/// 查询字段描述，未收录的字段返回 `None`
pub fn describe(vendor_code: &str) -> Option<&'static FieldDescriptor> {
    index().get(vendor_code).copied()
}

/// 行情请求的字段组合
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProfile {
    /// 涨跌幅
    ShortChange,
    /// 收盘价
    ShortClose,
    /// 开高低收
    ShortOhlc,
    /// 完整行情
    Long,
    /// 财务指标
    Financial,
}

impl FieldProfile {
    /// 逗号分隔的字段代码，原样作为 `fields` 参数发送
    pub fn codes(&self) -> &'static str {
        match self {
            FieldProfile::ShortChange => SHORT_CHG_HQ_FIELDS,
            FieldProfile::ShortClose => SHORT_CLOSE_HQ_FIELDS,
            FieldProfile::ShortOhlc => SHORT_OHLC_HQ_FIELDS,
            FieldProfile::Long => LONG_HQ_FIELDS,
            FieldProfile::Financial => FIN_HQ_FIELDS,
        }
    }
}

impl FromStr for FieldProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short_chg" | "short_change" => Ok(FieldProfile::ShortChange),
            "short_close" => Ok(FieldProfile::ShortClose),
            "short_ohlc" => Ok(FieldProfile::ShortOhlc),
            "long" => Ok(FieldProfile::Long),
            "fin" | "financial" => Ok(FieldProfile::Financial),
            other => Err(format!("未知的字段组合: {}", other)),
        }
    }
}

/// 解析 `fields` 参数：可以是组合名，也可以是原始的字段代码列表
pub fn resolve_fields(fields: &str) -> String {
    match fields.parse::<FieldProfile>() {
        Ok(profile) => profile.codes().to_string(),
        Err(_) => fields.trim().to_string(),
    }
}
