//! 东方财富接口错误类型

use thiserror::Error;

/// 数据获取过程中的错误
///
/// 只有两类：传输失败（网络 / HTTP 状态）与响应格式错误。
/// 两者都会中止整个调用，不返回部分结果。
#[derive(Debug, Error)]
pub enum EmError {
    /// 网络请求失败，原样透传 reqwest 的错误
    #[error("请求失败: {0}")]
    Transport(#[from] reqwest::Error),

    /// 服务端返回非 2xx 状态码
    #[error("HTTP 状态异常: {0}")]
    Status(u16),

    /// 响应结构与预期不符（缺少容器、字段类型错误、K线字段不足）
    #[error("响应格式错误: {0}")]
    MalformedResponse(String),
}

impl EmError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        EmError::MalformedResponse(msg.into())
    }

    /// 是否为传输层错误
    pub fn is_transport(&self) -> bool {
        matches!(self, EmError::Transport(_) | EmError::Status(_))
    }

    /// 是否为响应格式错误
    pub fn is_malformed(&self) -> bool {
        matches!(self, EmError::MalformedResponse(_))
    }
}

impl From<serde_json::Error> for EmError {
    fn from(e: serde_json::Error) -> Self {
        EmError::MalformedResponse(format!("JSON 解析失败: {}", e))
    }
}

pub type Result<T> = std::result::Result<T, EmError>;
