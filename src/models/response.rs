//! 接口响应包装

use serde::{Deserialize, Serialize};

use crate::services::eastmoney::get_beijing_time;

/// 统一响应结构：`{success, data, message, timestamp}`
///
/// timestamp 为北京时间 RFC 3339 字符串
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: "Success".to_string(),
            timestamp: get_beijing_time(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message,
            timestamp: get_beijing_time(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_envelope() {
        let ok = ApiResponse::success(vec![1, 2, 3]);
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert!(ok.timestamp.ends_with("+08:00"));

        let err = ApiResponse::<()>::error("响应格式错误: 缺少 data".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
    }
}
