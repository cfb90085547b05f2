//! 配置模块
//!
//! 支持从 JSON 文件加载系统配置，缺省字段使用默认值

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::services::eastmoney::{EM_KLINE_HOST, EM_LIST_HOST, EM_QUOTE_HOST, EM_UT};

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 工作线程数（0 表示使用 CPU 核心数）
    #[serde(default)]
    pub workers: usize,
}

/// 上游请求配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// 连接超时时间（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

/// 东方财富接口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EastmoneyConfig {
    /// 固定的 ut 参数
    #[serde(default = "default_ut")]
    pub ut: String,
    /// 股票列表接口主机
    #[serde(default = "default_list_host")]
    pub list_host: String,
    /// 行情接口主机
    #[serde(default = "default_quote_host")]
    pub quote_host: String,
    /// K线接口主机
    #[serde(default = "default_kline_host")]
    pub kline_host: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub eastmoney: EastmoneyConfig,
    #[serde(default)]
    pub log: LogConfig,
}

// 默认值函数
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_timeout() -> u64 { 30 }
fn default_connect_timeout() -> u64 { 10 }
fn default_ut() -> String { EM_UT.to_string() }
fn default_list_host() -> String { EM_LIST_HOST.to_string() }
fn default_quote_host() -> String { EM_QUOTE_HOST.to_string() }
fn default_kline_host() -> String { EM_KLINE_HOST.to_string() }
fn default_log_level() -> String { "info".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Default for EastmoneyConfig {
    fn default() -> Self {
        Self {
            ut: default_ut(),
            list_host: default_list_host(),
            quote_host: default_quote_host(),
            kline_host: default_kline_host(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 从 JSON 字符串解析配置
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: AppConfig = serde_json::from_str(content)?;
        Ok(config)
    }

    /// 加载配置，优先从文件，失败则使用默认值
    ///
    /// 日志系统此时尚未初始化，加载结果由调用方在初始化后输出
    pub fn load() -> (Self, String) {
        let config_paths = ["config.json", "config/config.json"];

        for path in config_paths {
            if Path::new(path).exists() {
                match Self::from_file(path) {
                    Ok(config) => return (config, format!("从 {} 加载配置成功", path)),
                    Err(e) => {
                        return (Self::default(), format!("加载配置文件 {} 失败: {}，使用默认配置", path, e))
                    }
                }
            }
        }

        (Self::default(), "使用默认配置".to_string())
    }

    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
