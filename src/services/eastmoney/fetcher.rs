//! HTTP 请求封装

use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, REFERER, USER_AGENT};
use reqwest::Client;

use super::common;
use super::error::{EmError, Result};

/// 发起 GET 请求并返回原始响应体
///
/// 超时、连接复用等策略由实现自行决定，调用方不做重试。
pub trait HttpFetcher: Send + Sync {
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// 基于 reqwest 的实现
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// 按超时配置创建客户端，附带浏览器请求头
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(common::USER_AGENT));
        headers.insert(REFERER, HeaderValue::from_static(common::REFERER));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("📡 请求 URL: {}", url);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(EmError::Status(response.status().as_u16()));
        }

        let bytes = response.bytes().await?;
        log::debug!("📥 响应 {} 字节", bytes.len());
        Ok(bytes.to_vec())
    }
}
