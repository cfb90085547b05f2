//! 东方财富 A 股数据客户端
//!
//! 每个操作最多发起一次 GET 请求，无缓存、无重试。

use std::time::Duration;

use url::Url;

use super::common::{
    CLIST_PATH, EM_KLINE_HOST, EM_LIST_HOST, EM_QUOTE_HOST, EM_UT, FIN_HQ_FIELDS, KLINE_FIELDS1,
    KLINE_FIELDS2, KLINE_PATH, ULIST_PATH,
};
use super::error::{EmError, Result};
use super::exchange::to_secid;
use super::fetcher::{HttpFetcher, ReqwestFetcher};
use super::normalize::{normalize_candles, normalize_quotes, normalize_stock_list};
use super::trade_date;
use crate::config::{ApiConfig, EastmoneyConfig};
use crate::models::{Candle, QuoteMap, StockListEntry};

/// 接口地址与 ut 参数
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub ut: String,
    pub list_host: String,
    pub quote_host: String,
    pub kline_host: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            ut: EM_UT.to_string(),
            list_host: EM_LIST_HOST.to_string(),
            quote_host: EM_QUOTE_HOST.to_string(),
            kline_host: EM_KLINE_HOST.to_string(),
        }
    }
}

impl From<&EastmoneyConfig> for Endpoints {
    fn from(cfg: &EastmoneyConfig) -> Self {
        Self {
            ut: cfg.ut.clone(),
            list_host: cfg.list_host.clone(),
            quote_host: cfg.quote_host.clone(),
            kline_host: cfg.kline_host.clone(),
        }
    }
}

/// 东方财富数据客户端
pub struct EmClient<F = ReqwestFetcher> {
    fetcher: F,
    endpoints: Endpoints,
}

impl EmClient<ReqwestFetcher> {
    /// 按配置创建使用 reqwest 的客户端
    pub fn from_config(api: &ApiConfig, em: &EastmoneyConfig) -> Result<Self> {
        let fetcher = ReqwestFetcher::new(
            Duration::from_secs(api.timeout_secs),
            Duration::from_secs(api.connect_timeout_secs),
        )?;
        Ok(Self::new(fetcher, Endpoints::from(em)))
    }
}

impl<F: HttpFetcher> EmClient<F> {
    pub fn new(fetcher: F, endpoints: Endpoints) -> Self {
        Self { fetcher, endpoints }
    }

    // ==================== URL 构造 ====================

    /// 股票列表快照 URL，market 原样拼入 `fs=m:<market>`
    pub fn stock_list_url(&self, market: &str) -> String {
        format!(
            "{}{}?pn=1&pz=5000&po=1&np=1&ut={}&fltt=2&invt=2&fid=f3&fs=m:{}&fields={}",
            self.endpoints.list_host, CLIST_PATH, self.endpoints.ut, market, FIN_HQ_FIELDS
        )
    }

    /// 行情快照 URL
    pub fn stock_hq_url(&self, codes: &[String], fields: &str) -> Result<String> {
        let secids = codes.iter().map(|c| to_secid(c)).collect::<Vec<_>>().join(",");
        let base = format!("{}{}", self.endpoints.quote_host, ULIST_PATH);
        let url = Url::parse_with_params(
            &base,
            &[
                ("ut", self.endpoints.ut.as_str()),
                ("fltt", "2"),
                ("invt", "2"),
                ("fields", fields),
                ("secids", secids.as_str()),
            ],
        )
        .map_err(|e| EmError::malformed(format!("无效的行情地址 {}: {}", base, e)))?;
        Ok(url.into())
    }

    /// K线 URL
    pub fn kline_url(&self, code: &str, period: &str, limit: usize) -> Result<String> {
        let secid = to_secid(code);
        let limit = limit.to_string();
        let base = format!("{}{}", self.endpoints.kline_host, KLINE_PATH);
        let url = Url::parse_with_params(
            &base,
            &[
                ("ut", self.endpoints.ut.as_str()),
                ("fields1", KLINE_FIELDS1),
                ("fields2", KLINE_FIELDS2),
                ("klt", period),
                ("fqt", "1"),
                ("secid", secid.as_str()),
                ("beg", "0"),
                ("end", "20500101"),
                ("lmt", limit.as_str()),
            ],
        )
        .map_err(|e| EmError::malformed(format!("无效的K线地址 {}: {}", base, e)))?;
        Ok(url.into())
    }

    // ==================== 数据接口 ====================

    /// 获取指定市场的全部股票快照
    pub async fn get_stock_list(&self, market: &str) -> Result<Vec<StockListEntry>> {
        let body = self.fetcher.get(&self.stock_list_url(market)).await?;
        let list = normalize_stock_list(&body)?;
        log::info!("获取股票列表 m:{} 共 {} 只", market, list.len());
        Ok(list)
    }

    /// 获取多只股票的行情快照
    ///
    /// fields 为逗号分隔的字段代码，原样发送
    pub async fn get_stock_hq(&self, codes: &[String], fields: &str) -> Result<QuoteMap> {
        let url = self.stock_hq_url(codes, fields)?;
        let body = self.fetcher.get(&url).await?;
        let quotes = normalize_quotes(&body, fields)?;
        log::info!("获取行情 {} 只", quotes.len());
        Ok(quotes)
    }

    /// 获取单只股票的 K 线，顺序由旧到新
    pub async fn get_stock_kline(
        &self,
        code: &str,
        period: &str,
        limit: usize,
    ) -> Result<Vec<Candle>> {
        let url = self.kline_url(code, period, limit)?;
        let body = self.fetcher.get(&url).await?;
        let candles = normalize_candles(&body)?;
        log::info!("获取K线 {} klt={} 共 {} 条", code, period, candles.len());
        Ok(candles)
    }

    /// 最近交易日（北京时间），不会失败
    pub fn get_trade_date(&self) -> String {
        trade_date::get_trade_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// 返回固定响应并记录请求地址
    struct StaticFetcher {
        body: Option<Vec<u8>>,
        urls: Mutex<Vec<String>>,
    }

    impl StaticFetcher {
        fn ok(body: &str) -> Self {
            Self { body: Some(body.as_bytes().to_vec()), urls: Mutex::new(Vec::new()) }
        }

        fn failing() -> Self {
            Self { body: None, urls: Mutex::new(Vec::new()) }
        }

        fn last_url(&self) -> String {
            self.urls.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    impl HttpFetcher for StaticFetcher {
        async fn get(&self, url: &str) -> Result<Vec<u8>> {
            self.urls.lock().unwrap().push(url.to_string());
            self.body.clone().ok_or(EmError::Status(503))
        }
    }

    fn client(fetcher: StaticFetcher) -> EmClient<StaticFetcher> {
        EmClient::new(fetcher, Endpoints::default())
    }

    fn query_of(url: &str) -> Vec<(String, String)> {
        Url::parse(url).unwrap().query_pairs().into_owned().collect()
    }

    #[test]
    fn test_stock_list_url() {
        let c = client(StaticFetcher::failing());
        let url = c.stock_list_url("0+t:6");
        assert_eq!(
            url,
            "http://80.push2.eastmoney.com/api/qt/clist/get?pn=1&pz=5000&po=1&np=1\
             &ut=6d2ffaa6a585d612eda28417681d58fb&fltt=2&invt=2&fid=f3&fs=m:0+t:6\
             &fields=f1,f9,f12,f13,f14,f20,f21,f41,f46,f100,f115"
        );
    }

    #[test]
    fn test_stock_hq_url() {
        let c = client(StaticFetcher::failing());
        let codes = vec!["600000.SH".to_string(), "000001.SZ".to_string(), "430047.BJ".to_string()];
        let url = c.stock_hq_url(&codes, "f2,f12").unwrap();
        assert!(url.starts_with("http://push2.eastmoney.com/api/qt/ulist/get?"));

        let query = query_of(&url);
        let get = |k: &str| query.iter().find(|(key, _)| key == k).map(|(_, v)| v.clone());
        assert_eq!(get("secids").as_deref(), Some("1.600000,0.000001,2.430047"));
        assert_eq!(get("fields").as_deref(), Some("f2,f12"));
        assert_eq!(get("fltt").as_deref(), Some("2"));
        assert_eq!(get("invt").as_deref(), Some("2"));
        assert_eq!(get("ut").as_deref(), Some(EM_UT));
    }

    #[test]
    fn test_kline_url() {
        let c = client(StaticFetcher::failing());
        let url = c.kline_url("600000.SH", "101", 30).unwrap();
        assert!(url.starts_with("http://push2his.eastmoney.com/api/qt/stock/kline/get?"));

        let query = query_of(&url);
        let keys: Vec<&str> = query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["ut", "fields1", "fields2", "klt", "fqt", "secid", "beg", "end", "lmt"]
        );
        assert!(query.contains(&("secid".to_string(), "1.600000".to_string())));
        assert!(query.contains(&("lmt".to_string(), "30".to_string())));
        assert!(query.contains(&("fields2".to_string(), KLINE_FIELDS2.to_string())));
    }

    #[tokio::test]
    async fn test_get_stock_list() {
        let body = r#"{"rc":0,"data":{"total":2,"diff":[
            {"f2":10.5,"f3":1.2,"f5":100,"f6":1050.0,"f12":"600000","f14":"浦发银行","f100":"银行"},
            {"f2":9.1,"f3":-0.3,"f5":200,"f6":1820.0,"f12":"000001","f14":"平安银行","f100":"银行"}
        ]}}"#;
        let c = client(StaticFetcher::ok(body));

        let list = c.get_stock_list("0+t:6").await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].code, "600000.SH");
        assert_eq!(list[1].code, "000001.SZ");
        assert!(c.fetcher.last_url().contains("fs=m:0+t:6"));
    }

    #[tokio::test]
    async fn test_get_stock_hq() {
        let body = r#"{"data":{"total":1,"diff":[{"f2":10.5,"f12":"600000","f14":"浦发银行"}]}}"#;
        let c = client(StaticFetcher::ok(body));

        let quotes = c.get_stock_hq(&["600000.SH".to_string()], "f2,f12,f14").await.unwrap();
        let record = &quotes["600000.SH"];
        assert_eq!(record["close"].as_f64(), Some(10.5));
        assert_eq!(record["name"].as_str(), Some("浦发银行"));
    }

    #[tokio::test]
    async fn test_get_stock_kline() {
        let body = r#"{"data":{"code":"000001","klines":[
            "2024-01-04,9.1,9.2,9.3,9.0,1000,9200,3.3,1.1,0.1,0.05",
            "2024-01-05,9.2,9.0,9.25,8.95,1200,10800,3.2,-2.17,-0.2,0.06"
        ]}}"#;
        let c = client(StaticFetcher::ok(body));

        let candles = c.get_stock_kline("000001.SZ", "101", 2).await.unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[1].date, "2024-01-05");
        assert_eq!(candles[1].low, 8.95);
        assert!(c.fetcher.last_url().contains("secid=0.000001"));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let c = client(StaticFetcher::failing());
        let err = c.get_stock_list("0").await.unwrap_err();
        assert!(err.is_transport());

        let err = c.get_stock_kline("600000.SH", "101", 10).await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let c = client(StaticFetcher::ok(r#"{"rc":102,"data":null}"#));
        assert!(c.get_stock_list("0").await.unwrap_err().is_malformed());
        assert!(c.get_stock_hq(&["600000.SH".to_string()], "f2").await.unwrap_err().is_malformed());
        assert!(c.get_stock_kline("600000.SH", "101", 1).await.unwrap_err().is_malformed());
    }

    #[test]
    fn test_get_trade_date() {
        let c = client(StaticFetcher::failing());
        assert_eq!(c.get_trade_date().len(), 8);
    }
}
