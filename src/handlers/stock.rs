//! 股票接口处理器
//!
//! ## API 列表
//! - GET /stocks?market=<m> - 股票列表快照
//! - GET /stocks/hq?codes=<c1,c2>&fields=<组合名或字段列表> - 行情快照
//! - GET /stocks/{code}/kline?period=<klt>&limit=<n> - K线
//! - GET /trade_date - 最近交易日

use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::models::{ApiResponse, KlineQuery, StockHqQuery, StockListQuery};
use crate::services::eastmoney::{resolve_fields, EmClient, EmError, FieldProfile};

/// 默认K线周期：日线
const DEFAULT_PERIOD: &str = "101";
const DEFAULT_KLINE_LIMIT: usize = 120;

/// 把服务结果转换成 HTTP 响应
///
/// 上游数据格式错误返回 502，其余错误返回 500
fn respond<T: Serialize>(result: Result<T, EmError>) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::Ok().json(ApiResponse::success(data)),
        Err(e) => {
            log::error!("{}", e);
            let response = ApiResponse::<T>::error(e.to_string());
            if e.is_malformed() {
                HttpResponse::BadGateway().json(response)
            } else {
                HttpResponse::InternalServerError().json(response)
            }
        }
    }
}

fn split_codes(codes: &str) -> Vec<String> {
    codes
        .split(',')
        .map(|c| c.trim().to_uppercase())
        .filter(|c| !c.is_empty())
        .collect()
}

pub async fn list_stocks(
    client: web::Data<EmClient>,
    query: web::Query<StockListQuery>,
) -> Result<HttpResponse> {
    Ok(respond(client.get_stock_list(&query.market).await))
}

pub async fn get_stock_hq(
    client: web::Data<EmClient>,
    query: web::Query<StockHqQuery>,
) -> Result<HttpResponse> {
    let codes = split_codes(&query.codes);
    if codes.is_empty() {
        let response = ApiResponse::<()>::error("codes 不能为空".to_string());
        return Ok(HttpResponse::BadRequest().json(response));
    }

    let fields = query
        .fields
        .as_deref()
        .map(resolve_fields)
        .unwrap_or_else(|| FieldProfile::Long.codes().to_string());

    Ok(respond(client.get_stock_hq(&codes, &fields).await))
}

pub async fn get_stock_kline(
    client: web::Data<EmClient>,
    path: web::Path<String>,
    query: web::Query<KlineQuery>,
) -> Result<HttpResponse> {
    let code = path.into_inner().to_uppercase();
    let period = query.period.as_deref().unwrap_or(DEFAULT_PERIOD);
    let limit = query.limit.unwrap_or(DEFAULT_KLINE_LIMIT);

    Ok(respond(client.get_stock_kline(&code, period, limit).await))
}

pub async fn get_trade_date(client: web::Data<EmClient>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(client.get_trade_date())))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/stocks")
            .route("", web::get().to(list_stocks))
            .route("/hq", web::get().to(get_stock_hq))
            .route("/{code}/kline", web::get().to(get_stock_kline))
    )
    .route("/trade_date", web::get().to(get_trade_date));
}
