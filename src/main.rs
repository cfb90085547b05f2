//! A 股数据后端服务
//! 
//! 以 RESTful API 形式提供东方财富的股票列表、行情快照和K线数据

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use ashare_em::config::AppConfig;
use ashare_em::handlers;
use ashare_em::EmClient;

/// 应用程序入口
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let (config, load_msg) = AppConfig::load();

    // 初始化日志系统，RUST_LOG 优先于配置文件
    env_logger::init_from_env(Env::default().default_filter_or(config.log.level.as_str()));
    log::info!("{}", load_msg);

    let client = web::Data::new(EmClient::from_config(&config.api, &config.eastmoney)?);

    let bind_addr = config.bind_addr();
    log::info!("启动 A 股数据服务，监听 {}", bind_addr);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())  // 请求日志
            .app_data(client.clone())
            .configure(handlers::config)
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(bind_addr)?.run().await?;
    Ok(())
}
