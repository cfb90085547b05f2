//! 业务逻辑服务模块
//! 
//! 封装数据获取和处理逻辑

pub mod eastmoney;  // 东方财富 A 股数据
