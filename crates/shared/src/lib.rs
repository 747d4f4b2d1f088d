//! 共享库
//!
//! 包含注册门户共用的配置、错误处理、数据库连接、可观测性与测试辅助代码。

pub mod config;
pub mod database;
pub mod error;
pub mod observability;
pub mod test_utils;
