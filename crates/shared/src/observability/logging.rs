//! 日志模块
//!
//! 基于 tracing-subscriber 安装全局 subscriber，支持彩色文本与 JSON 两种输出。

use anyhow::Result;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use super::ObservabilityConfig;

/// 始终附加的过滤指令
///
/// sqlx 在 info 级别为每条语句打日志，注册与查询都是单语句操作，
/// 这些日志只会淹没服务自身的事件
const QUIET_DIRECTIVES: &[&str] = &["sqlx=warn"];

/// 构建环境过滤器
///
/// RUST_LOG 优先，其次是配置中的日志级别，都无效时回退到 info
pub(crate) fn build_env_filter(log_level: &str) -> EnvFilter {
    let mut filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    for directive in QUIET_DIRECTIVES {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// 安装全局日志 subscriber
///
/// 每个进程只能成功一次，重复调用返回错误
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    let fmt_layer = if config.json_logs {
        // JSON 输出记录 span 关闭事件，`#[instrument]` 的操作耗时随之落盘
        fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_current_span(true)
            .boxed()
    } else {
        fmt::layer().with_target(true).with_ansi(true).boxed()
    };

    tracing_subscriber::registry()
        .with(build_env_filter(&config.log_level))
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
