//! Prometheus 指标模块
//!
//! 基于 metrics crate 和 metrics-exporter-prometheus 实现指标收集与导出。
//! 指标通过独立的 HTTP 端口暴露，供 Prometheus 抓取。

use anyhow::Result;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::info;

use super::ObservabilityConfig;

/// 注册/退课操作计数
pub const REGISTRATIONS_TOTAL: &str = "portal_registrations_total";
/// 学生状态查询计数
pub const STATUS_QUERIES_TOTAL: &str = "portal_status_queries_total";
/// 单次操作耗时
pub const OPERATION_DURATION_SECONDS: &str = "portal_operation_duration_seconds";

/// Metrics 资源守卫
pub struct MetricsHandle {
    _addr: SocketAddr,
}

/// 初始化 Prometheus 指标导出
///
/// 在指定端口启动 exporter 自带的 HTTP 监听，需在 tokio 运行时中调用。
pub fn init(config: &ObservabilityConfig) -> Result<MetricsHandle> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.metrics_port));

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;

    describe_metrics(&config.service_name);
    info!("Metrics exporter listening on {}", addr);

    Ok(MetricsHandle { _addr: addr })
}

/// 注册指标描述，出现在 /metrics 的 HELP 注释中
fn describe_metrics(service_name: &str) {
    metrics::describe_counter!(
        REGISTRATIONS_TOTAL,
        "Registration state changes by operation and outcome"
    );
    metrics::describe_counter!(
        STATUS_QUERIES_TOTAL,
        "Student status document reads by outcome"
    );
    metrics::describe_histogram!(
        OPERATION_DURATION_SECONDS,
        "Store round-trip duration per portal operation in seconds"
    );

    metrics::counter!("service_starts_total", "service" => service_name.to_string()).increment(1);
}

// ============================================================================
// 便捷的指标记录函数
// ============================================================================

/// 记录一次注册状态变更
///
/// operation: register / unregister；outcome: 错误码或 "success"
#[inline]
pub fn record_registration(operation: &'static str, outcome: &'static str, duration_secs: f64) {
    metrics::counter!(
        REGISTRATIONS_TOTAL,
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);

    metrics::histogram!(OPERATION_DURATION_SECONDS, "operation" => operation)
        .record(duration_secs);
}

/// 记录一次学生状态查询
///
/// outcome: found / not_found / 错误码
#[inline]
pub fn record_status_query(outcome: &'static str, duration_secs: f64) {
    metrics::counter!(STATUS_QUERIES_TOTAL, "outcome" => outcome).increment(1);

    metrics::histogram!(OPERATION_DURATION_SECONDS, "operation" => "student_status")
        .record(duration_secs);
}
