//! 注册服务
//!
//! 执行注册 / 退课的状态变更。所有错误都在此边界被捕获并编码为
//! OperationOutcome，写操作对调用方永远返回结构良好的结果。

use std::sync::Arc;
use std::time::Instant;

use portal_shared::observability::metrics;
use tracing::{info, instrument, warn};

use crate::error::{PortalError, Result};
use crate::outcome::OperationOutcome;
use crate::repository::RegistrationRepositoryTrait;

/// 注册服务
pub struct RegistrationService<R>
where
    R: RegistrationRepositoryTrait,
{
    registration_repo: Arc<R>,
}

impl<R> RegistrationService<R>
where
    R: RegistrationRepositoryTrait,
{
    pub fn new(registration_repo: Arc<R>) -> Self {
        Self { registration_repo }
    }

    /// 为学生注册课程，结果编码为统一结构
    pub async fn register(&self, student: &str, course: &str) -> OperationOutcome {
        OperationOutcome::from_result(self.try_register(student, course).await)
    }

    /// 为学生退课，结果编码为统一结构
    pub async fn unregister(&self, student: &str, course: &str) -> OperationOutcome {
        OperationOutcome::from_result(self.try_unregister(student, course).await)
    }

    /// 为学生注册课程，保留类型化错误
    ///
    /// 不检查学生与课程是否存在，交由数据库外键约束判断
    #[instrument(skip(self), fields(student = %student, course = %course))]
    pub async fn try_register(&self, student: &str, course: &str) -> Result<()> {
        let started = Instant::now();
        let result = match validate_identifiers(student, course) {
            Ok(()) => self.registration_repo.register(student, course).await,
            Err(e) => Err(e),
        };
        record("register", &result, started);
        result
    }

    /// 为学生退课，保留类型化错误
    #[instrument(skip(self), fields(student = %student, course = %course))]
    pub async fn try_unregister(&self, student: &str, course: &str) -> Result<()> {
        let started = Instant::now();
        let result = match validate_identifiers(student, course) {
            Ok(()) => self.registration_repo.unregister(student, course).await,
            Err(e) => Err(e),
        };
        record("unregister", &result, started);
        result
    }

    /// 学生当前是否注册（或候补）了该课程
    pub async fn is_registered(&self, student: &str, course: &str) -> Result<bool> {
        validate_identifiers(student, course)?;
        self.registration_repo.is_registered(student, course).await
    }
}

/// 学生 ID 与课程代码都不能为空
fn validate_identifiers(student: &str, course: &str) -> Result<()> {
    if student.trim().is_empty() {
        return Err(PortalError::Validation("学生 ID 不能为空".to_string()));
    }
    if course.trim().is_empty() {
        return Err(PortalError::Validation("课程代码不能为空".to_string()));
    }
    Ok(())
}

fn record(operation: &'static str, result: &Result<()>, started: Instant) {
    let elapsed = started.elapsed().as_secs_f64();
    match result {
        Ok(()) => {
            info!(operation, "Registration change applied");
            metrics::record_registration(operation, "success", elapsed);
        }
        Err(e) if e.is_business_error() => {
            info!(operation, code = e.error_code(), error = %e, "Registration change rejected");
            metrics::record_registration(operation, e.error_code(), elapsed);
        }
        Err(e) => {
            warn!(operation, code = e.error_code(), error = %e, "Registration change failed");
            metrics::record_registration(operation, e.error_code(), elapsed);
        }
    }
}
