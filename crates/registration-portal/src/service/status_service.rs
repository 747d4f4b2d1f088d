//! 学生状态查询服务
//!
//! 组装单个学生的状态文档。读路径上的存储错误直接上抛，
//! 不完整的状态文档比一个明确的失败更糟。

use std::sync::Arc;
use std::time::Instant;

use portal_shared::observability::metrics;
use tracing::{info, instrument, warn};

use crate::error::Result;
use crate::repository::StudentStatusRepositoryTrait;
use crate::service::dto::StudentStatus;

/// 学生状态查询服务
///
/// 不做缓存，每次都从数据库读取当前状态
pub struct StudentStatusService<S>
where
    S: StudentStatusRepositoryTrait,
{
    status_repo: Arc<S>,
}

impl<S> StudentStatusService<S>
where
    S: StudentStatusRepositoryTrait,
{
    pub fn new(status_repo: Arc<S>) -> Self {
        Self { status_repo }
    }

    /// 获取学生状态
    ///
    /// 学生 ID 按原样绑定查询，空串或未知 ID 都返回 StudentStatus::NotFound
    #[instrument(skip(self), fields(student = %student))]
    pub async fn get_student_status(&self, student: &str) -> Result<StudentStatus> {
        let started = Instant::now();
        let result = self.status_repo.fetch_status_document(student).await;
        let elapsed = started.elapsed().as_secs_f64();

        match result {
            Ok(Some(doc)) => {
                info!(
                    finished = doc.finished.len(),
                    registered = doc.registered.len(),
                    "Student status assembled"
                );
                metrics::record_status_query("found", elapsed);
                Ok(StudentStatus::Found(Box::new(doc)))
            }
            Ok(None) => {
                info!("Student does not exist");
                metrics::record_status_query("not_found", elapsed);
                Ok(StudentStatus::NotFound)
            }
            Err(e) => {
                warn!(code = e.error_code(), error = %e, "Student status query failed");
                metrics::record_status_query(e.error_code(), elapsed);
                Err(e)
            }
        }
    }

    /// 获取学生状态的 JSON 文本
    pub async fn get_student_status_json(&self, student: &str) -> Result<String> {
        let status = self.get_student_status(student).await?;
        Ok(serde_json::to_string(&status)?)
    }
}
