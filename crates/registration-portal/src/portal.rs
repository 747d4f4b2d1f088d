//! 门户入口
//!
//! 从显式的数据库配置（或已有的连接池）装配仓储与服务，
//! 对外暴露注册、退课与学生状态三个操作。

use std::sync::Arc;

use portal_shared::config::DatabaseConfig;
use portal_shared::database::Database;
use sqlx::PgPool;
use tracing::info;

use crate::error::Result;
use crate::outcome::OperationOutcome;
use crate::repository::{RegistrationRepository, StudentStatusRepository};
use crate::service::{RegistrationService, StudentStatus, StudentStatusService};

/// 注册门户
///
/// 持有一个数据库句柄；所有操作可并发调用
pub struct Portal {
    db: Database,
    registration_service: RegistrationService<RegistrationRepository>,
    status_service: StudentStatusService<StudentStatusRepository>,
}

impl Portal {
    /// 按配置建立连接并装配门户
    pub async fn connect(config: &DatabaseConfig) -> portal_shared::error::Result<Self> {
        let db = Database::connect(config).await?;
        Ok(Self::from_database(db))
    }

    /// 使用已有连接池装配门户
    pub fn from_pool(pool: PgPool) -> Self {
        Self::from_database(Database::from_pool(pool))
    }

    fn from_database(db: Database) -> Self {
        let pool = db.pool().clone();
        let registration_repo = Arc::new(RegistrationRepository::new(pool.clone()));
        let status_repo = Arc::new(StudentStatusRepository::new(pool));

        info!("Portal repositories initialized");

        Self {
            db,
            registration_service: RegistrationService::new(registration_repo),
            status_service: StudentStatusService::new(status_repo),
        }
    }

    /// 为学生注册课程
    pub async fn register(&self, student: &str, course: &str) -> OperationOutcome {
        self.registration_service.register(student, course).await
    }

    /// 为学生退课
    ///
    /// 未注册时返回失败结果，而不是视为成功的空操作
    pub async fn unregister(&self, student: &str, course: &str) -> OperationOutcome {
        self.registration_service.unregister(student, course).await
    }

    /// 学生当前是否注册（或候补）了该课程
    pub async fn is_registered(&self, student: &str, course: &str) -> Result<bool> {
        self.registration_service.is_registered(student, course).await
    }

    /// 获取学生状态文档
    pub async fn student_status(&self, student: &str) -> Result<StudentStatus> {
        self.status_service.get_student_status(student).await
    }

    /// 获取学生状态文档的 JSON 文本
    pub async fn student_status_json(&self, student: &str) -> Result<String> {
        self.status_service.get_student_status_json(student).await
    }

    /// 注册服务（需要类型化错误时使用）
    pub fn registrations(&self) -> &RegistrationService<RegistrationRepository> {
        &self.registration_service
    }

    pub fn pool(&self) -> &PgPool {
        self.db.pool()
    }

    /// 健康检查
    pub async fn health_check(&self) -> portal_shared::error::Result<()> {
        self.db.health_check().await
    }

    /// 关闭数据库连接
    pub async fn close(&self) {
        self.db.close().await;
    }
}
