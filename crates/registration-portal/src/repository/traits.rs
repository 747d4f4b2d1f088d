//! 仓储 Trait 定义
//!
//! 定义仓储接口，便于服务层依赖抽象而非具体实现，支持 mock 测试

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Registration, StudentStatusDocument};

/// 注册仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationRepositoryTrait: Send + Sync {
    /// 插入注册记录；重复注册返回 DuplicateRegistration
    async fn register(&self, student: &str, course: &str) -> Result<()>;
    /// 删除注册记录；未删除任何行时返回 NotRegistered
    async fn unregister(&self, student: &str, course: &str) -> Result<()>;
    async fn is_registered(&self, student: &str, course: &str) -> Result<bool>;
    async fn list_registrations(&self, student: &str) -> Result<Vec<Registration>>;
}

/// 学生状态仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentStatusRepositoryTrait: Send + Sync {
    /// 学生不存在时返回 None
    async fn fetch_status_document(&self, student: &str) -> Result<Option<StudentStatusDocument>>;
}
