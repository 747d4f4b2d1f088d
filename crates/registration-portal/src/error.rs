//! 注册门户错误类型
//!
//! 定义注册、退课与学生状态查询的业务错误和系统错误

use thiserror::Error;

/// 注册门户错误类型
#[derive(Debug, Error)]
pub enum PortalError {
    // === 注册相关错误 ===
    #[error("学生已注册该课程: student={student}, course={course}: {detail}")]
    DuplicateRegistration {
        student: String,
        course: String,
        detail: String,
    },

    #[error("学生未注册该课程，无法退课: student={student}, course={course}")]
    NotRegistered { student: String, course: String },

    #[error("数据库约束拒绝了该操作: {0}")]
    ConstraintViolation(String),

    // === 系统错误 ===
    #[error("查询失败: {0}")]
    QueryFailed(#[from] sqlx::Error),

    #[error("JSON 序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("参数校验失败: {0}")]
    Validation(String),
}

/// 注册门户 Result 类型别名
pub type Result<T> = std::result::Result<T, PortalError>;

impl PortalError {
    /// 将写操作中的数据库错误归类
    ///
    /// 唯一约束冲突归为重复注册，其余数据库拒绝（外键、检查约束、触发器异常、连接故障）
    /// 归为约束违反
    pub fn from_write_error(err: sqlx::Error, student: &str, course: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::DuplicateRegistration {
                    student: student.to_string(),
                    course: course.to_string(),
                    detail: db_err.message().to_string(),
                }
            }
            sqlx::Error::Database(db_err) => Self::ConstraintViolation(db_err.message().to_string()),
            _ => Self::ConstraintViolation(err.to_string()),
        }
    }

    /// 检查是否为可重试的错误
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::QueryFailed(
                sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) | sqlx::Error::PoolClosed
            )
        )
    }

    /// 检查是否为业务错误（非系统错误）
    pub fn is_business_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateRegistration { .. } | Self::NotRegistered { .. } | Self::Validation(_)
        )
    }

    /// 获取错误码（用于指标标签和调用方分支判断）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateRegistration { .. } => "DUPLICATE_REGISTRATION",
            Self::NotRegistered { .. } => "NOT_REGISTERED",
            Self::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            Self::QueryFailed(_) => "QUERY_FAILED",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}
