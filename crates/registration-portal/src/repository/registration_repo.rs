//! 注册仓储
//!
//! 注册记录的插入与删除。唯一性与外键由数据库约束保证，
//! 并发重复注册的竞争也只由约束兜底。

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::traits::RegistrationRepositoryTrait;
use crate::error::{PortalError, Result};
use crate::models::Registration;

/// 注册仓储
pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ==================== 写入操作 ====================

    /// 为学生注册课程
    ///
    /// 状态列由数据库推导（有名额则 registered，否则 waiting），这里只写入学生与课程
    pub async fn register(&self, student: &str, course: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO Registrations (student, course)
            VALUES ($1, $2)
            "#,
        )
        .bind(student)
        .bind(course)
        .execute(&self.pool)
        .await
        .map_err(|e| PortalError::from_write_error(e, student, course))?;

        debug!(student = %student, course = %course, "Registration row inserted");
        Ok(())
    }

    /// 为学生退课
    ///
    /// 影响行数为 0 说明该学生从未注册此课程，视为失败而非空操作
    pub async fn unregister(&self, student: &str, course: &str) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM Registrations
            WHERE student = $1 AND course = $2
            "#,
        )
        .bind(student)
        .bind(course)
        .execute(&self.pool)
        .await
        .map_err(|e| PortalError::from_write_error(e, student, course))?;

        if result.rows_affected() == 0 {
            return Err(PortalError::NotRegistered {
                student: student.to_string(),
                course: course.to_string(),
            });
        }

        debug!(
            student = %student,
            course = %course,
            rows = result.rows_affected(),
            "Registration row deleted"
        );
        Ok(())
    }

    // ==================== 查询操作 ====================

    /// 是否存在注册（或候补）记录
    pub async fn is_registered(&self, student: &str, course: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM Registrations
                WHERE student = $1 AND course = $2
            )
            "#,
        )
        .bind(student)
        .bind(course)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// 列出学生的所有注册记录
    pub async fn list_registrations(&self, student: &str) -> Result<Vec<Registration>> {
        let registrations = sqlx::query_as::<_, Registration>(
            r#"
            SELECT student, course, status::varchar AS status
            FROM Registrations
            WHERE student = $1
            ORDER BY course
            "#,
        )
        .bind(student)
        .fetch_all(&self.pool)
        .await?;

        Ok(registrations)
    }
}

#[async_trait]
impl RegistrationRepositoryTrait for RegistrationRepository {
    async fn register(&self, student: &str, course: &str) -> Result<()> {
        self.register(student, course).await
    }

    async fn unregister(&self, student: &str, course: &str) -> Result<()> {
        self.unregister(student, course).await
    }

    async fn is_registered(&self, student: &str, course: &str) -> Result<bool> {
        self.is_registered(student, course).await
    }

    async fn list_registrations(&self, student: &str) -> Result<Vec<Registration>> {
        self.list_registrations(student).await
    }
}
