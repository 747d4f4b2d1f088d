//! 学生状态仓储
//!
//! 用一条语句聚合 BasicInformation、FinishedCourses、Registrations、
//! CourseQueuePositions、PathToGraduation 与 Courses。PostgreSQL 对单条语句
//! 使用同一个快照，因此并发的注册变更不会让各个子列表处于不同的时间点。

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use super::traits::StudentStatusRepositoryTrait;
use crate::error::Result;
use crate::models::StudentStatusDocument;

/// 组合查询
///
/// 课程名称按代码逐条解析；代码在 Courses 中不存在时名称为 null，
/// 反序列化失败并以查询错误的形式上抛
const STUDENT_STATUS_SQL: &str = r#"
SELECT jsonb_build_object(
    'student', b.idnr,
    'name', b.name,
    'login', b.login,
    'program', b.program,
    'branch', b.branch,
    'finished', (
        SELECT COALESCE(jsonb_agg(jsonb_build_object(
            'course', (SELECT c.name FROM Courses c WHERE c.code = f.course),
            'code', f.course,
            'credits', f.credits,
            'grade', f.grade
        ) ORDER BY f.course), '[]'::jsonb)
        FROM FinishedCourses f
        WHERE f.student = b.idnr
    ),
    'registered', (
        SELECT COALESCE(jsonb_agg(jsonb_build_object(
            'course', (SELECT c.name FROM Courses c WHERE c.code = r.course),
            'code', r.course,
            'status', r.status,
            'position', (
                SELECT q.place FROM CourseQueuePositions q
                WHERE q.student = b.idnr AND q.course = r.course
            )
        ) ORDER BY r.course), '[]'::jsonb)
        FROM Registrations r
        WHERE r.student = b.idnr
    ),
    'seminarCourses', p.seminarCourses,
    'mathCredits', p.mathCredits,
    'researchCredits', p.researchCredits,
    'totalCredits', p.totalCredits,
    'canGraduate', p.qualified
) AS document
FROM BasicInformation b
LEFT JOIN PathToGraduation p ON p.student = b.idnr
WHERE b.idnr = $1
"#;

/// 学生状态仓储
pub struct StudentStatusRepository {
    pool: PgPool,
}

impl StudentStatusRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 获取学生状态文档
    ///
    /// 学生不存在时返回 None；文档不做缓存，每次都读取数据库当前内容
    pub async fn fetch_status_document(
        &self,
        student: &str,
    ) -> Result<Option<StudentStatusDocument>> {
        let document = sqlx::query_scalar::<_, Json<StudentStatusDocument>>(STUDENT_STATUS_SQL)
            .bind(student)
            .fetch_optional(&self.pool)
            .await?;

        Ok(document.map(|Json(doc)| doc))
    }
}

#[async_trait]
impl StudentStatusRepositoryTrait for StudentStatusRepository {
    async fn fetch_status_document(
        &self,
        student: &str,
    ) -> Result<Option<StudentStatusDocument>> {
        self.fetch_status_document(student).await
    }
}
