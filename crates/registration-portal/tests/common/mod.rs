//! 集成测试公共辅助
//!
//! 每个测试在独立 schema 中建立门户用到的六个关系，测试结束后整体删除。
//!
//! ## 运行方式
//!
//! ```bash
//! TEST_DATABASE_URL=postgres://... cargo test -p registration-portal -- --ignored
//! ```

#![allow(dead_code)]

use registration_portal::models::{
    BasicInformation, Course, CourseQueuePosition, FinishedCourse, PathToGraduation,
};
use registration_portal::Portal;
use portal_shared::test_utils::{
    test_course_code, test_database_config, test_schema_name, test_student_id,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};

const SCHEMA_SQL: &str = r#"
CREATE TABLE Courses (
    code TEXT PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE BasicInformation (
    idnr TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    login TEXT NOT NULL UNIQUE,
    program TEXT NOT NULL,
    branch TEXT
);

-- course 故意不加外键，用于构造无法解析课程名称的数据
CREATE TABLE FinishedCourses (
    student TEXT NOT NULL REFERENCES BasicInformation(idnr),
    course TEXT NOT NULL,
    credits DOUBLE PRECISION NOT NULL,
    grade TEXT NOT NULL,
    PRIMARY KEY (student, course)
);

CREATE TABLE Registrations (
    student TEXT NOT NULL REFERENCES BasicInformation(idnr),
    course TEXT NOT NULL REFERENCES Courses(code),
    status VARCHAR NOT NULL DEFAULT 'registered' CHECK (status IN ('registered', 'waiting')),
    PRIMARY KEY (student, course)
);

CREATE TABLE CourseQueuePositions (
    student TEXT NOT NULL,
    course TEXT NOT NULL,
    place INT NOT NULL,
    PRIMARY KEY (student, course)
);

CREATE TABLE PathToGraduation (
    student TEXT PRIMARY KEY REFERENCES BasicInformation(idnr),
    seminarCourses BIGINT NOT NULL,
    mathCredits DOUBLE PRECISION NOT NULL,
    researchCredits DOUBLE PRECISION NOT NULL,
    totalCredits DOUBLE PRECISION NOT NULL,
    qualified BOOLEAN NOT NULL
);
"#;

/// 隔离的测试库
pub struct TestStore {
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
}

impl TestStore {
    /// 建立独立 schema 并建表
    pub async fn setup() -> Self {
        let config = test_database_config();
        let admin = PgPool::connect(&config.url)
            .await
            .expect("连接测试数据库失败");

        let schema = test_schema_name();
        admin
            .execute(format!("CREATE SCHEMA {}", schema).as_str())
            .await
            .expect("创建测试 schema 失败");

        let search_path = format!("SET search_path TO {}", schema);
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .after_connect(move |conn, _meta| {
                let sql = search_path.clone();
                Box::pin(async move {
                    conn.execute(sql.as_str()).await?;
                    Ok(())
                })
            })
            .connect(&config.url)
            .await
            .expect("连接测试数据库失败");

        sqlx::raw_sql(SCHEMA_SQL)
            .execute(&pool)
            .await
            .expect("建表失败");

        Self {
            pool,
            admin,
            schema,
        }
    }

    pub fn portal(&self) -> Portal {
        Portal::from_pool(self.pool.clone())
    }

    /// 删除测试 schema
    pub async fn teardown(self) {
        self.pool.close().await;
        self.admin
            .execute(format!("DROP SCHEMA {} CASCADE", self.schema).as_str())
            .await
            .expect("删除测试 schema 失败");
        self.admin.close().await;
    }

    // ==================== 数据准备 ====================

    pub async fn seed_course(&self, code: &str, name: &str) {
        let course = Course {
            code: code.to_string(),
            name: name.to_string(),
        };
        sqlx::query("INSERT INTO Courses (code, name) VALUES ($1, $2)")
            .bind(&course.code)
            .bind(&course.name)
            .execute(&self.pool)
            .await
            .expect("插入课程失败");
    }

    /// 插入一门随机代码的课程，返回课程代码
    pub async fn seed_any_course(&self) -> String {
        let code = test_course_code();
        self.seed_course(&code, &format!("Course {}", code)).await;
        code
    }

    /// 插入一个随机 ID 的学生
    pub async fn seed_any_student(&self) -> BasicInformation {
        self.seed_student(&test_student_id(), None).await
    }

    pub async fn seed_student(&self, idnr: &str, branch: Option<&str>) -> BasicInformation {
        let student = BasicInformation {
            idnr: idnr.to_string(),
            name: format!("Student {}", idnr),
            login: format!("login_{}", idnr),
            program: "Prog1".to_string(),
            branch: branch.map(str::to_string),
        };
        sqlx::query(
            "INSERT INTO BasicInformation (idnr, name, login, program, branch) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&student.idnr)
        .bind(&student.name)
        .bind(&student.login)
        .bind(&student.program)
        .bind(&student.branch)
        .execute(&self.pool)
        .await
        .expect("插入学生失败");
        student
    }

    pub async fn seed_finished(&self, finished: &FinishedCourse) {
        sqlx::query(
            "INSERT INTO FinishedCourses (student, course, credits, grade) VALUES ($1, $2, $3, $4)",
        )
        .bind(&finished.student)
        .bind(&finished.course)
        .bind(finished.credits)
        .bind(&finished.grade)
        .execute(&self.pool)
        .await
        .expect("插入已修课程失败");
    }

    pub async fn seed_queue(&self, position: &CourseQueuePosition) {
        sqlx::query("UPDATE Registrations SET status = 'waiting' WHERE student = $1 AND course = $2")
            .bind(&position.student)
            .bind(&position.course)
            .execute(&self.pool)
            .await
            .expect("更新注册状态失败");

        sqlx::query("INSERT INTO CourseQueuePositions (student, course, place) VALUES ($1, $2, $3)")
            .bind(&position.student)
            .bind(&position.course)
            .bind(position.place)
            .execute(&self.pool)
            .await
            .expect("插入队列位置失败");
    }

    pub async fn seed_path(&self, path: &PathToGraduation) {
        sqlx::query(
            r#"
            INSERT INTO PathToGraduation
                (student, seminarCourses, mathCredits, researchCredits, totalCredits, qualified)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&path.student)
        .bind(path.seminar_courses)
        .bind(path.math_credits)
        .bind(path.research_credits)
        .bind(path.total_credits)
        .bind(path.qualified)
        .execute(&self.pool)
        .await
        .expect("插入毕业进度失败");
    }

    // ==================== 数据校验 ====================

    pub async fn registration_count(&self, student: &str, course: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM Registrations WHERE student = $1 AND course = $2")
            .bind(student)
            .bind(course)
            .fetch_one(&self.pool)
            .await
            .expect("查询注册数量失败")
    }

    pub async fn total_registrations(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM Registrations")
            .fetch_one(&self.pool)
            .await
            .expect("查询注册总数失败")
    }

    pub async fn path_to_graduation(&self, student: &str) -> Option<PathToGraduation> {
        sqlx::query_as::<_, PathToGraduation>(
            r#"
            SELECT student, seminarCourses, mathCredits, researchCredits, totalCredits, qualified
            FROM PathToGraduation
            WHERE student = $1
            "#,
        )
        .bind(student)
        .fetch_optional(&self.pool)
        .await
        .expect("查询毕业进度失败")
    }
}
