//! 学生相关只读实体

use serde::{Deserialize, Serialize};

/// 学生基本信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct BasicInformation {
    pub idnr: String,
    pub name: String,
    pub login: String,
    pub program: String,
    /// 尚未选择方向的学生为 null
    #[sqlx(default)]
    pub branch: Option<String>,
}

/// 已修完课程
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct FinishedCourse {
    pub student: String,
    pub course: String,
    pub credits: f64,
    /// 成绩：U / 3 / 4 / 5
    pub grade: String,
}

/// 候补队列位置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CourseQueuePosition {
    pub student: String,
    pub course: String,
    /// 从 1 开始
    pub place: i32,
}

/// 毕业进度汇总（每个学生至多一行）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PathToGraduation {
    pub student: String,
    #[sqlx(rename = "seminarcourses")]
    pub seminar_courses: i64,
    #[sqlx(rename = "mathcredits")]
    pub math_credits: f64,
    #[sqlx(rename = "researchcredits")]
    pub research_credits: f64,
    #[sqlx(rename = "totalcredits")]
    pub total_credits: f64,
    pub qualified: bool,
}

/// 课程
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Course {
    pub code: String,
    pub name: String,
}
