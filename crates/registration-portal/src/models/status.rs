//! 学生状态文档
//!
//! 由一条组合查询在同一快照上聚合五个关系得到，字段名与对外 JSON 文档一致。
//! 文档本身不持有状态，每次查询都反映数据库当前内容。

use serde::{Deserialize, Serialize};

use super::enums::RegistrationStatus;

/// 学生状态文档
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStatusDocument {
    /// 学生 ID
    pub student: String,
    pub name: String,
    pub login: String,
    pub program: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// 已修完课程，没有时为空列表
    pub finished: Vec<FinishedCourseEntry>,
    /// 当前注册（含候补），没有时为空列表
    pub registered: Vec<RegisteredCourseEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seminar_courses: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub math_credits: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_credits: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_credits: Option<f64>,
    /// 是否满足毕业条件（PathToGraduation.qualified）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_graduate: Option<bool>,
}

impl StudentStatusDocument {
    /// 是否注册（或候补）了指定课程
    pub fn is_registered_on(&self, course_code: &str) -> bool {
        self.registered.iter().any(|r| r.code == course_code)
    }

    /// 已修完课程的学分合计
    pub fn finished_credits(&self) -> f64 {
        self.finished.iter().map(|f| f.credits).sum()
    }
}

/// 已修完课程条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishedCourseEntry {
    /// 课程名称
    pub course: String,
    /// 课程代码
    pub code: String,
    pub credits: f64,
    pub grade: String,
}

/// 当前注册条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredCourseEntry {
    /// 课程名称
    pub course: String,
    /// 课程代码
    pub code: String,
    pub status: RegistrationStatus,
    /// 候补队列位置，没有排队时缺省
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}
