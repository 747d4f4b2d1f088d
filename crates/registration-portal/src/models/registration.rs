//! 注册记录

use serde::{Deserialize, Serialize};

use super::enums::RegistrationStatus;

/// 注册记录
///
/// (student, course) 组合在库中唯一，由 register 创建、unregister 删除
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Registration {
    /// 学生 ID（BasicInformation.idnr）
    pub student: String,
    /// 课程代码
    pub course: String,
    /// 注册状态
    pub status: RegistrationStatus,
}
