//! 课程注册门户数据访问层
//!
//! 为学生注册 / 退课，并组装学生状态文档（专业、已修课程、当前注册、
//! 候补位置、毕业进度）。
//!
//! ## 核心功能
//!
//! - **注册**：插入注册记录，重复注册由唯一约束拒绝
//! - **退课**：删除注册记录，未注册时明确失败而不是空操作
//! - **学生状态**：单条组合查询在同一快照上聚合五个关系
//! - **结果编码**：写操作统一编码为 `{success, error}`
//!
//! ## 模块结构
//!
//! - `models`: 领域模型定义
//! - `error`: 错误类型定义
//! - `repository`: 数据库仓储层
//! - `service`: 业务服务层
//! - `outcome`: 统一结果编码
//! - `portal`: 门户入口

pub mod error;
pub mod models;
pub mod outcome;
pub mod portal;
pub mod repository;
pub mod service;

pub use error::{PortalError, Result};
pub use models::*;
pub use outcome::{OperationOutcome, sanitize_error_message};
pub use portal::Portal;
pub use repository::{RegistrationRepository, StudentStatusRepository};
pub use service::{RegistrationService, StudentStatus, StudentStatusService, dto};
