//! 服务层
//!
//! 实现注册门户业务逻辑，协调仓储层并归一化结果。
//!
//! ## 模块结构
//!
//! - `dto`: 数据传输对象定义
//! - `registration_service`: 注册 / 退课（写操作，结果编码为 OperationOutcome）
//! - `status_service`: 学生状态查询（只读操作，错误上抛给调用方）

pub mod dto;
pub mod registration_service;
pub mod status_service;

pub use dto::*;
pub use registration_service::RegistrationService;
pub use status_service::StudentStatusService;
