//! 数据库仓储层
//!
//! 提供注册与学生状态的数据访问接口，封装 SQL 操作细节。
//!
//! ## 设计原则
//!
//! - 仓储只负责数据持久化，不包含业务逻辑
//! - 所有调用方传入的值一律通过参数绑定，不拼接进 SQL 文本
//! - 每个操作只发出一条语句，原子性由数据库保证
//! - 定义 trait 接口以支持 mock 测试

mod registration_repo;
mod status_repo;
mod traits;

pub use registration_repo::RegistrationRepository;
pub use status_repo::StudentStatusRepository;
pub use traits::*;
