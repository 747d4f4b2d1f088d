//! 领域模型
//!
//! 门户读写的关系行与聚合后的学生状态文档。
//! 除 Registration 外，其余实体均由外部流程维护，本层只读。

mod enums;
mod registration;
mod status;
mod student;

pub use enums::RegistrationStatus;
pub use registration::Registration;
pub use status::{FinishedCourseEntry, RegisteredCourseEntry, StudentStatusDocument};
pub use student::{BasicInformation, Course, CourseQueuePosition, FinishedCourse, PathToGraduation};
