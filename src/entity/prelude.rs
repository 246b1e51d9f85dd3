//! 预导入模块，方便使用

pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::reports::{ActiveModel as ReportActiveModel, Entity as Reports, Model as ReportModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
