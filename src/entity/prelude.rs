//! 预导入模块，方便使用

pub use super::attendance_logs::{
    ActiveModel as AttendanceLogActiveModel, Entity as AttendanceLogs,
    Model as AttendanceLogModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::departments::{
    ActiveModel as DepartmentActiveModel, Entity as Departments, Model as DepartmentModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
