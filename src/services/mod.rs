pub mod attendance;
pub mod common;
pub mod courses;
pub mod departments;
pub mod students;
pub mod users;

pub use attendance::AttendanceService;
pub use courses::CourseService;
pub use departments::DepartmentService;
pub use students::StudentService;
pub use users::UserService;
