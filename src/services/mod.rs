pub mod analytics;
pub mod appointments;
pub mod attendance;
pub mod auth;
pub mod subjects;
pub mod timetables;
pub mod users;

pub use analytics::AnalyticsService;
pub use appointments::AppointmentService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use subjects::SubjectService;
pub use timetables::TimetableService;
pub use users::UserService;
