pub mod analytics;

pub mod appointments;

pub mod attendance;

pub mod auth;

pub mod subjects;

pub mod timetables;

pub mod users;

pub use analytics::configure_analytics_routes;
pub use appointments::configure_appointment_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use subjects::configure_subject_routes;
pub use timetables::configure_timetable_routes;
pub use users::configure_user_routes;
