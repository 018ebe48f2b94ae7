//! 预导入模块，方便使用

pub use super::appointments::{
    ActiveModel as AppointmentActiveModel, Entity as Appointments, Model as AppointmentModel,
};
pub use super::class_attendance_records::{
    ActiveModel as ClassAttendanceActiveModel, Entity as ClassAttendanceRecords,
    Model as ClassAttendanceModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::timetable_entries::{
    ActiveModel as TimetableEntryActiveModel, Entity as TimetableEntries,
    Model as TimetableEntryModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
