//! 上课记录实体
//!
//! 记录一次实际发生的课程，创建后不可修改。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "class_attendance_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub teacher_id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub timetable_id: Option<i64>,
    pub class_date: Date,
    pub start_time: String,
    pub duration: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub marked_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TeacherId",
        to = "super::users::Column::Id"
    )]
    Teacher,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_attendance_record(
        self,
    ) -> crate::models::attendance::entities::ClassAttendanceRecord {
        use crate::models::attendance::entities::ClassAttendanceRecord;
        use chrono::{DateTime, Utc};

        ClassAttendanceRecord {
            id: self.id,
            teacher_id: self.teacher_id,
            student_id: self.student_id,
            subject_id: self.subject_id,
            timetable_id: self.timetable_id,
            class_date: self.class_date,
            start_time: self.start_time,
            duration: self.duration,
            notes: self.notes,
            marked_at: DateTime::<Utc>::from_timestamp(self.marked_at, 0).unwrap_or_default(),
        }
    }
}
