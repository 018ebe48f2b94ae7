//! 课程表条目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "timetable_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub is_active: bool,
    pub deleted_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TeacherId",
        to = "super::users::Column::Id"
    )]
    Teacher,
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
    pub fn into_timetable_entry(self) -> crate::models::timetables::entities::TimetableEntry {
        use crate::models::timetables::entities::{DayOfWeek, TimetableEntry};
        use chrono::{DateTime, Utc};

        TimetableEntry {
            id: self.id,
            student_id: self.student_id,
            teacher_id: self.teacher_id,
            subject_id: self.subject_id,
            day_of_week: self
                .day_of_week
                .parse::<DayOfWeek>()
                .unwrap_or(DayOfWeek::Monday),
            start_time: self.start_time,
            end_time: self.end_time,
            notes: self.notes,
            is_active: self.is_active,
            deleted_at: self
                .deleted_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
