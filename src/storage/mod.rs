use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{
    appointments::{
        entities::Appointment,
        requests::{AppointmentListQuery, CreateAppointmentRequest, UpdateAppointmentRequest},
        responses::AppointmentListResponse,
    },
    attendance::{
        entities::ClassAttendanceRecord,
        requests::{AttendanceListQuery, MarkAttendanceRequest},
        responses::AttendanceListResponse,
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
    timetables::{
        entities::TimetableEntry,
        requests::{
            CreateTimetableEntryRequest, TimetableListQuery, TimetableSlotRequest,
            UpdateTimetableEntryRequest,
        },
        responses::TimetableListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 批量获取用户（分析模块拼名字用）
    async fn get_users_by_ids(&self, ids: &[i64]) -> Result<HashMap<i64, User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 科目管理方法
    // 创建科目
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    // 通过ID获取科目
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    // 通过名称获取科目
    async fn get_subject_by_name(&self, name: &str) -> Result<Option<Subject>>;
    // 批量获取科目
    async fn get_subjects_by_ids(&self, ids: &[i64]) -> Result<HashMap<i64, Subject>>;
    // 列出科目
    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse>;
    // 更新科目
    async fn update_subject(&self, id: i64, update: UpdateSubjectRequest)
    -> Result<Option<Subject>>;
    // 删除科目
    async fn delete_subject(&self, id: i64) -> Result<bool>;

    /// 课程表管理方法
    // 创建课程表条目（事务内做冲突检查，冲突时返回 ScheduleConflict）
    async fn create_timetable_entry(
        &self,
        entry: CreateTimetableEntryRequest,
    ) -> Result<TimetableEntry>;
    // 批量创建课程表条目（同一事务内全部成功或全部失败）
    async fn bulk_create_timetable_entries(
        &self,
        student_id: i64,
        entries: Vec<TimetableSlotRequest>,
    ) -> Result<Vec<TimetableEntry>>;
    // 通过ID获取课程表条目
    async fn get_timetable_entry_by_id(&self, id: i64) -> Result<Option<TimetableEntry>>;
    // 列出课程表条目
    async fn list_timetable_entries_with_pagination(
        &self,
        query: TimetableListQuery,
    ) -> Result<TimetableListResponse>;
    // 更新课程表条目（时间或参与者变化时重新做冲突检查，排除自身）
    async fn update_timetable_entry(
        &self,
        id: i64,
        update: UpdateTimetableEntryRequest,
    ) -> Result<Option<TimetableEntry>>;
    // 软删除课程表条目
    async fn delete_timetable_entry(&self, id: i64) -> Result<bool>;
    // 列出教师的全部生效课程表条目（遗漏课程扫描用）
    async fn list_active_timetables_for_teacher(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<TimetableEntry>>;

    /// 预约管理方法
    // 创建预约（事务内检查双方参与者的时间冲突）
    async fn create_appointment(&self, req: CreateAppointmentRequest) -> Result<Appointment>;
    // 通过ID获取预约
    async fn get_appointment_by_id(&self, id: i64) -> Result<Option<Appointment>>;
    // 列出预约
    async fn list_appointments_with_pagination(
        &self,
        query: AppointmentListQuery,
    ) -> Result<AppointmentListResponse>;
    // 更新预约（改期时重新做冲突检查，排除自身）
    async fn update_appointment(
        &self,
        id: i64,
        update: UpdateAppointmentRequest,
    ) -> Result<Option<Appointment>>;
    // 软删除预约
    async fn delete_appointment(&self, id: i64) -> Result<bool>;

    /// 上课记录方法
    // 教师打卡（同一教师+学生+科目+日期唯一，重复打卡返回 ScheduleConflict）
    async fn mark_attendance(
        &self,
        teacher_id: i64,
        req: MarkAttendanceRequest,
    ) -> Result<ClassAttendanceRecord>;
    // 查询某节课当天是否已打卡
    async fn check_if_class_marked(
        &self,
        teacher_id: i64,
        student_id: i64,
        subject_id: i64,
        class_date: chrono::NaiveDate,
    ) -> Result<bool>;
    // 列出上课记录
    async fn list_attendance_with_pagination(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse>;
    // 列出日期范围内的上课记录（分析模块用，不分页）
    async fn list_attendance_in_range(
        &self,
        teacher_id: Option<i64>,
        student_id: Option<i64>,
        start_date: Option<chrono::NaiveDate>,
        end_date: Option<chrono::NaiveDate>,
    ) -> Result<Vec<ClassAttendanceRecord>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
