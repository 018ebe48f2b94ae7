//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod appointments;
mod attendance;
mod subjects;
mod timetables;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, TMSystemError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| TMSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 从已有连接构造（集成测试用，迁移由调用方负责）
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| TMSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| TMSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| TMSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(TMSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn get_users_by_ids(&self, ids: &[i64]) -> Result<HashMap<i64, User>> {
        self.get_users_by_ids_impl(ids).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 科目模块
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn get_subject_by_name(&self, name: &str) -> Result<Option<Subject>> {
        self.get_subject_by_name_impl(name).await
    }

    async fn get_subjects_by_ids(&self, ids: &[i64]) -> Result<HashMap<i64, Subject>> {
        self.get_subjects_by_ids_impl(ids).await
    }

    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        self.list_subjects_with_pagination_impl(query).await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    // 课程表模块
    async fn create_timetable_entry(
        &self,
        entry: CreateTimetableEntryRequest,
    ) -> Result<TimetableEntry> {
        self.create_timetable_entry_impl(entry).await
    }

    async fn bulk_create_timetable_entries(
        &self,
        student_id: i64,
        entries: Vec<TimetableSlotRequest>,
    ) -> Result<Vec<TimetableEntry>> {
        self.bulk_create_timetable_entries_impl(student_id, entries)
            .await
    }

    async fn get_timetable_entry_by_id(&self, id: i64) -> Result<Option<TimetableEntry>> {
        self.get_timetable_entry_by_id_impl(id).await
    }

    async fn list_timetable_entries_with_pagination(
        &self,
        query: TimetableListQuery,
    ) -> Result<TimetableListResponse> {
        self.list_timetable_entries_with_pagination_impl(query)
            .await
    }

    async fn update_timetable_entry(
        &self,
        id: i64,
        update: UpdateTimetableEntryRequest,
    ) -> Result<Option<TimetableEntry>> {
        self.update_timetable_entry_impl(id, update).await
    }

    async fn delete_timetable_entry(&self, id: i64) -> Result<bool> {
        self.delete_timetable_entry_impl(id).await
    }

    async fn list_active_timetables_for_teacher(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<TimetableEntry>> {
        self.list_active_timetables_for_teacher_impl(teacher_id)
            .await
    }

    // 预约模块
    async fn create_appointment(&self, req: CreateAppointmentRequest) -> Result<Appointment> {
        self.create_appointment_impl(req).await
    }

    async fn get_appointment_by_id(&self, id: i64) -> Result<Option<Appointment>> {
        self.get_appointment_by_id_impl(id).await
    }

    async fn list_appointments_with_pagination(
        &self,
        query: AppointmentListQuery,
    ) -> Result<AppointmentListResponse> {
        self.list_appointments_with_pagination_impl(query).await
    }

    async fn update_appointment(
        &self,
        id: i64,
        update: UpdateAppointmentRequest,
    ) -> Result<Option<Appointment>> {
        self.update_appointment_impl(id, update).await
    }

    async fn delete_appointment(&self, id: i64) -> Result<bool> {
        self.delete_appointment_impl(id).await
    }

    // 上课记录模块
    async fn mark_attendance(
        &self,
        teacher_id: i64,
        req: MarkAttendanceRequest,
    ) -> Result<ClassAttendanceRecord> {
        self.mark_attendance_impl(teacher_id, req).await
    }

    async fn check_if_class_marked(
        &self,
        teacher_id: i64,
        student_id: i64,
        subject_id: i64,
        class_date: chrono::NaiveDate,
    ) -> Result<bool> {
        self.check_if_class_marked_impl(teacher_id, student_id, subject_id, class_date)
            .await
    }

    async fn list_attendance_with_pagination(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse> {
        self.list_attendance_with_pagination_impl(query).await
    }

    async fn list_attendance_in_range(
        &self,
        teacher_id: Option<i64>,
        student_id: Option<i64>,
        start_date: Option<chrono::NaiveDate>,
        end_date: Option<chrono::NaiveDate>,
    ) -> Result<Vec<ClassAttendanceRecord>> {
        self.list_attendance_in_range_impl(teacher_id, student_id, start_date, end_date)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appointments::entities::AppointmentStatus;
    use crate::models::attendance::entities::ClassDuration;
    use crate::models::timetables::entities::DayOfWeek;
    use crate::models::users::entities::{UserProfile, UserRole};
    use chrono::NaiveDate;

    async fn setup() -> SeaOrmStorage {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        Migrator::up(&db, None).await.expect("migrations");
        SeaOrmStorage::from_connection(db)
    }

    async fn seed_user(storage: &SeaOrmStorage, username: &str, role: UserRole) -> User {
        storage
            .create_user(CreateUserRequest {
                username: username.to_string(),
                email: format!("{username}@example.com"),
                password: "$argon2id$fake".to_string(),
                role,
                profile: UserProfile {
                    profile_name: username.to_string(),
                    avatar_url: None,
                },
            })
            .await
            .expect("seed user")
    }

    async fn seed_subject(storage: &SeaOrmStorage, name: &str) -> Subject {
        storage
            .create_subject(CreateSubjectRequest {
                name: name.to_string(),
                description: None,
            })
            .await
            .expect("seed subject")
    }

    fn entry_request(
        student_id: i64,
        teacher_id: i64,
        subject_id: i64,
        day_of_week: DayOfWeek,
        start_time: &str,
        end_time: &str,
    ) -> CreateTimetableEntryRequest {
        CreateTimetableEntryRequest {
            student_id,
            teacher_id,
            subject_id,
            day_of_week,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_overlapping_timetable_entry_rejected() {
        let storage = setup().await;
        let student = seed_user(&storage, "student1", UserRole::Student).await;
        let teacher = seed_user(&storage, "teacher1", UserRole::Teacher).await;
        let other_teacher = seed_user(&storage, "teacher2", UserRole::Teacher).await;
        let subject = seed_subject(&storage, "Math").await;

        storage
            .create_timetable_entry(entry_request(
                student.id,
                teacher.id,
                subject.id,
                DayOfWeek::Monday,
                "09:00",
                "10:00",
            ))
            .await
            .expect("first entry");

        // 同一学生在周一 09:30-10:30，哪怕教师不同也冲突
        let err = storage
            .create_timetable_entry(entry_request(
                student.id,
                other_teacher.id,
                subject.id,
                DayOfWeek::Monday,
                "09:30",
                "10:30",
            ))
            .await
            .expect_err("overlapping slot must be rejected");
        assert!(err.is_conflict());
        assert!(err.message().contains("overlaps"));
    }

    #[tokio::test]
    async fn test_touching_slots_do_not_conflict() {
        let storage = setup().await;
        let student = seed_user(&storage, "student1", UserRole::Student).await;
        let teacher = seed_user(&storage, "teacher1", UserRole::Teacher).await;
        let subject = seed_subject(&storage, "Math").await;

        storage
            .create_timetable_entry(entry_request(
                student.id,
                teacher.id,
                subject.id,
                DayOfWeek::Monday,
                "09:00",
                "10:00",
            ))
            .await
            .expect("first entry");

        // 半开区间：10:00 结束和 10:00 开始不算重叠
        storage
            .create_timetable_entry(entry_request(
                student.id,
                teacher.id,
                subject.id,
                DayOfWeek::Monday,
                "10:00",
                "11:00",
            ))
            .await
            .expect("touching slot must be accepted");
    }

    #[tokio::test]
    async fn test_bulk_create_is_all_or_nothing() {
        let storage = setup().await;
        let student = seed_user(&storage, "student1", UserRole::Student).await;
        let teacher = seed_user(&storage, "teacher1", UserRole::Teacher).await;
        let subject = seed_subject(&storage, "Math").await;

        // 已有周二 09:00-10:00，批量里的第二条与之冲突
        storage
            .create_timetable_entry(entry_request(
                student.id,
                teacher.id,
                subject.id,
                DayOfWeek::Tuesday,
                "09:00",
                "10:00",
            ))
            .await
            .expect("existing entry");

        let slots = vec![
            TimetableSlotRequest {
                teacher_id: teacher.id,
                subject_id: subject.id,
                day_of_week: DayOfWeek::Monday,
                start_time: "09:00".to_string(),
                end_time: "10:00".to_string(),
                notes: None,
            },
            TimetableSlotRequest {
                teacher_id: teacher.id,
                subject_id: subject.id,
                day_of_week: DayOfWeek::Tuesday,
                start_time: "09:30".to_string(),
                end_time: "10:30".to_string(),
                notes: None,
            },
        ];
        let err = storage
            .bulk_create_timetable_entries(student.id, slots)
            .await
            .expect_err("conflicting batch must fail");
        assert!(err.is_conflict());

        // 事务回滚后周一的那条也不应出现
        let query = TimetableListQuery {
            student_id: Some(student.id),
            ..Default::default()
        };
        let listed = storage
            .list_timetable_entries_with_pagination(query)
            .await
            .expect("list entries");
        assert_eq!(listed.items.len(), 1);
        assert_eq!(listed.items[0].day_of_week, DayOfWeek::Tuesday);
    }

    #[tokio::test]
    async fn test_update_excludes_own_row_from_conflict_check() {
        let storage = setup().await;
        let student = seed_user(&storage, "student1", UserRole::Student).await;
        let teacher = seed_user(&storage, "teacher1", UserRole::Teacher).await;
        let subject = seed_subject(&storage, "Math").await;

        let entry = storage
            .create_timetable_entry(entry_request(
                student.id,
                teacher.id,
                subject.id,
                DayOfWeek::Monday,
                "09:00",
                "10:00",
            ))
            .await
            .expect("entry");

        // 时段缩短，仍与旧时段重叠，但不能跟自己判冲突
        let updated = storage
            .update_timetable_entry(
                entry.id,
                UpdateTimetableEntryRequest {
                    teacher_id: None,
                    subject_id: None,
                    day_of_week: None,
                    start_time: Some("09:15".to_string()),
                    end_time: Some("09:45".to_string()),
                    notes: None,
                    is_active: None,
                },
            )
            .await
            .expect("update must not conflict with itself")
            .expect("entry exists");
        assert_eq!(updated.start_time, "09:15");
        assert_eq!(updated.end_time, "09:45");
    }

    #[tokio::test]
    async fn test_soft_deleted_entry_frees_the_slot() {
        let storage = setup().await;
        let student = seed_user(&storage, "student1", UserRole::Student).await;
        let teacher = seed_user(&storage, "teacher1", UserRole::Teacher).await;
        let subject = seed_subject(&storage, "Math").await;

        let entry = storage
            .create_timetable_entry(entry_request(
                student.id,
                teacher.id,
                subject.id,
                DayOfWeek::Monday,
                "09:00",
                "10:00",
            ))
            .await
            .expect("entry");
        assert!(
            storage
                .delete_timetable_entry(entry.id)
                .await
                .expect("delete")
        );

        storage
            .create_timetable_entry(entry_request(
                student.id,
                teacher.id,
                subject.id,
                DayOfWeek::Monday,
                "09:00",
                "10:00",
            ))
            .await
            .expect("slot freed by soft delete");
    }

    #[tokio::test]
    async fn test_duplicate_attendance_mark_rejected() {
        let storage = setup().await;
        let student = seed_user(&storage, "student1", UserRole::Student).await;
        let teacher = seed_user(&storage, "teacher1", UserRole::Teacher).await;
        let subject = seed_subject(&storage, "Math").await;
        let class_date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

        let mark = MarkAttendanceRequest {
            student_id: student.id,
            subject_id: subject.id,
            timetable_id: None,
            class_date,
            start_time: "09:00".to_string(),
            duration: ClassDuration::Hr1,
            notes: None,
        };
        storage
            .mark_attendance(teacher.id, mark.clone())
            .await
            .expect("first mark");

        assert!(
            storage
                .check_if_class_marked(teacher.id, student.id, subject.id, class_date)
                .await
                .expect("check marked")
        );

        let err = storage
            .mark_attendance(teacher.id, mark)
            .await
            .expect_err("second mark for the same class day must fail");
        assert!(err.is_conflict());
        assert!(err.message().contains("already marked"));
    }

    #[tokio::test]
    async fn test_overlapping_appointment_rejected_across_participants() {
        let storage = setup().await;
        let student_a = seed_user(&storage, "student1", UserRole::Student).await;
        let student_b = seed_user(&storage, "student2", UserRole::Student).await;
        let teacher = seed_user(&storage, "teacher1", UserRole::Teacher).await;

        let start = chrono::Utc::now() + chrono::TimeDelta::days(1);
        let end = start + chrono::TimeDelta::hours(1);
        storage
            .create_appointment(CreateAppointmentRequest {
                student_id: student_a.id,
                teacher_id: teacher.id,
                start_time: start,
                end_time: end,
                notes: None,
            })
            .await
            .expect("first appointment");

        // 不同学生但同一教师，时间交叠
        let err = storage
            .create_appointment(CreateAppointmentRequest {
                student_id: student_b.id,
                teacher_id: teacher.id,
                start_time: start + chrono::TimeDelta::minutes(30),
                end_time: end + chrono::TimeDelta::minutes(30),
                notes: None,
            })
            .await
            .expect_err("teacher double-booking must fail");
        assert!(err.is_conflict());
        assert!(err.message().contains("overlap"));

        // 首尾相接不算重叠
        storage
            .create_appointment(CreateAppointmentRequest {
                student_id: student_b.id,
                teacher_id: teacher.id,
                start_time: end,
                end_time: end + chrono::TimeDelta::hours(1),
                notes: None,
            })
            .await
            .expect("touching appointment must be accepted");
    }

    #[tokio::test]
    async fn test_appointment_conflict_matches_participants_across_roles() {
        let storage = setup().await;
        let student = seed_user(&storage, "student1", UserRole::Student).await;
        let tutor = seed_user(&storage, "tutor1", UserRole::Teacher).await;
        let mentor = seed_user(&storage, "mentor1", UserRole::Teacher).await;

        let start = chrono::Utc::now() + chrono::TimeDelta::days(1);
        let end = start + chrono::TimeDelta::hours(1);
        storage
            .create_appointment(CreateAppointmentRequest {
                student_id: student.id,
                teacher_id: tutor.id,
                start_time: start,
                end_time: end,
                notes: None,
            })
            .await
            .expect("first appointment");

        // tutor1 自己作为学员去约 mentor1，与他已有的授课预约交叠
        let err = storage
            .create_appointment(CreateAppointmentRequest {
                student_id: tutor.id,
                teacher_id: mentor.id,
                start_time: start + chrono::TimeDelta::minutes(30),
                end_time: end + chrono::TimeDelta::minutes(30),
                notes: None,
            })
            .await
            .expect_err("participant busy in another role must be rejected");
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_completed_appointment_still_occupies_the_slot() {
        let storage = setup().await;
        let student = seed_user(&storage, "student1", UserRole::Student).await;
        let teacher = seed_user(&storage, "teacher1", UserRole::Teacher).await;

        let start = chrono::Utc::now() + chrono::TimeDelta::days(1);
        let end = start + chrono::TimeDelta::hours(1);
        let appointment = storage
            .create_appointment(CreateAppointmentRequest {
                student_id: student.id,
                teacher_id: teacher.id,
                start_time: start,
                end_time: end,
                notes: None,
            })
            .await
            .expect("appointment");

        storage
            .update_appointment(
                appointment.id,
                UpdateAppointmentRequest {
                    status: Some(AppointmentStatus::Completed),
                    punch_in_time: None,
                    start_time: None,
                    end_time: None,
                    notes: None,
                },
            )
            .await
            .expect("complete appointment")
            .expect("appointment exists");

        // 未删除的预约无论状态都占用时段
        let err = storage
            .create_appointment(CreateAppointmentRequest {
                student_id: student.id,
                teacher_id: teacher.id,
                start_time: start,
                end_time: end,
                notes: None,
            })
            .await
            .expect_err("completed but undeleted appointment must still block");
        assert!(err.is_conflict());

        // 删除后时段才释放
        assert!(
            storage
                .delete_appointment(appointment.id)
                .await
                .expect("delete appointment")
        );
        storage
            .create_appointment(CreateAppointmentRequest {
                student_id: student.id,
                teacher_id: teacher.id,
                start_time: start,
                end_time: end,
                notes: None,
            })
            .await
            .expect("deleted appointment frees the slot");
    }

    #[tokio::test]
    async fn test_timetable_allows_teacher_parallel_across_students() {
        let storage = setup().await;
        let student_a = seed_user(&storage, "student1", UserRole::Student).await;
        let student_b = seed_user(&storage, "student2", UserRole::Student).await;
        let teacher = seed_user(&storage, "teacher1", UserRole::Teacher).await;
        let subject = seed_subject(&storage, "Math").await;

        storage
            .create_timetable_entry(entry_request(
                student_a.id,
                teacher.id,
                subject.id,
                DayOfWeek::Monday,
                "09:00",
                "10:00",
            ))
            .await
            .expect("first student's entry");

        // 周课表冲突只约束学生本人，同一教师可以给不同学生排同一时段
        storage
            .create_timetable_entry(entry_request(
                student_b.id,
                teacher.id,
                subject.id,
                DayOfWeek::Monday,
                "09:00",
                "10:00",
            ))
            .await
            .expect("same slot for another student must be accepted");
    }
}
