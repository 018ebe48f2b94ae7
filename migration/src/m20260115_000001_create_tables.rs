use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::ProfileName).string().null())
                    .col(ColumnDef::new(Users::AvatarUrl).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Subjects::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Subjects::Description).text().null())
                    .col(
                        ColumnDef::new(Subjects::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Subjects::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程表（每周固定时段）
        manager
            .create_table(
                Table::create()
                    .table(TimetableEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TimetableEntries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::DayOfWeek)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::StartTime)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::EndTime)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TimetableEntries::Notes).text().null())
                    .col(
                        ColumnDef::new(TimetableEntries::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::DeletedAt)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TimetableEntries::Table, TimetableEntries::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TimetableEntries::Table, TimetableEntries::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TimetableEntries::Table, TimetableEntries::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建预约表（一次性课程）
        manager
            .create_table(
                Table::create()
                    .table(Appointments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Appointments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Appointments::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Appointments::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Appointments::StartTime)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Appointments::EndTime)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Appointments::Status).string().not_null())
                    .col(ColumnDef::new(Appointments::Notes).text().null())
                    .col(
                        ColumnDef::new(Appointments::PunchInTime)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Appointments::DeletedAt)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Appointments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Appointments::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Appointments::Table, Appointments::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Appointments::Table, Appointments::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建上课记录表
        manager
            .create_table(
                Table::create()
                    .table(ClassAttendanceRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassAttendanceRecords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassAttendanceRecords::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassAttendanceRecords::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassAttendanceRecords::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassAttendanceRecords::TimetableId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ClassAttendanceRecords::ClassDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassAttendanceRecords::StartTime)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassAttendanceRecords::Duration)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassAttendanceRecords::Notes).text().null())
                    .col(
                        ColumnDef::new(ClassAttendanceRecords::MarkedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ClassAttendanceRecords::Table,
                                ClassAttendanceRecords::TeacherId,
                            )
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ClassAttendanceRecords::Table,
                                ClassAttendanceRecords::StudentId,
                            )
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ClassAttendanceRecords::Table,
                                ClassAttendanceRecords::SubjectId,
                            )
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 用户表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await?;

        // 课程表索引：冲突检查按（学生，星期）加载
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_timetable_student_day")
                    .table(TimetableEntries::Table)
                    .col(TimetableEntries::StudentId)
                    .col(TimetableEntries::DayOfWeek)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_timetable_teacher_id")
                    .table(TimetableEntries::Table)
                    .col(TimetableEntries::TeacherId)
                    .to_owned(),
            )
            .await?;

        // 预约表索引：冲突检查匹配任一参与者
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_appointments_student_id")
                    .table(Appointments::Table)
                    .col(Appointments::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_appointments_teacher_id")
                    .table(Appointments::Table)
                    .col(Appointments::TeacherId)
                    .to_owned(),
            )
            .await?;

        // 上课记录表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendance_teacher_date")
                    .table(ClassAttendanceRecords::Table)
                    .col(ClassAttendanceRecords::TeacherId)
                    .col(ClassAttendanceRecords::ClassDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendance_student_date")
                    .table(ClassAttendanceRecords::Table)
                    .col(ClassAttendanceRecords::StudentId)
                    .col(ClassAttendanceRecords::ClassDate)
                    .to_owned(),
            )
            .await?;

        // 唯一索引：同一（教师，学生，科目，日期）最多一条记录，
        // 使并发的重复打卡在数据库层面原子地失败
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_attendance_per_class_day")
                    .table(ClassAttendanceRecords::Table)
                    .col(ClassAttendanceRecords::TeacherId)
                    .col(ClassAttendanceRecords::StudentId)
                    .col(ClassAttendanceRecords::SubjectId)
                    .col(ClassAttendanceRecords::ClassDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(ClassAttendanceRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Appointments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TimetableEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    ProfileName,
    AvatarUrl,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TimetableEntries {
    #[sea_orm(iden = "timetable_entries")]
    Table,
    Id,
    StudentId,
    TeacherId,
    SubjectId,
    DayOfWeek,
    StartTime,
    EndTime,
    Notes,
    IsActive,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Appointments {
    #[sea_orm(iden = "appointments")]
    Table,
    Id,
    StudentId,
    TeacherId,
    StartTime,
    EndTime,
    Status,
    Notes,
    PunchInTime,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ClassAttendanceRecords {
    #[sea_orm(iden = "class_attendance_records")]
    Table,
    Id,
    TeacherId,
    StudentId,
    SubjectId,
    TimetableId,
    ClassDate,
    StartTime,
    Duration,
    Notes,
    MarkedAt,
}
