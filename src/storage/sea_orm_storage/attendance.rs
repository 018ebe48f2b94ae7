use super::SeaOrmStorage;
use crate::entity::class_attendance_records::{
    ActiveModel, Column, Entity as AttendanceRecords, Model,
};
use crate::errors::{Result, TMSystemError};
use crate::models::{
    PaginationInfo,
    attendance::{
        entities::ClassAttendanceRecord,
        requests::{AttendanceListQuery, MarkAttendanceRequest},
        responses::AttendanceListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionError, TransactionTrait,
};

async fn is_marked<C: ConnectionTrait>(
    conn: &C,
    teacher_id: i64,
    student_id: i64,
    subject_id: i64,
    class_date: chrono::NaiveDate,
) -> Result<bool> {
    let count = AttendanceRecords::find()
        .filter(Column::TeacherId.eq(teacher_id))
        .filter(Column::StudentId.eq(student_id))
        .filter(Column::SubjectId.eq(subject_id))
        .filter(Column::ClassDate.eq(class_date))
        .count(conn)
        .await
        .map_err(|e| TMSystemError::database_operation(format!("查询打卡记录失败: {e}")))?;

    Ok(count > 0)
}

impl SeaOrmStorage {
    /// 教师打卡
    ///
    /// 事务内先查再插，(teacher, student, subject, class_date) 上的
    /// 唯一索引兜底并发下的重复插入，两条路径都映射为 ScheduleConflict。
    pub async fn mark_attendance_impl(
        &self,
        teacher_id: i64,
        req: MarkAttendanceRequest,
    ) -> Result<ClassAttendanceRecord> {
        let result = self
            .db
            .transaction::<_, Model, TMSystemError>(move |txn| {
                Box::pin(async move {
                    if is_marked(txn, teacher_id, req.student_id, req.subject_id, req.class_date)
                        .await?
                    {
                        return Err(TMSystemError::schedule_conflict(format!(
                            "attendance already marked for student {} subject {} on {}",
                            req.student_id, req.subject_id, req.class_date
                        )));
                    }

                    let model = ActiveModel {
                        teacher_id: Set(teacher_id),
                        student_id: Set(req.student_id),
                        subject_id: Set(req.subject_id),
                        timetable_id: Set(req.timetable_id),
                        class_date: Set(req.class_date),
                        start_time: Set(req.start_time),
                        duration: Set(req.duration.to_string()),
                        notes: Set(req.notes),
                        marked_at: Set(chrono::Utc::now().timestamp()),
                        ..Default::default()
                    };

                    model.insert(txn).await.map_err(|e| {
                        let msg = e.to_string();
                        if msg.contains("UNIQUE") || msg.contains("Duplicate") {
                            TMSystemError::schedule_conflict(format!(
                                "attendance already marked: {msg}"
                            ))
                        } else {
                            TMSystemError::database_operation(format!("写入打卡记录失败: {msg}"))
                        }
                    })
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(err) => TMSystemError::from(err),
                TransactionError::Transaction(err) => err,
            })?;

        Ok(result.into_attendance_record())
    }

    /// 查询某节课当天是否已打卡
    pub async fn check_if_class_marked_impl(
        &self,
        teacher_id: i64,
        student_id: i64,
        subject_id: i64,
        class_date: chrono::NaiveDate,
    ) -> Result<bool> {
        is_marked(&self.db, teacher_id, student_id, subject_id, class_date).await
    }

    /// 分页列出上课记录
    pub async fn list_attendance_with_pagination_impl(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = AttendanceRecords::find();

        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        if let Some(start_date) = query.start_date {
            select = select.filter(Column::ClassDate.gte(start_date));
        }

        if let Some(end_date) = query.end_date {
            select = select.filter(Column::ClassDate.lte(end_date));
        }

        select = select
            .order_by_desc(Column::ClassDate)
            .order_by_desc(Column::MarkedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            TMSystemError::database_operation(format!("查询上课记录总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            TMSystemError::database_operation(format!("查询上课记录页数失败: {e}"))
        })?;

        let records = paginator.fetch_page(page - 1).await.map_err(|e| {
            TMSystemError::database_operation(format!("查询上课记录列表失败: {e}"))
        })?;

        Ok(AttendanceListResponse {
            items: records
                .into_iter()
                .map(|m| m.into_attendance_record())
                .collect(),
            pagination: PaginationInfo::from_counts(page, size, total, pages),
        })
    }

    /// 列出日期范围内的上课记录（分析模块用，不分页）
    pub async fn list_attendance_in_range_impl(
        &self,
        teacher_id: Option<i64>,
        student_id: Option<i64>,
        start_date: Option<chrono::NaiveDate>,
        end_date: Option<chrono::NaiveDate>,
    ) -> Result<Vec<ClassAttendanceRecord>> {
        let mut select = AttendanceRecords::find();

        if let Some(teacher_id) = teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        if let Some(student_id) = student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(start_date) = start_date {
            select = select.filter(Column::ClassDate.gte(start_date));
        }

        if let Some(end_date) = end_date {
            select = select.filter(Column::ClassDate.lte(end_date));
        }

        let records = select
            .order_by_asc(Column::ClassDate)
            .all(&self.db)
            .await
            .map_err(|e| {
                TMSystemError::database_operation(format!("查询上课记录失败: {e}"))
            })?;

        Ok(records
            .into_iter()
            .map(|m| m.into_attendance_record())
            .collect())
    }
}
