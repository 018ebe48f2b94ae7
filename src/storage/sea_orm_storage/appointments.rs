use super::SeaOrmStorage;
use crate::entity::appointments::{ActiveModel, Column, Entity as Appointments, Model};
use crate::errors::{Result, TMSystemError};
use crate::models::{
    PaginationInfo,
    appointments::{
        entities::{Appointment, AppointmentStatus},
        requests::{AppointmentListQuery, CreateAppointmentRequest, UpdateAppointmentRequest},
        responses::AppointmentListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionError, TransactionTrait,
};

/// 在同一连接/事务中查找与给定时间段冲突的预约
///
/// 冲突定义：新预约的任一参与者（学生或教师）出现在任何未删除预约的
/// 学生或教师字段中，且时间区间按半开区间 [start, end) 语义重叠
/// （SQL 谓词 start < e2 AND end > s2）。同一人可能在一条记录里当学生、
/// 在另一条里当教师，因此两个字段都要和两个参与者比对。已完成或已取消
/// 但未删除的预约同样占用时段，释放时段需要删除该预约。
async fn find_conflicting_appointment<C: ConnectionTrait>(
    conn: &C,
    student_id: i64,
    teacher_id: i64,
    start_time: i64,
    end_time: i64,
    exclude_id: Option<i64>,
) -> Result<Option<Model>> {
    let participants = [student_id, teacher_id];
    let mut select = Appointments::find()
        .filter(Column::DeletedAt.is_null())
        .filter(Column::StartTime.lt(end_time))
        .filter(Column::EndTime.gt(start_time))
        .filter(
            Condition::any()
                .add(Column::StudentId.is_in(participants))
                .add(Column::TeacherId.is_in(participants)),
        );

    if let Some(id) = exclude_id {
        select = select.filter(Column::Id.ne(id));
    }

    select
        .one(conn)
        .await
        .map_err(|e| TMSystemError::database_operation(format!("查询预约冲突失败: {e}")))
}

fn conflict_error(start: i64, end: i64, existing: &Model) -> TMSystemError {
    TMSystemError::schedule_conflict(format!(
        "requested appointment [{start}, {end}) overlaps existing appointment #{} ([{}, {}))",
        existing.id, existing.start_time, existing.end_time
    ))
}

fn unwrap_txn_error(e: TransactionError<TMSystemError>) -> TMSystemError {
    match e {
        TransactionError::Connection(err) => TMSystemError::from(err),
        TransactionError::Transaction(err) => err,
    }
}

impl SeaOrmStorage {
    /// 创建预约（事务内检查学生和教师双方的时间冲突）
    pub async fn create_appointment_impl(
        &self,
        req: CreateAppointmentRequest,
    ) -> Result<Appointment> {
        let result = self
            .db
            .transaction::<_, Model, TMSystemError>(move |txn| {
                Box::pin(async move {
                    let start = req.start_time.timestamp();
                    let end = req.end_time.timestamp();

                    if let Some(existing) = find_conflicting_appointment(
                        txn,
                        req.student_id,
                        req.teacher_id,
                        start,
                        end,
                        None,
                    )
                    .await?
                    {
                        return Err(conflict_error(start, end, &existing));
                    }

                    let now = chrono::Utc::now().timestamp();
                    let model = ActiveModel {
                        student_id: Set(req.student_id),
                        teacher_id: Set(req.teacher_id),
                        start_time: Set(start),
                        end_time: Set(end),
                        status: Set(AppointmentStatus::Scheduled.to_string()),
                        notes: Set(req.notes),
                        created_at: Set(now),
                        updated_at: Set(now),
                        ..Default::default()
                    };

                    model.insert(txn).await.map_err(|e| {
                        TMSystemError::database_operation(format!("创建预约失败: {e}"))
                    })
                })
            })
            .await
            .map_err(unwrap_txn_error)?;

        Ok(result.into_appointment())
    }

    /// 通过 ID 获取预约（不含已软删除）
    pub async fn get_appointment_by_id_impl(&self, id: i64) -> Result<Option<Appointment>> {
        let result = Appointments::find_by_id(id)
            .filter(Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(|e| TMSystemError::database_operation(format!("查询预约失败: {e}")))?;

        Ok(result.map(|m| m.into_appointment()))
    }

    /// 分页列出预约
    pub async fn list_appointments_with_pagination_impl(
        &self,
        query: AppointmentListQuery,
    ) -> Result<AppointmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Appointments::find().filter(Column::DeletedAt.is_null());

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::StartTime);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TMSystemError::database_operation(format!("查询预约总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| TMSystemError::database_operation(format!("查询预约页数失败: {e}")))?;

        let appointments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TMSystemError::database_operation(format!("查询预约列表失败: {e}")))?;

        Ok(AppointmentListResponse {
            items: appointments
                .into_iter()
                .map(|m| m.into_appointment())
                .collect(),
            pagination: PaginationInfo::from_counts(page, size, total, pages),
        })
    }

    /// 更新预约（状态流转、打卡、改期）
    ///
    /// 改期时在事务内重新做冲突检查（排除自身）。
    pub async fn update_appointment_impl(
        &self,
        id: i64,
        update: UpdateAppointmentRequest,
    ) -> Result<Option<Appointment>> {
        let result = self
            .db
            .transaction::<_, Option<Model>, TMSystemError>(move |txn| {
                Box::pin(async move {
                    let Some(existing) = Appointments::find_by_id(id)
                        .filter(Column::DeletedAt.is_null())
                        .one(txn)
                        .await
                        .map_err(|e| {
                            TMSystemError::database_operation(format!("查询预约失败: {e}"))
                        })?
                    else {
                        return Ok(None);
                    };

                    let start = update
                        .start_time
                        .map(|t| t.timestamp())
                        .unwrap_or(existing.start_time);
                    let end = update
                        .end_time
                        .map(|t| t.timestamp())
                        .unwrap_or(existing.end_time);
                    let rescheduled = start != existing.start_time || end != existing.end_time;

                    if rescheduled {
                        if let Some(conflicting) = find_conflicting_appointment(
                            txn,
                            existing.student_id,
                            existing.teacher_id,
                            start,
                            end,
                            Some(id),
                        )
                        .await?
                        {
                            return Err(conflict_error(start, end, &conflicting));
                        }
                    }

                    let mut model = ActiveModel {
                        id: Set(id),
                        updated_at: Set(chrono::Utc::now().timestamp()),
                        ..Default::default()
                    };

                    if let Some(status) = update.status {
                        model.status = Set(status.to_string());
                    }
                    if let Some(punch_in) = update.punch_in_time {
                        model.punch_in_time = Set(Some(punch_in.timestamp()));
                    }
                    if update.start_time.is_some() {
                        model.start_time = Set(start);
                    }
                    if update.end_time.is_some() {
                        model.end_time = Set(end);
                    }
                    if let Some(notes) = update.notes {
                        model.notes = Set(Some(notes));
                    }

                    let updated = model.update(txn).await.map_err(|e| {
                        TMSystemError::database_operation(format!("更新预约失败: {e}"))
                    })?;

                    Ok(Some(updated))
                })
            })
            .await
            .map_err(unwrap_txn_error)?;

        Ok(result.map(|m| m.into_appointment()))
    }

    /// 软删除预约
    pub async fn delete_appointment_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Appointments::update_many()
            .col_expr(Column::DeletedAt, sea_orm::sea_query::Expr::value(now))
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .filter(Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(|e| TMSystemError::database_operation(format!("删除预约失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
