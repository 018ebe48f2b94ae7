use super::SeaOrmStorage;
use crate::entity::timetable_entries::{ActiveModel, Column, Entity as TimetableEntries, Model};
use crate::errors::{Result, TMSystemError};
use crate::models::{
    PaginationInfo,
    timetables::{
        entities::TimetableEntry,
        requests::{
            CreateTimetableEntryRequest, TimetableListQuery, TimetableSlotRequest,
            UpdateTimetableEntryRequest,
        },
        responses::TimetableListResponse,
    },
};
use crate::utils::schedule::times_overlap;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionError, TransactionTrait,
};

/// 在同一连接/事务中查找与给定时段冲突的生效条目
///
/// 冲突只按（学生，星期）范围检查：同一学生同一天的生效条目时间区间
/// 按半开区间 [start, end) 语义重叠即为冲突。教师跨学生的并行排课
/// 不在此约束内。`exclude_id` 用于更新时排除自身。
async fn find_conflicting_entry<C: ConnectionTrait>(
    conn: &C,
    student_id: i64,
    day_of_week: &str,
    start_time: &str,
    end_time: &str,
    exclude_id: Option<i64>,
) -> Result<Option<Model>> {
    let mut select = TimetableEntries::find()
        .filter(Column::StudentId.eq(student_id))
        .filter(Column::DayOfWeek.eq(day_of_week))
        .filter(Column::IsActive.eq(true))
        .filter(Column::DeletedAt.is_null());

    if let Some(id) = exclude_id {
        select = select.filter(Column::Id.ne(id));
    }

    let candidates = select
        .all(conn)
        .await
        .map_err(|e| TMSystemError::database_operation(format!("查询课程表冲突失败: {e}")))?;

    // "HH:MM" 补零格式下字典序即时间序
    Ok(candidates
        .into_iter()
        .find(|m| times_overlap(start_time, end_time, &m.start_time, &m.end_time)))
}

fn conflict_error(start: &str, end: &str, existing: &Model) -> TMSystemError {
    let side = "existing timetable entry";
    TMSystemError::schedule_conflict(format!(
        "requested slot {}-{} overlaps {} #{} ({}-{}) on {}",
        start, end, side, existing.id, existing.start_time, existing.end_time, existing.day_of_week
    ))
}

async fn insert_entry<C: ConnectionTrait>(
    conn: &C,
    student_id: i64,
    req: &TimetableSlotRequest,
    now: i64,
) -> Result<Model> {
    let model = ActiveModel {
        student_id: Set(student_id),
        teacher_id: Set(req.teacher_id),
        subject_id: Set(req.subject_id),
        day_of_week: Set(req.day_of_week.to_string()),
        start_time: Set(req.start_time.clone()),
        end_time: Set(req.end_time.clone()),
        notes: Set(req.notes.clone()),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    model
        .insert(conn)
        .await
        .map_err(|e| TMSystemError::database_operation(format!("创建课程表条目失败: {e}")))
}

fn unwrap_txn_error(e: TransactionError<TMSystemError>) -> TMSystemError {
    match e {
        TransactionError::Connection(err) => TMSystemError::from(err),
        TransactionError::Transaction(err) => err,
    }
}

impl SeaOrmStorage {
    /// 创建课程表条目
    ///
    /// 冲突检查与插入在同一事务内完成，避免并发创建时检查通过后
    /// 又被其他请求插入冲突条目。
    pub async fn create_timetable_entry_impl(
        &self,
        req: CreateTimetableEntryRequest,
    ) -> Result<TimetableEntry> {
        let result = self
            .db
            .transaction::<_, Model, TMSystemError>(|txn| {
                Box::pin(async move {
                    let day = req.day_of_week.to_string();
                    if let Some(existing) = find_conflicting_entry(
                        txn,
                        req.student_id,
                        &day,
                        &req.start_time,
                        &req.end_time,
                        None,
                    )
                    .await?
                    {
                        return Err(conflict_error(&req.start_time, &req.end_time, &existing));
                    }

                    let slot = TimetableSlotRequest {
                        teacher_id: req.teacher_id,
                        subject_id: req.subject_id,
                        day_of_week: req.day_of_week,
                        start_time: req.start_time,
                        end_time: req.end_time,
                        notes: req.notes,
                    };
                    insert_entry(txn, req.student_id, &slot, chrono::Utc::now().timestamp()).await
                })
            })
            .await
            .map_err(unwrap_txn_error)?;

        Ok(result.into_timetable_entry())
    }

    /// 批量创建课程表条目（全部成功或全部失败）
    ///
    /// 请求内部的两两冲突由服务层先行校验，这里在事务内逐条检查
    /// 与已有数据的冲突；任何一条失败都会回滚整批。
    pub async fn bulk_create_timetable_entries_impl(
        &self,
        student_id: i64,
        entries: Vec<TimetableSlotRequest>,
    ) -> Result<Vec<TimetableEntry>> {
        let result = self
            .db
            .transaction::<_, Vec<Model>, TMSystemError>(move |txn| {
                Box::pin(async move {
                    let now = chrono::Utc::now().timestamp();
                    let mut created = Vec::with_capacity(entries.len());

                    for slot in &entries {
                        let day = slot.day_of_week.to_string();
                        if let Some(existing) = find_conflicting_entry(
                            txn,
                            student_id,
                            &day,
                            &slot.start_time,
                            &slot.end_time,
                            None,
                        )
                        .await?
                        {
                            return Err(conflict_error(&slot.start_time, &slot.end_time, &existing));
                        }

                        created.push(insert_entry(txn, student_id, slot, now).await?);
                    }

                    Ok(created)
                })
            })
            .await
            .map_err(unwrap_txn_error)?;

        Ok(result
            .into_iter()
            .map(|m| m.into_timetable_entry())
            .collect())
    }

    /// 通过 ID 获取课程表条目（不含已软删除）
    pub async fn get_timetable_entry_by_id_impl(&self, id: i64) -> Result<Option<TimetableEntry>> {
        let result = TimetableEntries::find_by_id(id)
            .filter(Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(|e| TMSystemError::database_operation(format!("查询课程表条目失败: {e}")))?;

        Ok(result.map(|m| m.into_timetable_entry()))
    }

    /// 分页列出课程表条目
    pub async fn list_timetable_entries_with_pagination_impl(
        &self,
        query: TimetableListQuery,
    ) -> Result<TimetableListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = TimetableEntries::find().filter(Column::DeletedAt.is_null());

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        if let Some(day) = query.day_of_week {
            select = select.filter(Column::DayOfWeek.eq(day.to_string()));
        }

        // day_of_week 是英文字符串，这里按字典序排列，只保证分页结果稳定；
        // 周一到周日的展示顺序由前端按星期枚举重排
        select = select
            .order_by_asc(Column::DayOfWeek)
            .order_by_asc(Column::StartTime);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            TMSystemError::database_operation(format!("查询课程表总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            TMSystemError::database_operation(format!("查询课程表页数失败: {e}"))
        })?;

        let entries = paginator.fetch_page(page - 1).await.map_err(|e| {
            TMSystemError::database_operation(format!("查询课程表列表失败: {e}"))
        })?;

        Ok(TimetableListResponse {
            items: entries.into_iter().map(|m| m.into_timetable_entry()).collect(),
            pagination: PaginationInfo::from_counts(page, size, total, pages),
        })
    }

    /// 更新课程表条目
    ///
    /// 时间或参与者发生变化时在事务内重新做冲突检查（排除自身），
    /// 仅停用 (is_active=false) 或改备注不触发检查。
    pub async fn update_timetable_entry_impl(
        &self,
        id: i64,
        update: UpdateTimetableEntryRequest,
    ) -> Result<Option<TimetableEntry>> {
        let result = self
            .db
            .transaction::<_, Option<Model>, TMSystemError>(move |txn| {
                Box::pin(async move {
                    let Some(existing) = TimetableEntries::find_by_id(id)
                        .filter(Column::DeletedAt.is_null())
                        .one(txn)
                        .await
                        .map_err(|e| {
                            TMSystemError::database_operation(format!("查询课程表条目失败: {e}"))
                        })?
                    else {
                        return Ok(None);
                    };

                    // 合并出更新后的有效值
                    let teacher_id = update.teacher_id.unwrap_or(existing.teacher_id);
                    let day_of_week = update
                        .day_of_week
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| existing.day_of_week.clone());
                    let start_time = update
                        .start_time
                        .clone()
                        .unwrap_or_else(|| existing.start_time.clone());
                    let end_time = update
                        .end_time
                        .clone()
                        .unwrap_or_else(|| existing.end_time.clone());
                    let will_be_active = update.is_active.unwrap_or(existing.is_active);

                    // 换教师不影响（学生，星期）范围内的冲突判定
                    let schedule_changed = day_of_week != existing.day_of_week
                        || start_time != existing.start_time
                        || end_time != existing.end_time;

                    if will_be_active
                        && (schedule_changed || (!existing.is_active && update.is_active == Some(true)))
                    {
                        if let Some(conflicting) = find_conflicting_entry(
                            txn,
                            existing.student_id,
                            &day_of_week,
                            &start_time,
                            &end_time,
                            Some(id),
                        )
                        .await?
                        {
                            return Err(conflict_error(&start_time, &end_time, &conflicting));
                        }
                    }

                    let mut model = ActiveModel {
                        id: Set(id),
                        updated_at: Set(chrono::Utc::now().timestamp()),
                        ..Default::default()
                    };

                    if update.teacher_id.is_some() {
                        model.teacher_id = Set(teacher_id);
                    }
                    if let Some(subject_id) = update.subject_id {
                        model.subject_id = Set(subject_id);
                    }
                    if update.day_of_week.is_some() {
                        model.day_of_week = Set(day_of_week);
                    }
                    if update.start_time.is_some() {
                        model.start_time = Set(start_time);
                    }
                    if update.end_time.is_some() {
                        model.end_time = Set(end_time);
                    }
                    if let Some(notes) = update.notes {
                        model.notes = Set(Some(notes));
                    }
                    if let Some(is_active) = update.is_active {
                        model.is_active = Set(is_active);
                    }

                    let updated = model.update(txn).await.map_err(|e| {
                        TMSystemError::database_operation(format!("更新课程表条目失败: {e}"))
                    })?;

                    Ok(Some(updated))
                })
            })
            .await
            .map_err(unwrap_txn_error)?;

        Ok(result.map(|m| m.into_timetable_entry()))
    }

    /// 软删除课程表条目（保留历史记录供分析模块使用）
    pub async fn delete_timetable_entry_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = TimetableEntries::update_many()
            .col_expr(Column::DeletedAt, sea_orm::sea_query::Expr::value(now))
            .col_expr(Column::IsActive, sea_orm::sea_query::Expr::value(false))
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .filter(Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(|e| TMSystemError::database_operation(format!("删除课程表条目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出教师的全部生效课程表条目
    pub async fn list_active_timetables_for_teacher_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<TimetableEntry>> {
        let entries = TimetableEntries::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .filter(Column::IsActive.eq(true))
            .filter(Column::DeletedAt.is_null())
            .order_by_asc(Column::DayOfWeek)
            .order_by_asc(Column::StartTime)
            .all(&self.db)
            .await
            .map_err(|e| {
                TMSystemError::database_operation(format!("查询教师课程表失败: {e}"))
            })?;

        Ok(entries.into_iter().map(|m| m.into_timetable_entry()).collect())
    }
}
