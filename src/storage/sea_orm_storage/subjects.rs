use super::SeaOrmStorage;
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::errors::{Result, TMSystemError};
use crate::models::{
    PaginationInfo,
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 创建科目（name 上有唯一索引，重名由数据库拦截）
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TMSystemError::database_operation(format!("创建科目失败: {e}")))?;

        Ok(result.into_subject())
    }

    /// 通过 ID 获取科目
    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TMSystemError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 通过名称获取科目
    pub async fn get_subject_by_name_impl(&self, name: &str) -> Result<Option<Subject>> {
        let result = Subjects::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| TMSystemError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 批量获取科目，返回 id -> Subject 映射
    pub async fn get_subjects_by_ids_impl(&self, ids: &[i64]) -> Result<HashMap<i64, Subject>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let result = Subjects::find()
            .filter(Column::Id.is_in(ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| TMSystemError::database_operation(format!("批量查询科目失败: {e}")))?;

        Ok(result
            .into_iter()
            .map(|m| {
                let subject = m.into_subject();
                (subject.id, subject)
            })
            .collect())
    }

    /// 分页列出科目
    pub async fn list_subjects_with_pagination_impl(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Subjects::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Name.contains(&escaped));
        }

        select = select.order_by_asc(Column::Name);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TMSystemError::database_operation(format!("查询科目总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| TMSystemError::database_operation(format!("查询科目页数失败: {e}")))?;

        let subjects = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TMSystemError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(SubjectListResponse {
            items: subjects.into_iter().map(|m| m.into_subject()).collect(),
            pagination: PaginationInfo::from_counts(page, size, total, pages),
        })
    }

    /// 更新科目
    pub async fn update_subject_impl(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let existing = self.get_subject_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TMSystemError::database_operation(format!("更新科目失败: {e}")))?;

        self.get_subject_by_id_impl(id).await
    }

    /// 删除科目
    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TMSystemError::database_operation(format!("删除科目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
