use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{CategoryRequest, CategoryResponse};
use crate::domain::{normalized_name, Category, DomainError};
use crate::error::AppResult;
use crate::infrastructure::repositories::CategoryRepository;

#[derive(Clone)]
pub struct CategoryService {
    category_repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(category_repo: Arc<dyn CategoryRepository>) -> Self {
        Self { category_repo }
    }

    pub async fn list(&self) -> AppResult<Vec<CategoryResponse>> {
        let categories = self.category_repo.find_all().await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<CategoryResponse> {
        let category = self
            .category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::category_not_found(id))?;

        Ok(category.into())
    }

    pub async fn create(
        &self,
        request: CategoryRequest,
        actor: &str,
    ) -> AppResult<CategoryResponse> {
        request.validate()?;
        let name = normalized_name(&request.name)?;
        self.ensure_name_available(&name, None).await?;

        let created = self
            .category_repo
            .create(&Category::new(name, request.description))
            .await?;

        info!(category_id = %created.id, actor = %actor, "category created");
        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: CategoryRequest,
        actor: &str,
    ) -> AppResult<CategoryResponse> {
        request.validate()?;

        let mut existing = self
            .category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::category_not_found(id))?;

        let name = normalized_name(&request.name)?;
        self.ensure_name_available(&name, Some(id)).await?;

        existing.rename(name, request.description);
        let updated = self.category_repo.update(&existing).await?;

        info!(category_id = %id, actor = %actor, "category updated");
        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid, actor: &str) -> AppResult<()> {
        if !self.category_repo.delete(id).await? {
            return Err(DomainError::category_not_found(id).into());
        }

        info!(category_id = %id, actor = %actor, "category deleted");
        Ok(())
    }

    async fn ensure_name_available(&self, name: &str, current_id: Option<Uuid>) -> AppResult<()> {
        match self.category_repo.find_by_name(name).await? {
            Some(other) if Some(other.id) != current_id => Err(DomainError::Conflict(
                "category name already exists".to_string(),
            )
            .into()),
            _ => Ok(()),
        }
    }
}
