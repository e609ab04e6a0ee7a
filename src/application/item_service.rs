use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{ItemQueryParams, ItemRequest, ItemResponse};
use crate::domain::{normalized_name, DomainError, Item};
use crate::error::AppResult;
use crate::infrastructure::repositories::{CategoryRepository, ItemRepository};

#[derive(Clone)]
pub struct ItemService {
    item_repo: Arc<dyn ItemRepository>,
    category_repo: Arc<dyn CategoryRepository>,
}

impl ItemService {
    pub fn new(
        item_repo: Arc<dyn ItemRepository>,
        category_repo: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            item_repo,
            category_repo,
        }
    }

    pub async fn list(&self, params: ItemQueryParams) -> AppResult<Vec<ItemResponse>> {
        let items = self.item_repo.find_all(params.category_id).await?;
        Ok(items.into_iter().map(ItemResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<ItemResponse> {
        let item = self
            .item_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::item_not_found(id))?;

        Ok(item.into())
    }

    pub async fn create(&self, request: ItemRequest, actor: &str) -> AppResult<ItemResponse> {
        request.validate()?;
        self.ensure_category_exists(request.category_id).await?;

        let item = Item::new(
            normalized_name(&request.name)?,
            request.description,
            request.category_id,
        );
        let created = self.item_repo.create(&item).await?;

        info!(item_id = %created.id, actor = %actor, "item created");
        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: ItemRequest,
        actor: &str,
    ) -> AppResult<ItemResponse> {
        request.validate()?;

        let mut existing = self
            .item_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::item_not_found(id))?;

        self.ensure_category_exists(request.category_id).await?;

        existing.name = normalized_name(&request.name)?;
        existing.description = request.description;
        existing.category_id = request.category_id;
        existing.updated_at = Utc::now();

        let updated = self.item_repo.update(&existing).await?;

        info!(item_id = %id, actor = %actor, "item updated");
        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid, actor: &str) -> AppResult<()> {
        if !self.item_repo.delete(id).await? {
            return Err(DomainError::item_not_found(id).into());
        }

        info!(item_id = %id, actor = %actor, "item deleted");
        Ok(())
    }

    async fn ensure_category_exists(&self, category_id: Option<Uuid>) -> AppResult<()> {
        let Some(category_id) = category_id else {
            return Ok(());
        };

        if self.category_repo.find_by_id(category_id).await?.is_none() {
            return Err(DomainError::ValidationError(format!(
                "category {category_id} does not exist"
            ))
            .into());
        }
        Ok(())
    }
}
