use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Category, Item};
use crate::error::AppResult;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Category>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>>;
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Category>>;
    async fn create(&self, category: &Category) -> AppResult<Category>;
    async fn update(&self, category: &Category) -> AppResult<Category>;
    /// Returns `false` when no row matched.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn find_all(&self, category_id: Option<Uuid>) -> AppResult<Vec<Item>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Item>>;
    async fn create(&self, item: &Item) -> AppResult<Item>;
    async fn update(&self, item: &Item) -> AppResult<Item>;
    /// Returns `false` when no row matched.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
