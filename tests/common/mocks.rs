use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use template_api::domain::{Category, Item};
use template_api::error::{AppError, AppResult};
use template_api::infrastructure::repositories::{CategoryRepository, ItemRepository};
use uuid::Uuid;

#[derive(Default)]
pub struct MockItemRepo {
    pub items: Arc<Mutex<Vec<Item>>>,
}

impl MockItemRepo {
    pub fn push(&self, item: Item) {
        self.items.lock().expect("items mutex poisoned").push(item);
    }

    pub fn snapshot(&self) -> Vec<Item> {
        self.items.lock().expect("items mutex poisoned").clone()
    }
}

#[async_trait]
impl ItemRepository for MockItemRepo {
    async fn find_all(&self, category_id: Option<Uuid>) -> AppResult<Vec<Item>> {
        let mut items: Vec<Item> = self
            .items
            .lock()
            .expect("items mutex poisoned")
            .iter()
            .filter(|item| category_id.map_or(true, |id| item.belongs_to(id)))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Item>> {
        Ok(self
            .items
            .lock()
            .expect("items mutex poisoned")
            .iter()
            .find(|item| item.id == id)
            .cloned())
    }

    async fn create(&self, item: &Item) -> AppResult<Item> {
        self.push(item.clone());
        Ok(item.clone())
    }

    async fn update(&self, item: &Item) -> AppResult<Item> {
        let mut items = self.items.lock().expect("items mutex poisoned");
        let existing = items
            .iter_mut()
            .find(|existing| existing.id == item.id)
            .ok_or_else(|| AppError::NotFound("item not found".to_string()))?;
        *existing = item.clone();
        Ok(item.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut items = self.items.lock().expect("items mutex poisoned");
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() != before)
    }
}

/// Shares the item store so deleting a category clears references the way
/// the `ON DELETE SET NULL` foreign key does.
#[derive(Default)]
pub struct MockCategoryRepo {
    pub categories: Mutex<Vec<Category>>,
    items: Arc<Mutex<Vec<Item>>>,
}

impl MockCategoryRepo {
    pub fn linked_to(items: &MockItemRepo) -> Self {
        Self {
            categories: Mutex::new(Vec::new()),
            items: items.items.clone(),
        }
    }

    pub fn push(&self, category: Category) {
        self.categories
            .lock()
            .expect("categories mutex poisoned")
            .push(category);
    }
}

#[async_trait]
impl CategoryRepository for MockCategoryRepo {
    async fn find_all(&self) -> AppResult<Vec<Category>> {
        let mut categories = self
            .categories
            .lock()
            .expect("categories mutex poisoned")
            .clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        Ok(self
            .categories
            .lock()
            .expect("categories mutex poisoned")
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Category>> {
        Ok(self
            .categories
            .lock()
            .expect("categories mutex poisoned")
            .iter()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn create(&self, category: &Category) -> AppResult<Category> {
        self.push(category.clone());
        Ok(category.clone())
    }

    async fn update(&self, category: &Category) -> AppResult<Category> {
        let mut categories = self.categories.lock().expect("categories mutex poisoned");
        let existing = categories
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or_else(|| AppError::NotFound("category not found".to_string()))?;
        *existing = category.clone();
        Ok(category.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let removed = {
            let mut categories = self.categories.lock().expect("categories mutex poisoned");
            let before = categories.len();
            categories.retain(|c| c.id != id);
            categories.len() != before
        };

        if removed {
            for item in self
                .items
                .lock()
                .expect("items mutex poisoned")
                .iter_mut()
                .filter(|item| item.belongs_to(id))
            {
                item.category_id = None;
            }
        }
        Ok(removed)
    }
}
