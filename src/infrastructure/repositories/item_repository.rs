use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::Item;
use crate::error::AppResult;

use super::traits::ItemRepository;

const ITEM_COLUMNS: &str = "id, name, description, category_id, created_at, updated_at";

pub struct ItemRepositoryImpl {
    pool: PgPool,
}

impl ItemRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for ItemRepositoryImpl {
    async fn find_all(&self, category_id: Option<Uuid>) -> AppResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items
             WHERE ($1::uuid IS NULL OR category_id = $1)
             ORDER BY created_at DESC, id ASC"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Item>> {
        let item =
            sqlx::query_as::<_, Item>(&format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(item)
    }

    async fn create(&self, item: &Item) -> AppResult<Item> {
        let created = sqlx::query_as::<_, Item>(&format!(
            "INSERT INTO items (id, name, description, category_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {ITEM_COLUMNS}"
        ))
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.category_id)
        .bind(item.created_at)
        .bind(item.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update(&self, item: &Item) -> AppResult<Item> {
        let updated = sqlx::query_as::<_, Item>(&format!(
            "UPDATE items SET name = $2, description = $3, category_id = $4, updated_at = $5
             WHERE id = $1
             RETURNING {ITEM_COLUMNS}"
        ))
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.category_id)
        .bind(item.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
