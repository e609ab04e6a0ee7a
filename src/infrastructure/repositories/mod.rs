mod category_repository;
mod item_repository;
mod traits;

pub use category_repository::CategoryRepositoryImpl;
pub use item_repository::ItemRepositoryImpl;
pub use traits::{CategoryRepository, ItemRepository};
