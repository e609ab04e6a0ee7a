mod category_service;
mod item_service;

pub use category_service::CategoryService;
pub use item_service::ItemService;
