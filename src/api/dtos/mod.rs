pub mod category_dto;
pub mod item_dto;

pub use category_dto::*;
pub use item_dto::*;
