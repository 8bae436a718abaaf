pub mod dtos;
pub mod models;
pub mod service;

pub use dtos::SubCategoryPayload;
pub use models::SubCategory;
pub use service::SubCategoryService;
