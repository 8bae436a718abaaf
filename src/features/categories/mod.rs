pub mod dtos;
pub mod models;
pub mod service;

pub use dtos::CategoryPayload;
pub use models::Category;
pub use service::CategoryService;
