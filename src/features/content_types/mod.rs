pub mod dtos;
pub mod models;
pub mod service;

pub use dtos::{CreateContentTypePayload, UpdateContentTypePayload};
pub use models::{ContentType, ContentTypeStatus};
pub use service::ContentTypeService;
