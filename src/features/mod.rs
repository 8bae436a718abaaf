pub mod auth;
pub mod categories;
pub mod console;
pub mod content_types;
pub mod files;
pub mod forms;
pub mod subcategories;
