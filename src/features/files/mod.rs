pub mod classify;
pub mod dtos;
pub mod models;
pub mod service;

pub use classify::{classify, summarize, FileKind, FileSummary};
pub use dtos::{FilesEnvelope, UploadFile, UploadRequest};
pub use models::{filter_files, FileFilter, FileObject, MetadataEntry};
pub use service::FileService;
