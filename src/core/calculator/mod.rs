pub mod summary;
pub mod timeline;
