pub mod cli;
pub mod config;
pub mod models;
pub mod services;


pub use config::Config;
pub use models::{FolderMetadata, Metadata, Note};
