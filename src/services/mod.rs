pub mod slug;
pub mod visibility;

pub use slug::{build_slug, normalize_slug};
pub use visibility::{determine_is_public, folder_path, publish_flag};
