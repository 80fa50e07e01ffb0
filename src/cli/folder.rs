use crate::services::visibility;
use crate::Config;
use anyhow::Result;

pub fn run(config: &Config, slug: &str) -> Result<()> {
    match visibility::folder_path(slug) {
        Some(folder) => {
            if !config.folders.contains_key(folder) {
                tracing::info!("No metadata configured for folder '{}'", folder);
            }
            println!("{}", folder);
        }
        None => tracing::info!("Slug '{}' has no parent folder", slug),
    }

    Ok(())
}
