use crate::services::slug;
use anyhow::Result;

pub fn run(title: &str, explicit: &str) -> Result<()> {
    let result = slug::normalize_slug(explicit, title);
    if result.is_empty() {
        tracing::warn!("Title '{}' produced an empty slug", title);
    }
    println!("{}", result);
    Ok(())
}
