use crate::models::{FolderMetadata, Note};
use crate::services::{slug, visibility};
use crate::Config;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

pub fn run(config: &Config, input: &Path) -> Result<()> {
    let raw = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Could not read notes from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Could not read notes from '{}'", input.display()))?
    };

    println!("{}", resolve_json(&raw, &config.folders)?);
    Ok(())
}

/// Accepts a single note object or an array of notes and returns the resolved
/// notes in the same shape, pretty-printed.
pub fn resolve_json(raw: &str, folders: &FolderMetadata) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(raw).context("Input is not valid JSON")?;

    let output = if value.is_array() {
        let mut notes: Vec<Note> =
            serde_json::from_value(value).context("Input array must contain note objects")?;
        for note in &mut notes {
            resolve_note(note, folders);
        }
        let public = notes.iter().filter(|n| n.is_public).count();
        tracing::info!("Resolved {} notes, {} public", notes.len(), public);
        serde_json::to_string_pretty(&notes)?
    } else {
        let mut note: Note =
            serde_json::from_value(value).context("Input must be a note object")?;
        resolve_note(&mut note, folders);
        serde_json::to_string_pretty(&note)?
    };

    Ok(output)
}

/// Slug first: the folder lookup depends on the normalized slug.
pub fn resolve_note(note: &mut Note, folders: &FolderMetadata) {
    slug::build_slug(note);
    visibility::determine_is_public(note, folders);
}
