use crate::models::{FolderMetadata, Metadata, Note, PUBLISH_KEY};

/// Resolves `note.is_public`: a boolean `publish` on the note wins, then one on
/// the note's immediate parent folder, otherwise the note stays private.
pub fn determine_is_public(note: &mut Note, folders: &FolderMetadata) {
    note.is_public = resolve(note, folders);
}

fn resolve(note: &Note, folders: &FolderMetadata) -> bool {
    if let Some(publish) = publish_flag(&note.metadata) {
        tracing::debug!(slug = %note.slug, publish, "visibility set by note metadata");
        return publish;
    }

    let Some(folder) = folder_path(&note.slug) else {
        tracing::debug!(slug = %note.slug, "no parent folder, note is private");
        return false;
    };

    // Exact match on the immediate parent only; ancestors are not consulted.
    match folders.get(folder).and_then(publish_flag) {
        Some(publish) => {
            tracing::debug!(slug = %note.slug, folder, publish, "visibility set by folder metadata");
            publish
        }
        None => {
            tracing::debug!(slug = %note.slug, folder, "no publish flag found, note is private");
            false
        }
    }
}

/// Returns the `publish` flag only when it is a real boolean. Any other value
/// type counts as absent.
pub fn publish_flag(metadata: &Metadata) -> Option<bool> {
    metadata.get(PUBLISH_KEY).and_then(serde_json::Value::as_bool)
}

/// Parent folder of a slug, or `None` for a single-segment slug.
pub fn folder_path(slug: &str) -> Option<&str> {
    slug.trim_matches('/')
        .rsplit_once('/')
        .map(|(folder, _)| folder)
}
