use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Normalize `--graphql-file-exts` values to bare, lowercase extensions.
pub(crate) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

pub(crate) fn has_graphql_ext(path: &Path, exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| exts.contains(&ext))
}

/// Find all GraphQL files recursively located at or under each of `paths`.
///
/// A single file path passed on its own is returned even when its extension
/// is not one of `exts`.
pub(crate) fn find_graphql_files(
    paths: &[PathBuf],
    exts: &[String],
) -> anyhow::Result<Vec<PathBuf>> {
    let exts = normalize_exts(exts);
    log::debug!("Scanning {} input paths...", paths.len());

    let mut num_skipped = 0;
    let mut file_paths = vec![];
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = entry.with_context(|| format!(
                "Failed to scan {}",
                path.display(),
            ))?;
            let entry_path = entry.path();
            if entry.file_type().is_file() && has_graphql_ext(entry_path, &exts) {
                log::trace!("Found GraphQL file at {entry_path:#?}.");
                file_paths.push(canonicalize(entry_path)?);
            } else {
                log::trace!("Skipping {entry_path:#?}.");
                num_skipped += 1;
            }
        }
    }

    if file_paths.is_empty()
        && let [only_path] = paths
        && only_path.is_file() {
        let only_path = canonicalize(only_path)?;
        log::warn!(
            "Proceeding with {only_path:#?} even though it doesn't match any of \
            the --graphql-file-exts ({}).",
            exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        file_paths.push(only_path);
    }

    log::debug!(
        "Found {} GraphQL files, skipped {num_skipped} other entries.",
        file_paths.len(),
    );
    Ok(file_paths)
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve {}", path.display()))
}
