use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274C}";

/// GraphQL files found under a set of paths.
#[derive(Debug, Default)]
pub(crate) struct FoundFiles {
    pub errors: Vec<walkdir::Error>,
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
}

/// Recursively collect every file at or under `paths` whose extension is in
/// `file_exts`.
///
/// A single file path that doesn't match any extension is still returned, on
/// the assumption that the user named it explicitly.
pub(crate) fn find_graphql_files(paths: &[PathBuf], file_exts: &[String]) -> FoundFiles {
    let file_exts: HashSet<&str> =
        file_exts.iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

    log::debug!("Scanning {} input paths...", paths.len());
    let mut found = FoundFiles::default();
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if !entry.file_type().is_file() {
                        log::trace!("Skipping non-file: {path:#?}.");
                        continue;
                    }

                    let ext = path.extension().map(|s| s.to_string_lossy());
                    if ext.is_some_and(|ext| file_exts.contains(ext.as_ref())) {
                        log::trace!("Found GraphQL file at {path:#?}.");
                        found.file_paths.push(path.to_path_buf());
                    } else {
                        log::trace!("Skipping non-graphql file: {path:#?}.");
                        found.num_skipped += 1;
                    }
                },

                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    found.errors.push(e);
                },
            }
        }
    }

    if found.file_paths.is_empty()
        && paths.len() == 1
        && let Some(first_path) = paths.first()
        && first_path.is_file() {
        log::warn!(
            "Proceeding with {first_path:#?} even though it doesn't match any \
            of the --graphql-file-exts ({}).",
            file_exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped = found.num_skipped.saturating_sub(1);
        found.file_paths.push(first_path.to_path_buf());
    }

    found.file_paths.sort();
    log::debug!("Found {} GraphQL files.", found.file_paths.len());
    found
}
