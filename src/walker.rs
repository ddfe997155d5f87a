use ignore::WalkBuilder;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::InputSpec;

fn has_wanted_ext(path: &Path, exts: &[String]) -> bool {
    if exts.is_empty() {
        return true;
    }
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| {
            exts.iter()
                .any(|want| want.strip_prefix('.').unwrap_or(want.as_str()) == ext.as_ref())
        })
}

/// Walk the source directory of a normalized input section, respecting gitignore.
///
/// Yields files whose extension is listed in `input.exts`. An empty list
/// matches every file; the loader only leaves it empty when a custom
/// [`LanguageSupport`](crate::lang::LanguageSupport) has no default extensions.
pub fn walk_sources(input: &InputSpec) -> impl Iterator<Item = io::Result<PathBuf>> {
    let mut files = vec![];

    let walker = WalkBuilder::new(&input.dir)
        .hidden(true) // Skip hidden files
        .git_ignore(true) // Respect .gitignore
        .git_global(true)
        .git_exclude(true)
        .max_depth(if input.recursive { None } else { Some(1) })
        .build();

    for entry in walker {
        match entry {
            Ok(entry) => {
                let is_file = entry.file_type().map(|ft| ft.is_file()).unwrap_or(false);
                if is_file && has_wanted_ext(entry.path(), &input.exts) {
                    files.push(Ok(entry.into_path()));
                }
            }
            Err(e) => {
                files.push(Err(io::Error::other(e.to_string())));
            }
        }
    }

    files.into_iter()
}
