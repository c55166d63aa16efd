//! Locating documents on disk and loading them into editable surfaces.
//!
//! Paths given on the command line may be files or directories. Directories are walked
//! recursively and filtered by extension; explicitly named files are always taken. The walk
//! honours ignore files and skips hidden entries, and never follows symlinks.

use crate::document::TextDocument;
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Expands `paths` into the list of documents to open, in a stable order.
///
/// Each document appears once, at its first occurrence.
///
/// # Errors
///
/// Returns an error if a named path does not exist or a directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found = walk(&path, extensions)?;
            found.sort();
            documents.extend(found);
        } else if path.is_file() {
            documents.push(path);
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            ));
        }
    }

    let mut seen = HashSet::new();
    documents.retain(|p| seen.insert(p.clone()));
    Ok(documents)
}

fn walk(dir: &Path, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in WalkBuilder::new(dir).follow_links(false).build() {
        let entry = entry.map_err(io::Error::other)?;
        let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
        if is_file && has_extension(entry.path(), extensions) {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want == ext))
}

/// Reads `path` into a document titled by its file name.
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8.
pub fn load_document(path: &Path) -> io::Result<TextDocument> {
    let content = fs::read_to_string(path)?;
    Ok(TextDocument::new(display_title(path), &content).with_path(path.to_path_buf()))
}

/// Reads the current on-disk content of `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8.
pub fn read_text(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

#[must_use]
/// Title shown for a document: its file stem, like a note name.
pub fn display_title(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned())
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
