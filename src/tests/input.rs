use super::{display_title, find_documents, load_document};
use crate::surface::Surface;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn exts() -> Vec<String> {
    vec!["md".to_string()]
}

#[test]
fn test_directory_scan_filters_and_sorts() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("b.md"), "# B").unwrap();
    fs::write(dir.path().join("a.md"), "# A").unwrap();
    fs::write(dir.path().join("skip.txt"), "nope").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("c.md"), "# C").unwrap();

    let docs = find_documents(vec![dir.path().to_path_buf()], &exts()).unwrap();
    let names: Vec<String> = docs
        .iter()
        .map(|p| p.strip_prefix(dir.path()).unwrap().display().to_string())
        .collect();
    assert_eq!(names.len(), 3);
    assert_eq!(names[0], "a.md");
    assert_eq!(names[1], "b.md");
    assert!(names[2].ends_with("c.md"));
}

#[cfg(unix)]
#[test]
fn test_symlink_loop_yields_each_file_once() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.md"), "# A").unwrap();
    std::os::unix::fs::symlink(dir.path(), dir.path().join("loop")).unwrap();

    let docs = find_documents(vec![dir.path().to_path_buf()], &exts()).unwrap();
    assert_eq!(docs, vec![dir.path().join("a.md")]);
}

#[test]
fn test_repeated_paths_are_listed_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.md");
    fs::write(&path, "# A").unwrap();
    fs::write(dir.path().join("b.md"), "# B").unwrap();

    let docs = find_documents(vec![path.clone(), dir.path().to_path_buf()], &exts()).unwrap();
    assert_eq!(docs, vec![path, dir.path().join("b.md")]);
}

#[test]
fn test_named_file_taken_regardless_of_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("outline.txt");
    fs::write(&path, "# A").unwrap();
    let docs = find_documents(vec![path.clone()], &exts()).unwrap();
    assert_eq!(docs, vec![path]);
}

#[test]
fn test_missing_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(find_documents(vec![dir.path().join("gone.md")], &exts()).is_err());
}

#[test]
fn test_load_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.md");
    fs::write(&path, "# A\nbody\n").unwrap();

    let doc = load_document(&path).unwrap();
    assert_eq!(doc.title(), "notes");
    assert_eq!(doc.line_count(), 3);
    assert_eq!(doc.path(), Some(path.as_path()));
    assert!(!doc.is_modified());
}

#[test]
fn test_display_title() {
    assert_eq!(display_title(Path::new("/tmp/Project Plan.md")), "Project Plan");
    assert_eq!(display_title(Path::new("README")), "README");
}
