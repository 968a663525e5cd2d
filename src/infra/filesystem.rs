//! Filesystem operations
//!
//! Recursive removal with privilege escalation, mount-point detection,
//! and glob expansion over board build roots.

use std::io::ErrorKind;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::FilesystemError;

/// Remove a directory tree, treating a missing path as already clean
///
/// Chroot-owned trees contain files the invoking user cannot remove;
/// on a permission error the removal is retried through `sudo rm -rf`.
/// Returns `true` if anything was removed.
pub fn remove_tree(path: &Path) -> Result<bool, FilesystemError> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => remove_tree_sudo(path),
        Err(e) => Err(FilesystemError::RemoveDir {
            path: path.to_path_buf(),
            error: e.to_string(),
        }),
    }
}

fn remove_tree_sudo(path: &Path) -> Result<bool, FilesystemError> {
    tracing::debug!(path = %path.display(), "Escalating removal through sudo");
    let status = Command::new("sudo")
        .arg("--")
        .arg("rm")
        .arg("-rf")
        .arg(path)
        .status()
        .map_err(|e| FilesystemError::RemoveDir {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

    if status.success() {
        Ok(true)
    } else {
        Err(FilesystemError::RemoveDir {
            path: path.to_path_buf(),
            error: format!("sudo rm -rf exited with {status}"),
        })
    }
}

/// Test whether a path is a filesystem mount point
///
/// A directory is a mount point when it sits on a different device than
/// its parent, or is the root of its filesystem. Symlinks and missing
/// paths are never mount points.
pub fn is_mount_point(path: &Path) -> bool {
    let Ok(meta) = path.symlink_metadata() else {
        return false;
    };
    if meta.is_symlink() {
        return false;
    }
    let Ok(parent_meta) = path.join("..").metadata() else {
        return false;
    };
    meta.dev() != parent_meta.dev() || meta.ino() == parent_meta.ino()
}

/// Expand a glob pattern into the paths currently matching it
///
/// A pattern matching nothing yields an empty list, not an error.
pub fn expand_pattern(pattern: &Path) -> Result<Vec<PathBuf>, FilesystemError> {
    let pattern_str = pattern.to_string_lossy();
    let entries = glob::glob(&pattern_str).map_err(|e| FilesystemError::Glob {
        pattern: pattern_str.to_string(),
        error: e.to_string(),
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| FilesystemError::Glob {
            pattern: pattern_str.to_string(),
            error: e.to_string(),
        })?;
        paths.push(path);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_remove_tree_removes_nested_content() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("portage");
        std::fs::create_dir_all(target.join("app-shells/bash")).unwrap();
        std::fs::write(target.join("app-shells/bash/work.log"), "log").unwrap();

        assert!(remove_tree(&target).unwrap());
        assert!(!target.exists());
    }

    #[test]
    fn test_remove_tree_missing_path_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("never-created");

        assert!(!remove_tree(&missing).unwrap());
    }

    #[test]
    fn test_remove_tree_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("cache");
        std::fs::create_dir_all(&target).unwrap();

        assert!(remove_tree(&target).unwrap());
        assert!(!remove_tree(&target).unwrap());
    }

    #[test]
    fn test_root_is_a_mount_point() {
        assert!(is_mount_point(Path::new("/")));
    }

    #[test]
    fn test_plain_directory_is_not_a_mount_point() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();

        assert!(!is_mount_point(&sub));
    }

    #[test]
    fn test_missing_path_is_not_a_mount_point() {
        assert!(!is_mount_point(Path::new("/no/such/path/anywhere")));
    }

    #[test]
    fn test_expand_pattern_matches_board_subdirs() {
        let dir = TempDir::new().unwrap();
        let build = dir.path().join("build");
        std::fs::create_dir_all(build.join("alpha/custom-packages")).unwrap();
        std::fs::create_dir_all(build.join("beta/custom-packages")).unwrap();
        std::fs::create_dir_all(build.join("gamma")).unwrap();

        let matches = expand_pattern(&build.join("*/custom-packages")).unwrap();

        assert_eq!(
            matches,
            vec![
                build.join("alpha/custom-packages"),
                build.join("beta/custom-packages"),
            ]
        );
    }

    #[test]
    fn test_expand_pattern_with_no_matches_is_empty() {
        let dir = TempDir::new().unwrap();

        let matches = expand_pattern(&dir.path().join("build/*/missing")).unwrap();

        assert!(matches.is_empty());
    }
}
