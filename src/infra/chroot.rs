//! SDK chroot lifecycle operations
//!
//! The chroot is created and destroyed by an external management command;
//! sdksweep never removes it with a raw recursive delete. This module also
//! carries the precondition check that the tool is not running inside the
//! chroot it is about to operate on.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::defaults::{CHROOT_VERSION_FILE, SDK_COMMAND};
use crate::error::ChrootError;

/// Fail fast when running inside the SDK chroot
pub fn ensure_outside_sdk_chroot() -> Result<(), ChrootError> {
    ensure_outside(Path::new(CHROOT_VERSION_FILE))
}

fn ensure_outside(marker: &Path) -> Result<(), ChrootError> {
    if marker.exists() {
        Err(ChrootError::InsideChroot)
    } else {
        Ok(())
    }
}

/// Handle on the external SDK chroot management command
#[derive(Debug)]
pub struct SdkChroot {
    command: PathBuf,
}

impl SdkChroot {
    /// Locate the management command in PATH
    pub fn locate() -> Result<Self, ChrootError> {
        let command = which::which(SDK_COMMAND).map_err(|_| ChrootError::CommandNotFound {
            command: SDK_COMMAND.to_string(),
        })?;
        Ok(Self { command })
    }

    /// Arguments for the delete action
    pub fn delete_args() -> Vec<&'static str> {
        vec!["--delete"]
    }

    /// Delete the chroot through the management command
    ///
    /// Invoked regardless of whether the chroot directory exists; the
    /// command also tears down mounts and locks that a plain directory
    /// check would miss. A failure exit propagates as fatal.
    pub fn delete(&self) -> Result<(), ChrootError> {
        let status = Command::new(&self.command)
            .args(Self::delete_args())
            .status()
            .map_err(|e| ChrootError::Spawn {
                command: SDK_COMMAND.to_string(),
                error: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ChrootError::DeleteFailed {
                command: SDK_COMMAND.to_string(),
                status: status.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_outside_chroot_when_marker_absent() {
        let dir = TempDir::new().unwrap();
        let marker = dir.path().join("sdk_chroot_version");

        assert!(ensure_outside(&marker).is_ok());
    }

    #[test]
    fn test_inside_chroot_when_marker_present() {
        let dir = TempDir::new().unwrap();
        let marker = dir.path().join("sdk_chroot_version");
        std::fs::write(&marker, "12\n").unwrap();

        let err = ensure_outside(&marker).unwrap_err();
        assert!(matches!(err, ChrootError::InsideChroot));
    }

    #[test]
    fn test_delete_args() {
        assert_eq!(SdkChroot::delete_args(), vec!["--delete"]);
    }
}
