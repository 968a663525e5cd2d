//! The cleaning pass
//!
//! A single linear pass over the enabled options, in a fixed order:
//! chroot, board roots, shared cache, deploy caches, flash cache, images,
//! incrementals, logs, workdirs. Each resolved path is either removed or,
//! in dry-run mode, reported with a `would have cleaned:` notice. The
//! chroot goes first since most of the other caches live inside it.

use std::path::{Path, PathBuf};

use crate::config::defaults::DEPLOY_CACHE_SUBDIRS;
use crate::core::layout::CheckoutLayout;
use crate::core::options::CleanOptions;
use crate::error::CleanError;
use crate::infra::chroot::SdkChroot;
use crate::infra::filesystem;

/// Result of a cleaning pass
#[derive(Debug, Default)]
pub struct CleanSummary {
    /// Paths that were removed
    pub cleaned: Vec<PathBuf>,
    /// Paths that would have been removed (dry-run)
    pub reported: Vec<PathBuf>,
    /// Cache directories left alone because they are mount points
    pub skipped_mounts: Vec<PathBuf>,
}

impl CleanSummary {
    /// True if the pass neither removed nor reported anything
    pub fn is_empty(&self) -> bool {
        self.cleaned.is_empty() && self.reported.is_empty()
    }
}

/// Executes the cleaning pass for one frozen option set
pub struct Cleaner<'a> {
    options: &'a CleanOptions,
    layout: &'a CheckoutLayout,
}

impl<'a> Cleaner<'a> {
    /// Create a cleaner over a resolved option set and checkout layout
    pub fn new(options: &'a CleanOptions, layout: &'a CheckoutLayout) -> Self {
        Self { options, layout }
    }

    /// Run the pass
    pub fn run(&self) -> Result<CleanSummary, CleanError> {
        let mut summary = CleanSummary::default();
        let chroot_dir = self.layout.chroot_dir();

        // The chroot is deleted through its management command, never by a
        // raw recursive delete, and goes first since the caches below live
        // inside it.
        if self.options.chroot {
            tracing::debug!("Remove the chroot");
            if self.options.dry_run {
                println!("would have cleaned: {}", chroot_dir.display());
                summary.reported.push(chroot_dir.clone());
            } else {
                SdkChroot::locate()?.delete()?;
                summary.cleaned.push(chroot_dir.clone());
            }
        }

        for board in &self.options.boards {
            tracing::debug!(board = %board, "Clean up the board build root");
            self.clean(&self.layout.board_root(board), &mut summary)?;
        }

        if self.options.cache {
            tracing::debug!("Clean the common cache");
            self.clean_unless_mounted(self.layout.cache_dir(), &mut summary)?;
        }

        if self.options.deploy {
            tracing::debug!("Clean up the deploy cache");
            for subdir in DEPLOY_CACHE_SUBDIRS {
                for dir in filesystem::expand_pattern(&self.layout.board_pattern(subdir))? {
                    self.clean(&dir, &mut summary)?;
                }
            }
        }

        if self.options.flash {
            tracing::debug!("Clean up the flash cache");
            self.clean(&self.layout.devserver_static_dir(), &mut summary)?;
        }

        if self.options.images {
            tracing::debug!("Clean the images cache");
            self.clean_unless_mounted(&self.layout.images_dir(), &mut summary)?;
        }

        if self.options.incrementals {
            tracing::debug!("Clean package incremental objects");
            self.clean(&chroot_dir.join("var/cache/portage"), &mut summary)?;
            self.clean_board_matches("var/cache/portage", &mut summary)?;
        }

        if self.options.logs {
            tracing::debug!("Clean log files");
            self.clean(&chroot_dir.join("var/log"), &mut summary)?;
            self.clean_board_matches("tmp/portage/logs", &mut summary)?;
        }

        if self.options.workdirs {
            tracing::debug!("Clean package workdirs");
            self.clean(&chroot_dir.join("var/tmp/portage"), &mut summary)?;
            self.clean_board_matches("tmp/portage", &mut summary)?;
        }

        Ok(summary)
    }

    /// Remove or report a single path
    fn clean(&self, path: &Path, summary: &mut CleanSummary) -> Result<(), CleanError> {
        if self.options.dry_run {
            println!("would have cleaned: {}", path.display());
            summary.reported.push(path.to_path_buf());
        } else if filesystem::remove_tree(path)? {
            summary.cleaned.push(path.to_path_buf());
        }
        Ok(())
    }

    /// Remove or report a path unless it is bind-mounted into the checkout
    fn clean_unless_mounted(
        &self,
        path: &Path,
        summary: &mut CleanSummary,
    ) -> Result<(), CleanError> {
        if filesystem::is_mount_point(path) {
            tracing::debug!(path = %path.display(), "Ignoring bind mounted cache dir");
            summary.skipped_mounts.push(path.to_path_buf());
            Ok(())
        } else {
            self.clean(path, summary)
        }
    }

    /// Remove or report `tail` under every board build root
    fn clean_board_matches(
        &self,
        tail: &str,
        summary: &mut CleanSummary,
    ) -> Result<(), CleanError> {
        for dir in filesystem::expand_pattern(&self.layout.board_pattern(tail))? {
            self.clean(&dir, summary)?;
        }
        Ok(())
    }
}
