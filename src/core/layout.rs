//! Checkout layout and path construction
//!
//! All paths the cleaner visits derive from two roots: the checkout root
//! and the shared cache directory. Both are injected here at construction
//! so the cleaning pass never consults process-wide state.

use std::path::{Path, PathBuf};

use crate::config::defaults::{
    DEFAULT_CACHE_SUBDIR, DEFAULT_CHROOT_SUBDIR, DEVSERVER_STATIC_SUBDIR, SOURCE_ROOT_MARKER,
};

/// Fixed roots of an SDK-based checkout
#[derive(Debug, Clone)]
pub struct CheckoutLayout {
    source_root: PathBuf,
    cache_dir: PathBuf,
}

impl CheckoutLayout {
    /// Create a layout with an explicit cache directory
    pub fn new(source_root: PathBuf, cache_dir: PathBuf) -> Self {
        Self {
            source_root,
            cache_dir,
        }
    }

    /// Create a layout with the cache directory at its default location
    pub fn with_default_cache(source_root: PathBuf) -> Self {
        let cache_dir = source_root.join(DEFAULT_CACHE_SUBDIR);
        Self::new(source_root, cache_dir)
    }

    /// The checkout root
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// The shared cache directory
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// The SDK chroot directory
    pub fn chroot_dir(&self) -> PathBuf {
        self.source_root.join(DEFAULT_CHROOT_SUBDIR)
    }

    /// The build root for one board, inside the chroot
    pub fn board_root(&self, board: &str) -> PathBuf {
        self.chroot_dir().join("build").join(board)
    }

    /// A glob pattern matching `tail` under every board build root
    pub fn board_pattern(&self, tail: &str) -> PathBuf {
        self.chroot_dir().join("build").join("*").join(tail)
    }

    /// Locally generated images, outside the chroot
    pub fn images_dir(&self) -> PathBuf {
        self.source_root.join("build")
    }

    /// The devserver static file cache written by the flash tooling
    pub fn devserver_static_dir(&self) -> PathBuf {
        self.source_root.join(DEVSERVER_STATIC_SUBDIR)
    }
}

/// Walk up from `start` to the first ancestor containing the checkout
/// root marker directory
pub fn find_source_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(SOURCE_ROOT_MARKER).is_dir())
        .map(Path::to_path_buf)
}
