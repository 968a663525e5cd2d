//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test checkout context
///
/// Creates a temporary SDK checkout and provides utilities for populating
/// it with build artifacts and running the binary against it.
pub struct TestCheckout {
    /// Temporary directory for the test checkout
    pub dir: TempDir,
}

impl TestCheckout {
    /// Create a new empty test checkout in a temporary directory
    pub fn new() -> Self {
        let checkout = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        checkout.create_dir(".repo");
        checkout
    }

    /// Get the path to the checkout root
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a directory in the checkout
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Create a file in the checkout
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a path exists in the checkout
    pub fn exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Run sdksweep against this checkout
    pub fn run_sweep(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sdksweep"));
        cmd.current_dir(self.path());
        cmd.env_remove("SDKSWEEP_SOURCE_ROOT");
        cmd.arg("--source-root").arg(self.path());
        for arg in args {
            cmd.arg(arg);
        }
        cmd.output().expect("Failed to execute sdksweep")
    }

    /// Run sdksweep without --source-root, relying on discovery from cwd
    #[allow(dead_code)]
    pub fn run_sweep_discovered(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sdksweep"));
        cmd.current_dir(self.path());
        cmd.env_remove("SDKSWEEP_SOURCE_ROOT");
        for arg in args {
            cmd.arg(arg);
        }
        cmd.output().expect("Failed to execute sdksweep")
    }

    /// Populate the checkout with the standard build artifact tree:
    /// two boards (alpha, beta), the shared cache, generated images, the
    /// devserver static cache, and the portage caches inside the chroot.
    #[allow(dead_code)]
    pub fn populate(&self) {
        self.create_file(".cache/downloads/image.bin", "bin");
        self.create_dir("build/images/alpha");
        self.create_dir("devserver/static");
        self.create_file("chroot/var/cache/portage/pkg.tbz2", "pkg");
        self.create_dir("chroot/var/log/portage");
        self.create_dir("chroot/var/tmp/portage/app-shells");
        self.create_dir("chroot/build/alpha/custom-packages");
        self.create_dir("chroot/build/alpha/gmerge-packages");
        self.create_dir("chroot/build/alpha/var/cache/portage");
        self.create_dir("chroot/build/alpha/tmp/portage/logs");
        self.create_dir("chroot/build/beta/custom-packages");
        self.create_dir("chroot/build/beta/tmp/portage");
        self.create_file("src/app/main.c", "int main(void) { return 0; }\n");
    }
}

impl Default for TestCheckout {
    fn default() -> Self {
        Self::new()
    }
}
