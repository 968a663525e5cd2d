//! Default configuration values
//!
//! Fixed names and locations inside an SDK-based checkout. These are passed
//! into the core through [`crate::core::layout::CheckoutLayout`] rather than
//! read from ambient state, so the cleaning pass stays testable.

/// Directory marker identifying the checkout root
pub const SOURCE_ROOT_MARKER: &str = ".repo";

/// Name of the SDK chroot directory under the checkout root
pub const DEFAULT_CHROOT_SUBDIR: &str = "chroot";

/// Name of the shared cache directory under the checkout root
pub const DEFAULT_CACHE_SUBDIR: &str = ".cache";

/// Devserver static file cache, relative to the checkout root.
/// Populated by the flash/deploy tooling.
pub const DEVSERVER_STATIC_SUBDIR: &str = "devserver/static";

/// Per-board caches written by the deploy tooling, relative to a board root
pub const DEPLOY_CACHE_SUBDIRS: &[&str] = &["custom-packages", "gmerge-packages"];

/// External command managing the SDK chroot lifecycle
pub const SDK_COMMAND: &str = "sdkchroot";

/// Marker file that exists only inside the SDK chroot
pub const CHROOT_VERSION_FILE: &str = "/etc/sdk_chroot_version";

/// Environment variable overriding checkout root discovery
pub const ENV_SOURCE_ROOT: &str = "SDKSWEEP_SOURCE_ROOT";
