//! Clean option resolution
//!
//! Turns the raw command-line flags into a frozen option set. Three rules
//! apply, in order: an empty request defaults to `--safe`; `--clobber`
//! implies `--chroot` and `--safe`; and `--safe` enables every cache
//! category. The resolved [`CleanOptions`] is immutable for the remainder
//! of the run and is only ever passed by shared reference.

/// Raw flags as parsed from the command line, before implication rules
#[derive(Debug, Clone, Default)]
pub struct CleanRequest {
    /// Clean everything that is automatically recreated
    pub safe: bool,
    /// Report paths instead of deleting them
    pub dry_run: bool,
    /// Clean the shared cache directory
    pub cache: bool,
    /// Clean per-board deploy caches
    pub deploy: bool,
    /// Clean the devserver static cache
    pub flash: bool,
    /// Clean locally generated images
    pub images: bool,
    /// Clean incremental package objects
    pub incrementals: bool,
    /// Clean build log files
    pub logs: bool,
    /// Clean package work directories
    pub workdirs: bool,
    /// Delete all non-source objects
    pub clobber: bool,
    /// Delete the SDK chroot
    pub chroot: bool,
    /// Board build roots to delete
    pub boards: Vec<String>,
}

/// The resolved, frozen option set
///
/// Produced once by [`CleanOptions::resolve`]; no field changes afterwards.
/// Every branch of the cleaning pass reads this one snapshot.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Safe bundle was requested or implied
    pub safe: bool,
    /// Report paths instead of deleting them
    pub dry_run: bool,
    /// Clean the shared cache directory
    pub cache: bool,
    /// Clean per-board deploy caches
    pub deploy: bool,
    /// Clean the devserver static cache
    pub flash: bool,
    /// Clean locally generated images
    pub images: bool,
    /// Clean incremental package objects
    pub incrementals: bool,
    /// Clean build log files
    pub logs: bool,
    /// Clean package work directories
    pub workdirs: bool,
    /// Delete all non-source objects
    pub clobber: bool,
    /// Delete the SDK chroot
    pub chroot: bool,
    /// Board build roots to delete
    pub boards: Vec<String>,
}

impl CleanOptions {
    /// Apply the implication rules and freeze the option set
    ///
    /// Any combination of flags is valid input; this never fails.
    pub fn resolve(request: CleanRequest) -> Self {
        let mut safe = request.safe;
        let mut chroot = request.chroot;

        // With nothing requested, default to the safe bundle. `logs` and
        // `workdirs` on their own do not suppress this default.
        if !(safe
            || request.clobber
            || !request.boards.is_empty()
            || chroot
            || request.cache
            || request.deploy
            || request.flash
            || request.images
            || request.incrementals)
        {
            safe = true;
        }

        if request.clobber {
            chroot = true;
            safe = true;
        }

        Self {
            safe,
            dry_run: request.dry_run,
            cache: request.cache || safe,
            deploy: request.deploy || safe,
            flash: request.flash || safe,
            images: request.images || safe,
            incrementals: request.incrementals || safe,
            logs: request.logs || safe,
            workdirs: request.workdirs || safe,
            clobber: request.clobber,
            chroot,
            boards: request.boards,
        }
    }

    /// True if every flag of the safe bundle is enabled
    pub fn safe_bundle_enabled(&self) -> bool {
        self.cache
            && self.deploy
            && self.flash
            && self.images
            && self.incrementals
            && self.logs
            && self.workdirs
    }
}
