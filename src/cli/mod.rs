//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no cleaning logic - that belongs in the [`crate::core`] module.

pub mod output;

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::defaults::ENV_SOURCE_ROOT;
use crate::core::clean::Cleaner;
use crate::core::layout::{self, CheckoutLayout};
use crate::core::options::{CleanOptions, CleanRequest};
use crate::error::CleanError;
use crate::infra::chroot;

const CACHE_HEADING: &str = "Cache selection (advanced; --safe does all of these)";
const DANGER_HEADING: &str = "Unrecoverable options (dangerous)";

/// Sdksweep - clean up working files in an SDK-based OS checkout
///
/// If unsure, just use the --safe flag to clean out various objects.
#[derive(Parser, Debug)]
#[command(name = "sdksweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Clean up files that are automatically created
    #[arg(long)]
    pub safe: bool,

    /// Show which paths would be cleaned up
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Clean up our shared cache dir
    #[arg(long, help_heading = CACHE_HEADING)]
    pub cache: bool,

    /// Clean files cached by the deploy tooling
    #[arg(long, help_heading = CACHE_HEADING)]
    pub deploy: bool,

    /// Clean files cached by the flash tooling
    #[arg(long, help_heading = CACHE_HEADING)]
    pub flash: bool,

    /// Clean up locally generated images
    #[arg(long, help_heading = CACHE_HEADING)]
    pub images: bool,

    /// Clean up incremental package objects
    #[arg(long, help_heading = CACHE_HEADING)]
    pub incrementals: bool,

    /// Clean up various build log files
    #[arg(long, help_heading = CACHE_HEADING)]
    pub logs: bool,

    /// Clean up various package build directories
    #[arg(long, help_heading = CACHE_HEADING)]
    pub workdirs: bool,

    /// Delete all non-source objects
    #[arg(long, help_heading = DANGER_HEADING)]
    pub clobber: bool,

    /// Delete the build chroot (affects all boards)
    #[arg(long, help_heading = DANGER_HEADING)]
    pub chroot: bool,

    /// Delete board(s) build root(s)
    #[arg(long, value_name = "BOARD", help_heading = DANGER_HEADING)]
    pub board: Vec<String>,

    /// Override the shared cache directory
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Override checkout root discovery
    #[arg(long, value_name = "DIR", env = ENV_SOURCE_ROOT)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors and dry-run notices
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Execute the clean
    pub fn run(self) -> Result<()> {
        let options = CleanOptions::resolve(CleanRequest {
            safe: self.safe,
            dry_run: self.dry_run,
            cache: self.cache,
            deploy: self.deploy,
            flash: self.flash,
            images: self.images,
            incrementals: self.incrementals,
            logs: self.logs,
            workdirs: self.workdirs,
            clobber: self.clobber,
            chroot: self.chroot,
            boards: self.board,
        });

        let source_root = match self.source_root {
            Some(root) => root,
            None => {
                let cwd =
                    env::current_dir().context("Failed to determine current directory")?;
                layout::find_source_root(&cwd)
                    .ok_or(CleanError::CheckoutNotFound { start: cwd })?
            }
        };
        let layout = match self.cache_dir {
            Some(cache_dir) => CheckoutLayout::new(source_root, cache_dir),
            None => CheckoutLayout::with_default_cache(source_root),
        };

        // Never run inside the environment being torn down.
        chroot::ensure_outside_sdk_chroot()?;

        let cleaner = Cleaner::new(&options, &layout);
        let summary = if options.dry_run || self.quiet {
            cleaner.run()?
        } else {
            let spinner = output::create_spinner("Cleaning build artifacts...");
            let result = cleaner.run();
            spinner.finish_and_clear();
            result?
        };

        if !self.quiet {
            output::display_summary(&summary, options.dry_run);
        }
        Ok(())
    }
}
