// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Diagnostic logging.
//!
//! The terminal belongs to the TUI, so log output can only go to a file.
//! Nothing is logged unless a log file has been configured.

use std::{
    fs::{File, OpenOptions},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use tracing::Level;

/// Where the log file path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogTarget<'a> {
    /// Named on the command line, failing to open it is fatal.
    Requested(&'a Path),
    /// Taken from the config file, failing to open it only disables logging.
    Configured(&'a Path),
    Disabled,
}

/// Installs a global `tracing` subscriber that appends to the target file.
///
/// # Errors
///
/// Returns an error if a requested log file cannot be opened for appending.
pub(crate) fn init_logging(target: LogTarget) -> Result<()> {
    let (path, required) = match target {
        LogTarget::Requested(path) => (path, true),
        LogTarget::Configured(path) => (path, false),
        LogTarget::Disabled => return Ok(()),
    };

    let file = match open_log_file(path) {
        Ok(file) => file,
        Err(e) if !required => {
            eprintln!("Warning: {e:#}, continuing without logging");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .init();

    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
