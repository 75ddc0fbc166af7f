// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request creation: `tapeq migrate`, `tapeq retrieve`, `tapeq delete`

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Args;
use tapeq_core::RequestParams;

use crate::output::print_request;

#[derive(Args)]
pub struct MigrateArgs {
    /// Directory to migrate
    pub directory: PathBuf,
}

#[derive(Args)]
pub struct RetrieveArgs {
    /// Directory which was migrated
    pub orig_dir: PathBuf,
    /// Directory to retrieve to (by default, retrieve to the original location)
    pub dest_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Original directory that was migrated
    pub directory: PathBuf,
}

pub fn migrate(args: MigrateArgs) -> Result<()> {
    // A single file migrates too, so existence is all that is checked
    if !args.directory.exists() {
        bail!("path {} does not exist", args.directory.display());
    }
    let path = std::path::absolute(&args.directory)?;
    create(&path, RequestParams::migration(path.clone()))
}

pub fn retrieve(args: RetrieveArgs) -> Result<()> {
    let orig_path = std::path::absolute(&args.orig_dir)?;
    let new_path = args.dest_dir.as_deref().map(std::path::absolute).transpose()?;

    if let Some(dest) = &new_path {
        if super::workspace_root(dest)? != super::workspace_root(&orig_path)? {
            bail!("you cannot restore to a different group workspace");
        }
    }
    check_destination(new_path.as_deref().unwrap_or(&orig_path))?;

    create(&orig_path, RequestParams::retrieval(orig_path.clone(), new_path))
}

pub fn delete(args: DeleteArgs) -> Result<()> {
    let path = std::path::absolute(&args.directory)?;
    create(&path, RequestParams::deletion(path.clone()))
}

fn create(subject: &Path, params: RequestParams) -> Result<()> {
    let queue = super::open_queue(subject)?;
    let request = queue.create_request(params)?;
    println!("created request");
    print_request(&mut std::io::stdout(), &request)?;
    Ok(())
}

/// A retrieval target must not exist yet, or be an empty directory.
pub(crate) fn check_destination(dest: &Path) -> Result<()> {
    if !dest.exists() {
        return Ok(());
    }
    if dest.is_dir() && std::fs::read_dir(dest)?.next().is_none() {
        return Ok(());
    }
    bail!("destination directory {} exists and is not an empty directory", dest.display())
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
