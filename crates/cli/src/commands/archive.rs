// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tapeq archive`

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use clap::Args;
use tapeq_core::Clock;

#[derive(Args)]
pub struct ArchiveArgs {
    /// Minimum number of days since the request was created
    pub days: u32,
    /// Paths to group workspaces
    #[arg(required = true)]
    pub workspaces: Vec<PathBuf>,
}

/// Latest creation date that is at least `days` before `today`.
pub(crate) fn cutoff(today: NaiveDate, days: u32) -> Option<NaiveDate> {
    today.checked_sub_days(Days::new(u64::from(days)))
}

pub fn archive(args: ArchiveArgs) -> Result<()> {
    for path in &args.workspaces {
        let Some(queue) = super::open_admin_queue(path)? else {
            continue;
        };
        let cutoff = cutoff(queue.clock().today(), args.days)
            .with_context(|| format!("{} days is too far back", args.days))?;
        for request in queue.archive_finished_before(cutoff)? {
            println!("Archived {request}");
        }
    }
    Ok(())
}
