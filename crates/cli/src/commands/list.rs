// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tapeq list`

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tapeq_core::RequestStatus;
use tapeq_storage::ScanFilter;

use crate::output::{print_requests, OutputFormat};

#[derive(Args)]
pub struct ListArgs {
    /// Path to the group workspace
    pub workspace: PathBuf,
    /// Show requests for all users
    #[arg(long, short = 'a')]
    pub all_users: bool,
    /// Only show requests that are still in progress (NEW, SUBMITTING or SUBMITTED)
    #[arg(long, short = 'c')]
    pub current: bool,
    /// Include archived requests
    #[arg(long)]
    pub archived: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ListArgs {
    pub(crate) fn filter(&self, user: &str) -> ScanFilter {
        let mut filter = ScanFilter::new().include_archived(self.archived);
        if !self.all_users {
            filter = filter.owner(user);
        }
        if self.current {
            filter = filter.statuses(RequestStatus::CURRENT);
        }
        filter
    }
}

pub fn list(args: ListArgs) -> Result<()> {
    let queue = super::open_queue(&args.workspace)?;
    let requests = queue.scan(&args.filter(queue.user()))?;
    print_requests(&mut std::io::stdout(), &requests, args.format)
}
