// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tapeq withdraw`

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tapeq_core::RequestId;

#[derive(Args)]
pub struct WithdrawArgs {
    /// Path to the group workspace
    pub workspace: PathBuf,
    /// Request id
    pub id: u64,
}

pub fn withdraw(args: WithdrawArgs) -> Result<()> {
    let queue = super::open_queue(&args.workspace)?;
    let request = queue.withdraw(RequestId(args.id))?;
    println!("withdrew request id={}", request.id());
    Ok(())
}
