// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tapeq init`

use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tapeq_adapters::{administrator_status, current_user, AdminStatus};
use tapeq_storage::RequestQueue;

use crate::exit_error::ExitError;

#[derive(Args)]
pub struct InitArgs {
    /// Path to the group workspace
    pub workspace: PathBuf,
    /// Skip the administrator confirmation when the control directory does not exist yet
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn init(args: InitArgs) -> Result<()> {
    let workspace = super::workspace_root(&args.workspace)?;
    let control = super::control_root(&workspace);

    match administrator_status(&control)? {
        AdminStatus::Administrator => {}
        AdminStatus::NotAdministrator => {
            return Err(ExitError::new(
                1,
                format!("{} is managed by another user", workspace.display()),
            )
            .into());
        }
        AdminStatus::Undetermined if args.yes => {}
        AdminStatus::Undetermined => {
            let prompt = format!(
                "If you are the administrator of group workspace {}, type 'Y' to confirm.",
                workspace.display()
            );
            let mut stdin = BufReader::new(std::io::stdin());
            if !super::confirm(&prompt, &mut stdin, &mut std::io::stdout())? {
                return Err(ExitError::new(1, "administrator not confirmed; exiting").into());
            }
        }
    }

    let queue = RequestQueue::new(&control, current_user()?);
    queue.initialise()?;
    println!("created control files/directories under {}", control.display());
    Ok(())
}
