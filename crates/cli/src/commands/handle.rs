// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tapeq handle`: the administrator batch.
//!
//! Per workspace, SUBMITTED requests are monitored before NEW ones are
//! submitted, so requests claimed in this run are not checked straight away.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tapeq_adapters::{ArchiveService, ManualArchiveService};
use tapeq_core::{Clock, RequestKind, RequestStatus};
use tapeq_storage::{RequestQueue, ScanFilter};

use crate::exit_error::ExitError;

#[derive(Args)]
pub struct HandleArgs {
    /// Paths to group workspaces
    #[arg(required = true)]
    pub workspaces: Vec<PathBuf>,
    #[command(flatten)]
    pub kinds: KindSelection,
    #[command(flatten)]
    pub actions: ActionSelection,
    /// Stop at the first request that fails instead of carrying on
    #[arg(long)]
    pub fail_fast: bool,
}

/// Request types to act on (defaults to all)
#[derive(Args, Default)]
#[group(multiple = false)]
pub struct KindSelection {
    /// Only act on migration requests
    #[arg(short = 'm', long = "migrate")]
    pub migrate: bool,
    /// Only act on retrieval requests
    #[arg(short = 'r', long = "retrieve")]
    pub retrieve: bool,
    /// Only act on deletion requests
    #[arg(short = 'd', long = "delete")]
    pub delete: bool,
}

/// Actions to take (defaults to all)
#[derive(Args, Default)]
#[group(multiple = false)]
pub struct ActionSelection {
    /// Only submit new requests
    #[arg(short = 'S', long = "submit")]
    pub submit: bool,
    /// Only monitor already submitted requests
    #[arg(short = 'M', long = "monitor")]
    pub monitor: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Monitor,
    Submit,
}

impl Action {
    fn name(self) -> &'static str {
        match self {
            Action::Monitor => "monitor",
            Action::Submit => "submit",
        }
    }

    fn input_status(self) -> RequestStatus {
        match self {
            Action::Monitor => RequestStatus::Submitted,
            Action::Submit => RequestStatus::New,
        }
    }
}

/// What one batch run does in each workspace.
#[derive(Debug, Clone, Default)]
pub(crate) struct BatchPlan {
    pub kinds: Option<Vec<RequestKind>>,
    pub actions: Vec<Action>,
    pub fail_fast: bool,
}

impl HandleArgs {
    pub(crate) fn plan(&self) -> BatchPlan {
        let kinds = if self.kinds.migrate {
            Some(vec![RequestKind::Migration])
        } else if self.kinds.retrieve {
            Some(vec![RequestKind::Retrieval])
        } else if self.kinds.delete {
            Some(vec![RequestKind::Deletion])
        } else {
            None
        };
        let actions = if self.actions.monitor {
            vec![Action::Monitor]
        } else if self.actions.submit {
            vec![Action::Submit]
        } else {
            vec![Action::Monitor, Action::Submit]
        };
        BatchPlan { kinds, actions, fail_fast: self.fail_fast }
    }
}

pub async fn handle(args: HandleArgs) -> Result<()> {
    let plan = args.plan();
    let service = ManualArchiveService::new();
    let mut failed = 0;

    for path in &args.workspaces {
        let Some(queue) = super::open_admin_queue(path)? else {
            continue;
        };
        for stale in queue.clean_stale_temp_files()? {
            tracing::warn!(path = %stale.display(), "removed leftover temp file");
        }
        failed += run_batch(&queue, &service, &plan, &mut std::io::stdout()).await?;
    }

    if failed > 0 {
        return Err(ExitError::partial(failed).into());
    }
    Ok(())
}

/// Run `plan` against one queue. Returns how many requests failed.
///
/// A failing request is reported and skipped unless the plan is fail-fast, in
/// which case its error is returned.
pub(crate) async fn run_batch<C, S>(
    queue: &RequestQueue<C>,
    service: &S,
    plan: &BatchPlan,
    out: &mut impl Write,
) -> Result<usize>
where
    C: Clock,
    S: ArchiveService + ?Sized,
{
    let mut failed = 0;
    for &action in &plan.actions {
        let mut filter = ScanFilter::new().statuses([action.input_status()]);
        if let Some(kinds) = &plan.kinds {
            filter = filter.kinds(kinds.iter().copied());
        }

        for mut request in queue.scan(&filter)? {
            let result = match action {
                Action::Monitor => request.monitor(service).await.map(|outcome| {
                    match outcome.succeeded {
                        Some(true) => Some(format!("request {} completed", request.id())),
                        Some(false) => Some(format!(
                            "request {} failed: {}",
                            request.id(),
                            outcome.message.as_deref().unwrap_or("no message")
                        )),
                        None => None,
                    }
                }),
                Action::Submit => request.claim_and_submit(service).await.map(|external_id| {
                    Some(format!("submitted request {} as external id {external_id}", request.id()))
                }),
            };

            match result {
                Ok(Some(message)) => writeln!(out, "{message}")?,
                Ok(None) => {}
                Err(e) => {
                    tracing::error!(
                        id = %request.id(),
                        action = action.name(),
                        error = %e,
                        "request failed"
                    );
                    writeln!(
                        out,
                        "{} of request {}: failed with: {e}",
                        action.name(),
                        request.id()
                    )?;
                    if plan.fail_fast {
                        return Err(e.into());
                    }
                    failed += 1;
                }
            }
        }
    }
    Ok(failed)
}

#[cfg(test)]
#[path = "handle_tests.rs"]
mod tests;
