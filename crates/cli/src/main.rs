// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tapeq: tape archival requests for group workspaces

mod color;
mod commands;
mod env;
mod exit_error;
mod output;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{archive, handle, init, list, request, withdraw};

#[derive(Parser)]
#[command(
    name = "tapeq",
    version,
    about = "Queue group workspace data for tape migration, retrieval and deletion"
)]
#[command(styles = color::styles())]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the request queue for a group workspace (administrator)
    Init(init::InitArgs),
    /// Request migration of a directory to tape
    Migrate(request::MigrateArgs),
    /// Request retrieval of migrated data
    Retrieve(request::RetrieveArgs),
    /// Request deletion of the offline copy of migrated data
    Delete(request::DeleteArgs),
    /// List requests
    List(list::ListArgs),
    /// Withdraw a request that has not been submitted yet
    Withdraw(withdraw::WithdrawArgs),
    /// Submit new requests and monitor submitted ones (administrator)
    Handle(handle::HandleArgs),
    /// Archive finished requests older than a number of days (administrator)
    Archive(archive::ArchiveArgs),
}

/// Minimal runtime: only the archive service calls are async
#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Failed with the following error:\n {e:#}");
        std::process::exit(exit_error::exit_code(&e));
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_new(env::log_filter()).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };
    match command {
        Commands::Init(args) => init::init(args),
        Commands::Migrate(args) => request::migrate(args),
        Commands::Retrieve(args) => request::retrieve(args),
        Commands::Delete(args) => request::delete(args),
        Commands::List(args) => list::list(args),
        Commands::Withdraw(args) => withdraw::withdraw(args),
        Commands::Handle(args) => handle::handle(args).await,
        Commands::Archive(args) => archive::archive(args),
    }
}
