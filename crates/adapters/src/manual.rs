// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator-driven archive service.
//!
//! Stands in for the real archive client on systems where submissions are
//! carried out by hand: each submission is announced and assigned a random
//! numeric job handle, and each check asks the operator whether the job has
//! finished.

use crate::archive::{ArchiveService, CheckOutcome, ServiceError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::sync::Arc;

const HANDLE_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const HANDLE_LEN: usize = 8;

struct Console {
    input: Box<dyn BufRead + Send>,
    output: Box<dyn Write + Send>,
}

/// Archive service that defers to a human operator.
#[derive(Clone)]
pub struct ManualArchiveService {
    console: Arc<Mutex<Console>>,
}

impl ManualArchiveService {
    /// Operator console on the process's stdin / stderr.
    pub fn new() -> Self {
        Self::with_console(BufReader::new(std::io::stdin()), std::io::stderr())
    }

    pub fn with_console(
        input: impl BufRead + Send + 'static,
        output: impl Write + Send + 'static,
    ) -> Self {
        Self {
            console: Arc::new(Mutex::new(Console {
                input: Box::new(input),
                output: Box::new(output),
            })),
        }
    }

    fn announce(&self, what: &str) -> Result<String, ServiceError> {
        let handle = nanoid::nanoid!(HANDLE_LEN, &HANDLE_DIGITS);
        let mut console = self.console.lock();
        writeln!(console.output, "{what}")?;
        writeln!(console.output, "assigned external id {handle}")?;
        tracing::info!(external_id = %handle, "manual submission recorded");
        Ok(handle)
    }
}

impl Default for ManualArchiveService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArchiveService for ManualArchiveService {
    async fn submit_migrate(&self, path: &Path) -> Result<String, ServiceError> {
        self.announce(&format!("migrate {} to tape", path.display()))
    }

    async fn submit_retrieve(
        &self,
        orig_path: &Path,
        target: &Path,
    ) -> Result<String, ServiceError> {
        self.announce(&format!(
            "retrieve {} from tape into {}",
            orig_path.display(),
            target.display()
        ))
    }

    async fn submit_delete(&self, orig_path: &Path) -> Result<String, ServiceError> {
        self.announce(&format!("delete tape copy of {}", orig_path.display()))
    }

    async fn check(&self, external_id: &str) -> Result<CheckOutcome, ServiceError> {
        let mut console = self.console.lock();
        writeln!(
            console.output,
            "did job {external_id} succeed? enter Y or N, or hit enter if still running"
        )?;
        console.output.flush()?;

        let mut line = String::new();
        console.input.read_line(&mut line)?;
        let answer = line.trim().to_ascii_uppercase();
        Ok(if answer.starts_with('Y') {
            CheckOutcome::succeeded().with_message("operator confirmed completion")
        } else if answer.starts_with('N') {
            CheckOutcome::failed().with_message("operator reported failure")
        } else {
            CheckOutcome::in_progress()
        })
    }
}

#[cfg(test)]
#[path = "manual_tests.rs"]
mod tests;
