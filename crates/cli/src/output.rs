// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;
use tapeq_core::{Clock, RequestContent, RequestKind, RequestParams, RequestStatus};
use tapeq_storage::Request;

use crate::color;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Lines shown under a request's one-line description.
pub fn detail_lines(content: &RequestContent) -> Vec<String> {
    let mut lines = Vec::new();
    match &content.params {
        RequestParams::Migration { path } => {
            lines.push(format!("path to migrate: {}", path.display()));
        }
        RequestParams::Retrieval { orig_path, new_path } => {
            lines.push(format!("original path: {}", orig_path.display()));
            match new_path {
                Some(new_path) => lines.push(format!("restore to {}", new_path.display())),
                None => lines.push("restore to original location".to_string()),
            }
        }
        RequestParams::Deletion { orig_path } => {
            lines.push(format!("path to delete offline copy of: {}", orig_path.display()));
        }
    }
    if let Some(external_id) = &content.external_id {
        lines.push(format!("external id: {external_id}"));
    }
    if let Some(message) = &content.message {
        lines.push(format!("message: {message}"));
    }
    lines
}

/// One-line description of a request with its status colored.
///
/// Without color this is the request's `Display` form.
pub fn heading<C: Clock>(request: &Request<'_, C>) -> String {
    let archived = if request.is_archived() { " (archived)" } else { "" };
    format!(
        "{}{}{}",
        color::header(&format!(
            "<{} request: user={} id={} date={} status=",
            request.kind(),
            request.owner(),
            request.id(),
            request.date()
        )),
        color::status(request.status()),
        color::header(&format!("{archived}>"))
    )
}

/// Print a request's description and details, followed by a blank line.
///
/// Content that cannot be read is reported in place of the details so one
/// bad file does not hide the rest of a listing.
pub fn print_request<C: Clock>(
    out: &mut impl Write,
    request: &Request<'_, C>,
) -> std::io::Result<()> {
    writeln!(out, "{}", heading(request))?;
    match request.read() {
        Ok(content) => {
            for line in detail_lines(&content) {
                writeln!(out, " {line}")?;
            }
        }
        Err(e) => writeln!(out, " {}", color::muted(&format!("content unreadable: {e}")))?,
    }
    writeln!(out)
}

/// JSON view of a request for `--format json`.
#[derive(Debug, Serialize)]
pub struct RequestSummary {
    pub id: u64,
    pub kind: RequestKind,
    pub owner: String,
    pub date: NaiveDate,
    pub status: RequestStatus,
    pub archived: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RequestSummary {
    pub fn from_request<C: Clock>(request: &Request<'_, C>) -> Self {
        let mut summary = Self {
            id: request.id().get(),
            kind: request.kind(),
            owner: request.owner().to_string(),
            date: request.date(),
            status: request.status(),
            archived: request.is_archived(),
            path: None,
            orig_path: None,
            new_path: None,
            external_id: None,
            message: None,
            error: None,
        };
        match request.read() {
            Ok(content) => {
                match content.params {
                    RequestParams::Migration { path } => summary.path = Some(path),
                    RequestParams::Retrieval { orig_path, new_path } => {
                        summary.orig_path = Some(orig_path);
                        summary.new_path = new_path;
                    }
                    RequestParams::Deletion { orig_path } => summary.orig_path = Some(orig_path),
                }
                summary.external_id = content.external_id;
                summary.message = content.message;
            }
            Err(e) => summary.error = Some(e.to_string()),
        }
        summary
    }
}

/// Print requests in the chosen format.
pub fn print_requests<C: Clock>(
    out: &mut impl Write,
    requests: &[Request<'_, C>],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for request in requests {
                print_request(out, request)?;
            }
        }
        OutputFormat::Json => {
            let summaries: Vec<_> = requests.iter().map(RequestSummary::from_request).collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&summaries)?)?;
        }
    }
    Ok(())
}
