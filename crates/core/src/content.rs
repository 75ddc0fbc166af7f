// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request content codec.
//!
//! Content files are JSON objects holding the compulsory parameters for the
//! request kind plus `external_id` and `message`, which are acquired during
//! the lifecycle. Keys this version does not know about are carried through
//! read-modify-write cycles untouched.

use crate::kind::RequestKind;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

const EXTERNAL_ID: &str = "external_id";
const MESSAGE: &str = "message";

/// Errors from encoding or decoding request content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("content is not a JSON object")]
    NotAnObject,
    #[error("missing compulsory field {field:?} for {kind} request")]
    MissingField { kind: RequestKind, field: &'static str },
    #[error("field {field:?} must be a {expected}")]
    WrongType { field: &'static str, expected: &'static str },
    #[error("content is for a {found} request, expected {expected}")]
    KindMismatch { expected: RequestKind, found: RequestKind },
}

/// Compulsory parameters, one variant per request kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestParams {
    Migration {
        path: PathBuf,
    },
    /// `new_path` of `None` restores to the original location.
    Retrieval {
        orig_path: PathBuf,
        new_path: Option<PathBuf>,
    },
    Deletion {
        orig_path: PathBuf,
    },
}

impl RequestParams {
    pub fn migration(path: impl Into<PathBuf>) -> Self {
        RequestParams::Migration { path: path.into() }
    }

    /// An empty `new_path` means the original location, same as `None`.
    pub fn retrieval(orig_path: impl Into<PathBuf>, new_path: Option<PathBuf>) -> Self {
        let new_path = new_path.filter(|p| !p.as_os_str().is_empty());
        RequestParams::Retrieval { orig_path: orig_path.into(), new_path }
    }

    pub fn deletion(orig_path: impl Into<PathBuf>) -> Self {
        RequestParams::Deletion { orig_path: orig_path.into() }
    }

    pub fn kind(&self) -> RequestKind {
        match self {
            RequestParams::Migration { .. } => RequestKind::Migration,
            RequestParams::Retrieval { .. } => RequestKind::Retrieval,
            RequestParams::Deletion { .. } => RequestKind::Deletion,
        }
    }

    /// The path the request acts on (the migrated directory).
    pub fn subject_path(&self) -> &Path {
        match self {
            RequestParams::Migration { path } => path,
            RequestParams::Retrieval { orig_path, .. } => orig_path,
            RequestParams::Deletion { orig_path } => orig_path,
        }
    }

    /// Check that every compulsory field has a value.
    pub fn validate(&self) -> Result<(), ContentError> {
        let kind = self.kind();
        if self.subject_path().as_os_str().is_empty() {
            return Err(ContentError::MissingField { kind, field: kind.compulsory_fields()[0] });
        }
        Ok(())
    }

    fn insert_into(&self, map: &mut Map<String, Value>) {
        match self {
            RequestParams::Migration { path } => {
                map.insert("path".into(), path_value(path));
            }
            RequestParams::Retrieval { orig_path, new_path } => {
                map.insert("orig_path".into(), path_value(orig_path));
                let new_path = new_path.as_deref().filter(|p| !p.as_os_str().is_empty());
                map.insert("new_path".into(), new_path.map_or(Value::Null, path_value));
            }
            RequestParams::Deletion { orig_path } => {
                map.insert("orig_path".into(), path_value(orig_path));
            }
        }
    }

    fn take_from(kind: RequestKind, map: &mut Map<String, Value>) -> Result<Self, ContentError> {
        Ok(match kind {
            RequestKind::Migration => {
                RequestParams::Migration { path: take_path(map, kind, "path")? }
            }
            RequestKind::Retrieval => RequestParams::Retrieval {
                orig_path: take_path(map, kind, "orig_path")?,
                new_path: take_opt_string(map, "new_path")?
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from),
            },
            RequestKind::Deletion => {
                RequestParams::Deletion { orig_path: take_path(map, kind, "orig_path")? }
            }
        })
    }
}

/// Full content of a request file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContent {
    pub params: RequestParams,
    /// Archive service job handle, set once submitted
    pub external_id: Option<String>,
    /// Latest human-readable status note
    pub message: Option<String>,
    /// Unrecognised keys, preserved verbatim
    pub extra: Map<String, Value>,
}

impl RequestContent {
    pub fn new(params: RequestParams) -> Self {
        Self { params, external_id: None, message: None, extra: Map::new() }
    }

    pub fn kind(&self) -> RequestKind {
        self.params.kind()
    }

    /// Encode as pretty-printed JSON with a trailing newline.
    pub fn encode(&self) -> Result<String, ContentError> {
        self.params.validate()?;
        let mut map = self.extra.clone();
        self.params.insert_into(&mut map);
        if let Some(external_id) = &self.external_id {
            map.insert(EXTERNAL_ID.into(), Value::String(external_id.clone()));
        }
        if let Some(message) = &self.message {
            map.insert(MESSAGE.into(), Value::String(message.clone()));
        }
        let mut text = serde_json::to_string_pretty(&Value::Object(map))?;
        text.push('\n');
        Ok(text)
    }

    /// Decode content written for a request of the given kind.
    pub fn decode(kind: RequestKind, text: &str) -> Result<Self, ContentError> {
        let mut map = match serde_json::from_str::<Value>(text)? {
            Value::Object(map) => map,
            _ => return Err(ContentError::NotAnObject),
        };
        let params = RequestParams::take_from(kind, &mut map)?;
        let external_id = match map.remove(EXTERNAL_ID) {
            // Older clients recorded numeric job handles
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(other) => {
                map.insert(EXTERNAL_ID.into(), other);
                take_opt_string(&mut map, EXTERNAL_ID)?
            }
            None => None,
        };
        let message = take_opt_string(&mut map, MESSAGE)?;
        Ok(Self { params, external_id, message, extra: map })
    }
}

fn path_value(path: &Path) -> Value {
    Value::String(path.to_string_lossy().into_owned())
}

fn take_path(
    map: &mut Map<String, Value>,
    kind: RequestKind,
    field: &'static str,
) -> Result<PathBuf, ContentError> {
    match map.remove(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(PathBuf::from(s)),
        Some(Value::String(_)) | Some(Value::Null) | None => {
            Err(ContentError::MissingField { kind, field })
        }
        Some(_) => Err(ContentError::WrongType { field, expected: "string" }),
    }
}

fn take_opt_string(
    map: &mut Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ContentError> {
    match map.remove(field) {
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Null) | None => Ok(None),
        Some(_) => Err(ContentError::WrongType { field, expected: "string" }),
    }
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;
