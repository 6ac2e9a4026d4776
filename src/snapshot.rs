// src/snapshot.rs

//! Task snapshot loading from backend JSON exports.
//!
//! The backend serves either a bare array of task records or an envelope
//! object with a `tasks` field; both shapes are accepted. Invalid `status`
//! or `taskType` values fail here, at the boundary, so the graph algorithms
//! only ever see the closed enumerations.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::errors::Result;
use crate::task::TaskRecord;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSnapshot {
    Tasks(Vec<TaskRecord>),
    Envelope { tasks: Vec<TaskRecord> },
}

/// Parse a snapshot from a JSON string.
pub fn load_from_str(contents: &str) -> Result<Vec<TaskRecord>> {
    let raw: RawSnapshot = serde_json::from_str(contents)?;

    let tasks = match raw {
        RawSnapshot::Tasks(tasks) => tasks,
        RawSnapshot::Envelope { tasks } => tasks,
    };

    debug!(tasks = tasks.len(), "snapshot parsed");
    Ok(tasks)
}

/// Read and parse a snapshot file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<TaskRecord>> {
    let contents = fs::read_to_string(path.as_ref())?;
    load_from_str(&contents)
}
