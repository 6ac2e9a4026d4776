// src/task.rs

//! Task records as delivered by the backend task store.

use serde::{Deserialize, Serialize};

use crate::types::{TaskKind, TaskStatus};

/// Opaque task identifier. Stable across re-fetches of the same snapshot.
pub type TaskId = String;

/// One task as it arrives from the backend, before any graph structure is
/// derived from it.
///
/// `dependencies` lists the ids that must reach a terminal successful state
/// before this task may run. The list may reference ids that are absent from
/// the snapshot (dangling references) or, in erroneous input, form a cycle;
/// both are tolerated downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,

    /// Display label.
    pub title: String,

    #[serde(default)]
    pub status: TaskStatus,

    /// Display grouping only; never consulted by the graph algorithms.
    #[serde(default, rename = "taskType")]
    pub kind: TaskKind,

    /// Direct dependency ids, in declared order.
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
}

impl TaskRecord {
    /// Convenience constructor for programmatic snapshots; status and kind
    /// take their defaults.
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status: TaskStatus::default(),
            kind: TaskKind::default(),
            dependencies: Vec::new(),
        }
    }
}
