use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a task as reported by the backend task store.
///
/// The set is closed: snapshots carrying any other string fail at the
/// deserialization boundary instead of leaking free-form values into the
/// graph algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Ready,
    Running,
    Complete,
    Failed,
    Blocked,
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Ready => "ready",
            TaskStatus::Running => "running",
            TaskStatus::Complete => "complete",
            TaskStatus::Failed => "failed",
            TaskStatus::Blocked => "blocked",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "ready" => Ok(TaskStatus::Ready),
            "running" => Ok(TaskStatus::Running),
            "complete" => Ok(TaskStatus::Complete),
            "failed" => Ok(TaskStatus::Failed),
            "blocked" => Ok(TaskStatus::Blocked),
            other => Err(format!(
                "invalid task status: {other} (expected \"pending\", \"ready\", \"running\", \"complete\", \"failed\" or \"blocked\")"
            )),
        }
    }
}

/// Coarse classification of a task, used only for display grouping.
///
/// It has no influence on graph construction, leveling or layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Work,
    Verification,
    Finalization,
}

impl Default for TaskKind {
    fn default() -> Self {
        TaskKind::Work
    }
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Work => "work",
            TaskKind::Verification => "verification",
            TaskKind::Finalization => "finalization",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a task relates to the currently focused task.
///
/// "No focus at all" is deliberately not a variant: callers that have no
/// focused task must skip classification entirely rather than paint every
/// node `Unrelated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// The focused task itself.
    #[serde(rename = "self")]
    Focus,
    /// A dependency of the focused task (the focused task runs after it).
    Ancestor,
    /// A dependent of the focused task (it runs after the focused task).
    Descendant,
    /// Neither side of a dependency relation with the focused task.
    Unrelated,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Focus => "self",
            Relation::Ancestor => "ancestor",
            Relation::Descendant => "descendant",
            Relation::Unrelated => "unrelated",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
