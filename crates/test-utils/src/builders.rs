#![allow(dead_code)]

use taskdag::task::TaskRecord;
use taskdag::types::{TaskKind, TaskStatus};

/// Builder for `TaskRecord` to simplify test setup.
///
/// Title defaults to the id; status and kind to their wire defaults.
pub struct TaskRecordBuilder {
    record: TaskRecord,
}

impl TaskRecordBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            record: TaskRecord::new(id, id),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.record.title = title.to_string();
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.record.status = status;
        self
    }

    pub fn kind(mut self, kind: TaskKind) -> Self {
        self.record.kind = kind;
        self
    }

    pub fn depends_on(mut self, dep: &str) -> Self {
        self.record.dependencies.push(dep.to_string());
        self
    }

    pub fn build(self) -> TaskRecord {
        self.record
    }
}

/// Shorthand for a task with no dependencies.
pub fn task(id: &str) -> TaskRecord {
    TaskRecordBuilder::new(id).build()
}

/// Shorthand for a task depending on each id in `deps`.
pub fn task_after(id: &str, deps: &[&str]) -> TaskRecord {
    let mut builder = TaskRecordBuilder::new(id);
    for dep in deps {
        builder = builder.depends_on(dep);
    }
    builder.build()
}
