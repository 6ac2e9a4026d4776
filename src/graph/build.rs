// src/graph/build.rs

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::task::{TaskId, TaskRecord};

/// Normalized dependency structure derived from one task snapshot.
///
/// Edges run dependency -> dependent: `dependents_of(a)` lists the tasks
/// that declared `a` in their `dependencies`. The reverse direction is kept
/// as the *resolved* dependency lists: ids that exist in the snapshot, are
/// not the task itself, with repeats collapsed.
///
/// Malformed input never fails the build:
/// - a dependency id absent from the snapshot is skipped (treated as already
///   satisfied by something external),
/// - a self-dependency is skipped so it cannot make the task trivially
///   unsatisfiable,
/// - a duplicated task id keeps the slot of its first appearance but the
///   record of its last (last occurrence wins).
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    /// Known task ids in input order. Column assignment and every other
    /// deterministic ordering downstream derives from this.
    order: Vec<TaskId>,
    records: HashMap<TaskId, TaskRecord>,
    /// Forward edges: dependency id -> ids of tasks depending on it.
    adjacency: HashMap<TaskId, Vec<TaskId>>,
    /// Resolved direct dependencies per task.
    dependencies: HashMap<TaskId, Vec<TaskId>>,
    /// Count of unresolved direct dependencies per task.
    in_degree: HashMap<TaskId, usize>,
}

impl DependencyGraph {
    /// Build the graph from a flat task snapshot. Pure function of its input.
    pub fn build(tasks: &[TaskRecord]) -> Self {
        let mut order: Vec<TaskId> = Vec::new();
        let mut records: HashMap<TaskId, TaskRecord> = HashMap::new();

        for task in tasks {
            if records.insert(task.id.clone(), task.clone()).is_some() {
                debug!(task = %task.id, "duplicate task id in snapshot; last occurrence wins");
            } else {
                order.push(task.id.clone());
            }
        }

        let mut adjacency: HashMap<TaskId, Vec<TaskId>> = HashMap::new();
        let mut dependencies: HashMap<TaskId, Vec<TaskId>> = HashMap::new();
        let mut in_degree: HashMap<TaskId, usize> = HashMap::new();

        for id in &order {
            adjacency.insert(id.clone(), Vec::new());
            dependencies.insert(id.clone(), Vec::new());
            in_degree.insert(id.clone(), 0);
        }

        for id in &order {
            let mut resolved: Vec<TaskId> = Vec::new();

            for dep in &records[id].dependencies {
                if dep == id {
                    debug!(task = %id, "self-dependency; treating as satisfied");
                    continue;
                }
                if !records.contains_key(dep) {
                    warn!(
                        task = %id,
                        dep = %dep,
                        "dangling dependency; treating as satisfied"
                    );
                    continue;
                }
                if resolved.contains(dep) {
                    debug!(task = %id, dep = %dep, "repeated dependency; keeping first");
                    continue;
                }

                if let Some(dependents) = adjacency.get_mut(dep) {
                    dependents.push(id.clone());
                }
                if let Some(count) = in_degree.get_mut(id) {
                    *count += 1;
                }
                resolved.push(dep.clone());
            }

            dependencies.insert(id.clone(), resolved);
        }

        Self {
            order,
            records,
            adjacency,
            dependencies,
            in_degree,
        }
    }

    /// Number of distinct tasks in the graph.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Task ids in input order.
    pub fn task_ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// Task records in input order.
    pub fn records(&self) -> impl Iterator<Item = &TaskRecord> {
        self.order.iter().map(|id| &self.records[id])
    }

    pub fn record(&self, id: &str) -> Option<&TaskRecord> {
        self.records.get(id)
    }

    /// Tasks that directly depend on `id`.
    pub fn dependents_of(&self, id: &str) -> &[TaskId] {
        self.adjacency.get(id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Resolved direct dependencies of `id` (known, non-self, deduplicated).
    pub fn dependencies_of(&self, id: &str) -> &[TaskId] {
        self.dependencies
            .get(id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Count of unresolved direct dependencies at build time.
    pub fn in_degree_of(&self, id: &str) -> usize {
        self.in_degree.get(id).copied().unwrap_or(0)
    }

    /// Total number of resolved dependency edges.
    pub fn edge_count(&self) -> usize {
        self.in_degree.values().sum()
    }
}
