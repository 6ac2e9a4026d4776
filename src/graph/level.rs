// src/graph/level.rs

//! Topological leveling via Kahn's algorithm.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, warn};

use crate::graph::DependencyGraph;
use crate::task::TaskId;

/// Level assignment for every task in a snapshot.
///
/// Level 0 holds the tasks with no unresolved dependencies; a task at level
/// N has at least one dependency at level N-1 and none deeper. Tasks whose
/// in-degree never reaches zero (cycle members and anything downstream of a
/// cycle) are assigned level 0 as a fallback and recorded in
/// [`Leveling::fallback_ids`], so no task is ever dropped from the layout.
///
/// The queue is seeded in snapshot input order and drained FIFO, so the
/// assignment is stable and reproducible for identical input. Since a FIFO
/// queue pops tasks in nondecreasing level order, the level assigned at the
/// in-degree-zero crossing equals the longest-path level on acyclic input.
#[derive(Debug, Clone)]
pub struct Leveling {
    levels: HashMap<TaskId, usize>,
    level_count: usize,
    fallback: Vec<TaskId>,
}

impl Leveling {
    /// Run Kahn's algorithm over the graph.
    pub fn compute(graph: &DependencyGraph) -> Self {
        let mut remaining: HashMap<&str, usize> = graph
            .task_ids()
            .map(|id| (id, graph.in_degree_of(id)))
            .collect();

        let mut levels: HashMap<TaskId, usize> = HashMap::new();
        let mut queue: VecDeque<(&str, usize)> = VecDeque::new();

        for id in graph.task_ids() {
            if remaining[id] == 0 {
                levels.insert(id.to_string(), 0);
                queue.push_back((id, 0));
            }
        }

        while let Some((id, level)) = queue.pop_front() {
            for dependent in graph.dependents_of(id) {
                if let Some(count) = remaining.get_mut(dependent.as_str()) {
                    *count -= 1;
                    if *count == 0 {
                        levels.insert(dependent.clone(), level + 1);
                        queue.push_back((dependent.as_str(), level + 1));
                    }
                }
            }
        }

        // Anything still unleveled sits on a cycle (or behind one). Give it
        // a defined level instead of dropping it from the layout.
        let mut fallback: Vec<TaskId> = Vec::new();
        for id in graph.task_ids() {
            if !levels.contains_key(id) {
                levels.insert(id.to_string(), 0);
                fallback.push(id.to_string());
            }
        }

        if fallback.is_empty() {
            debug!(tasks = graph.len(), "leveling complete");
        } else {
            warn!(
                tasks = graph.len(),
                fallback = fallback.len(),
                "cycle in task graph; assigning fallback level 0 to unleveled tasks"
            );
        }

        let level_count = levels.values().max().map(|max| max + 1).unwrap_or(0);

        Self {
            levels,
            level_count,
            fallback,
        }
    }

    pub fn level_of(&self, id: &str) -> Option<usize> {
        self.levels.get(id).copied()
    }

    /// Total number of levels, `max(level) + 1`; zero for an empty snapshot.
    pub fn level_count(&self) -> usize {
        self.level_count
    }

    pub fn levels(&self) -> &HashMap<TaskId, usize> {
        &self.levels
    }

    /// Ids that received the fallback level because their in-degree never
    /// reached zero, in snapshot input order.
    pub fn fallback_ids(&self) -> &[TaskId] {
        &self.fallback
    }

    pub fn is_fallback(&self, id: &str) -> bool {
        self.fallback.iter().any(|f| f == id)
    }
}
