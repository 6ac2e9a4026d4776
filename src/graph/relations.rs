// src/graph/relations.rs

//! Ancestor/descendant classification for hover highlighting.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::graph::DependencyGraph;
use crate::task::TaskId;
use crate::types::Relation;

/// Classify every task relative to `focus_id` using direct edges only.
///
/// A task is an `Ancestor` if the focused task lists it as a dependency and
/// a `Descendant` if it lists the focused task as one. This single-hop rule
/// is what drives the live-hover highlight; [`classify_transitive`] is the
/// full-closure variant for callers that want whole execution chains.
///
/// A focus id absent from the snapshot (hover racing a refresh) classifies
/// everything as `Unrelated` rather than failing.
pub fn classify(focus_id: &str, graph: &DependencyGraph) -> HashMap<TaskId, Relation> {
    if !graph.contains(focus_id) {
        debug!(focus = %focus_id, "focus id not in snapshot; classifying all tasks unrelated");
        return graph
            .task_ids()
            .map(|id| (id.to_string(), Relation::Unrelated))
            .collect();
    }

    let focus_deps = graph.dependencies_of(focus_id);

    graph
        .task_ids()
        .map(|id| {
            let relation = if id == focus_id {
                Relation::Focus
            } else if focus_deps.iter().any(|dep| dep == id) {
                Relation::Ancestor
            } else if graph.dependencies_of(id).iter().any(|dep| dep == focus_id) {
                Relation::Descendant
            } else {
                Relation::Unrelated
            };
            (id.to_string(), relation)
        })
        .collect()
}

/// Classify every task relative to `focus_id` using the transitive closure.
///
/// Ancestors are everything reachable by walking dependency edges up from
/// the focus; descendants by walking dependent edges down. With cyclic input
/// a task could be reachable both ways; the ancestor side wins in that case.
pub fn classify_transitive(focus_id: &str, graph: &DependencyGraph) -> HashMap<TaskId, Relation> {
    if !graph.contains(focus_id) {
        debug!(focus = %focus_id, "focus id not in snapshot; classifying all tasks unrelated");
        return graph
            .task_ids()
            .map(|id| (id.to_string(), Relation::Unrelated))
            .collect();
    }

    let ancestors = reach(graph, focus_id, |g, id| g.dependencies_of(id));
    let descendants = reach(graph, focus_id, |g, id| g.dependents_of(id));

    graph
        .task_ids()
        .map(|id| {
            let relation = if id == focus_id {
                Relation::Focus
            } else if ancestors.contains(id) {
                Relation::Ancestor
            } else if descendants.contains(id) {
                Relation::Descendant
            } else {
                Relation::Unrelated
            };
            (id.to_string(), relation)
        })
        .collect()
}

/// All ids reachable from `start` (exclusive) by repeatedly following
/// `next` edges.
fn reach<'a, F>(graph: &'a DependencyGraph, start: &str, next: F) -> HashSet<TaskId>
where
    F: Fn(&'a DependencyGraph, &str) -> &'a [TaskId],
{
    let mut seen: HashSet<TaskId> = HashSet::new();
    let mut stack: Vec<TaskId> = next(graph, start).to_vec();

    while let Some(id) = stack.pop() {
        if !seen.insert(id.clone()) {
            continue;
        }
        stack.extend(next(graph, &id).iter().cloned());
    }

    seen
}
