// src/graph/audit.rs

//! Strict cycle diagnostics.
//!
//! The leveler tolerates cycles by assigning fallback levels; this module is
//! the strict counterpart for callers (and tests) that want malformed input
//! surfaced as an error instead of silently degraded.

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::errors::{Result, TaskDagError};
use crate::graph::DependencyGraph;

/// Verify that the resolved dependency relation is acyclic.
///
/// Edge direction: dependency -> dependent, matching
/// [`DependencyGraph::dependents_of`]. A topological sort fails exactly when
/// there is a cycle; the error names one involved task.
pub fn verify_acyclic(graph: &DependencyGraph) -> Result<()> {
    let mut dag: DiGraphMap<&str, ()> = DiGraphMap::new();

    for id in graph.task_ids() {
        dag.add_node(id);
    }

    for id in graph.task_ids() {
        for dep in graph.dependencies_of(id) {
            dag.add_edge(dep.as_str(), id, ());
        }
    }

    match toposort(&dag, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let node = cycle.node_id();
            Err(TaskDagError::DagCycle(format!(
                "cycle detected in task graph involving task '{}'",
                node
            )))
        }
    }
}
