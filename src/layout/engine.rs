// src/layout/engine.rs

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::config::LayoutConfig;
use crate::graph::{DependencyGraph, Leveling};
use crate::task::TaskId;
use crate::types::{TaskKind, TaskStatus};

/// A positioned node, ready for rendering.
///
/// `x`/`y` give the top-left corner of the node box on the virtual canvas;
/// they are a pure function of `level`, `column` and the canvas constants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: TaskId,
    pub title: String,
    pub status: TaskStatus,
    pub kind: TaskKind,
    /// Topological level (0 = no unresolved dependencies).
    pub level: usize,
    /// 0-based position among siblings at the same level, left to right in
    /// snapshot input order.
    pub column: usize,
    pub x: f64,
    pub y: f64,
    /// True when the level is the cycle fallback rather than a real
    /// topological depth; renderers may flag these nodes.
    pub fallback: bool,
}

/// One dependency relation that resolved to two known nodes, with anchor
/// points for drawing: bottom-center of the dependency to top-center of the
/// dependent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    pub from: TaskId,
    pub to: TaskId,
    pub from_x: f64,
    pub from_y: f64,
    pub to_x: f64,
    pub to_y: f64,
}

/// The complete layout for one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct GraphLayout {
    /// Every task in the snapshot, keyed by id, isolated tasks included.
    pub nodes: HashMap<TaskId, GraphNode>,
    /// One edge per resolved dependency, in deterministic order (dependents
    /// in input order, their dependency lists in declared order).
    pub edges: Vec<GraphEdge>,
    pub level_count: usize,
    /// Virtual canvas extent actually used.
    pub width: f64,
    pub height: f64,
}

impl GraphLayout {
    /// Place every task on the virtual canvas.
    ///
    /// Tasks are grouped by level, keeping snapshot input order within each
    /// group; each row of `k` nodes is centered about the midpoint of the
    /// nominal canvas width. A row wider than the canvas simply overflows
    /// symmetrically on both sides.
    pub fn compute(graph: &DependencyGraph, leveling: &Leveling, config: &LayoutConfig) -> Self {
        let level_count = leveling.level_count();

        let mut groups: Vec<Vec<&str>> = vec![Vec::new(); level_count];
        for id in graph.task_ids() {
            let level = leveling.level_of(id).unwrap_or(0);
            groups[level].push(id);
        }

        let mut nodes: HashMap<TaskId, GraphNode> = HashMap::new();

        for (level, group) in groups.iter().enumerate() {
            let count = group.len();
            if count == 0 {
                continue;
            }

            let row_width = count as f64 * config.node_width
                + (count as f64 - 1.0) * config.column_gap;
            let start_x = (config.canvas_width - row_width) / 2.0;
            let y = config.base_offset + level as f64 * config.level_gap;

            for (column, &id) in group.iter().enumerate() {
                let Some(record) = graph.record(id) else {
                    continue;
                };
                let x = start_x + column as f64 * (config.node_width + config.column_gap);

                nodes.insert(
                    id.to_string(),
                    GraphNode {
                        id: id.to_string(),
                        title: record.title.clone(),
                        status: record.status,
                        kind: record.kind,
                        level,
                        column,
                        x,
                        y,
                        fallback: leveling.is_fallback(id),
                    },
                );
            }
        }

        let mut edges: Vec<GraphEdge> = Vec::new();
        for id in graph.task_ids() {
            for dep in graph.dependencies_of(id) {
                let (Some(source), Some(target)) = (nodes.get(dep.as_str()), nodes.get(id))
                else {
                    continue;
                };

                edges.push(GraphEdge {
                    from: dep.clone(),
                    to: id.to_string(),
                    from_x: source.x + config.node_width / 2.0,
                    from_y: source.y + config.node_height,
                    to_x: target.x + config.node_width / 2.0,
                    to_y: target.y,
                });
            }
        }

        let height = if level_count == 0 {
            0.0
        } else {
            2.0 * config.base_offset
                + (level_count as f64 - 1.0) * config.level_gap
                + config.node_height
        };
        let width = if nodes.is_empty() {
            0.0
        } else {
            config.canvas_width
        };

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            levels = level_count,
            "layout computed"
        );

        Self {
            nodes,
            edges,
            level_count,
            width,
            height,
        }
    }
}
