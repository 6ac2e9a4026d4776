// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod graph;
pub mod layout;
pub mod logging;
pub mod snapshot;
pub mod task;
pub mod types;

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::{load_and_validate, LayoutConfig};
use crate::graph::{classify, classify_transitive, DependencyGraph, Leveling};
use crate::layout::GraphLayout;
use crate::task::{TaskId, TaskRecord};
use crate::types::Relation;

/// Everything derived from one task snapshot: the normalized graph, its
/// level assignment and the positioned layout.
///
/// Recomputed from scratch per snapshot; carries no state beyond it.
#[derive(Debug, Clone)]
pub struct GraphView {
    pub graph: DependencyGraph,
    pub leveling: Leveling,
    pub layout: GraphLayout,
}

/// Run the full pipeline for one snapshot: build the dependency graph,
/// level it, and place it on the canvas.
///
/// This is the one call a UI controller makes on every snapshot refresh;
/// [`classify`] runs separately on hover events off the same `graph`.
pub fn compute_view(tasks: &[TaskRecord], config: &LayoutConfig) -> GraphView {
    let graph = DependencyGraph::build(tasks);
    let leveling = Leveling::compute(&graph);
    let layout = GraphLayout::compute(&graph, &leveling, config);

    info!(
        tasks = graph.len(),
        edges = graph.edge_count(),
        levels = leveling.level_count(),
        "graph view computed"
    );

    GraphView {
        graph,
        leveling,
        layout,
    }
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - snapshot loading
/// - layout config loading (or defaults)
/// - the graph pipeline
/// - relation classification for `--focus`
/// - text or JSON output
pub fn run(args: CliArgs) -> Result<()> {
    let snapshot_path = PathBuf::from(&args.snapshot);
    let tasks = snapshot::load_from_path(&snapshot_path)?;

    let config = match &args.config {
        Some(path) => load_and_validate(path)?,
        None => LayoutConfig::default(),
    };

    let view = compute_view(&tasks, &config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view.layout)?);
        return Ok(());
    }

    print_view(&view);

    if let Some(focus) = &args.focus {
        let relations = if args.transitive {
            classify_transitive(focus, &view.graph)
        } else {
            classify(focus, &view.graph)
        };
        print_relations(focus, &view, &relations);
    }

    Ok(())
}

/// Text report: tasks per level with placements, then the edge list.
fn print_view(view: &GraphView) {
    println!(
        "task graph: {} tasks, {} levels, {} edges",
        view.graph.len(),
        view.leveling.level_count(),
        view.layout.edges.len()
    );

    for level in 0..view.leveling.level_count() {
        println!("level {level}:");
        for id in view.graph.task_ids() {
            if view.leveling.level_of(id) != Some(level) {
                continue;
            }
            let Some(node) = view.layout.nodes.get(id) else {
                continue;
            };
            let flag = if node.fallback { " [cycle]" } else { "" };
            println!(
                "  - {} \"{}\" ({}, {}) col {} at ({:.1}, {:.1}){}",
                node.id, node.title, node.status, node.kind, node.column, node.x, node.y, flag
            );
        }
    }

    if !view.layout.edges.is_empty() {
        println!("edges:");
        for edge in &view.layout.edges {
            println!("  {} -> {}", edge.from, edge.to);
        }
    }
}

fn print_relations(focus: &str, view: &GraphView, relations: &HashMap<TaskId, Relation>) {
    println!("relations for focus '{focus}':");
    for id in view.graph.task_ids() {
        if let Some(relation) = relations.get(id) {
            println!("  {id}: {relation}");
        }
    }
}
