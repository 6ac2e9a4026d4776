// tests/graph_scenarios.rs

mod common;
use crate::common::builders::{task, task_after};
use crate::common::init_tracing;

use std::error::Error;

use taskdag::config::LayoutConfig;
use taskdag::graph::{classify, DependencyGraph, Leveling};
use taskdag::layout::GraphLayout;
use taskdag::types::Relation;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn linear_chain_levels_edges_and_relations() -> TestResult {
    init_tracing();

    let tasks = vec![
        task("1"),
        task_after("2", &["1"]),
        task_after("3", &["2"]),
    ];

    let graph = DependencyGraph::build(&tasks);
    let leveling = Leveling::compute(&graph);

    assert_eq!(leveling.level_of("1"), Some(0));
    assert_eq!(leveling.level_of("2"), Some(1));
    assert_eq!(leveling.level_of("3"), Some(2));
    assert_eq!(leveling.level_count(), 3);

    let layout = GraphLayout::compute(&graph, &leveling, &LayoutConfig::default());
    assert_eq!(layout.edges.len(), 2);
    assert_eq!(
        layout
            .edges
            .iter()
            .map(|e| (e.from.as_str(), e.to.as_str()))
            .collect::<Vec<_>>(),
        vec![("1", "2"), ("2", "3")]
    );

    let relations = classify("2", &graph);
    assert_eq!(relations["1"], Relation::Ancestor);
    assert_eq!(relations["2"], Relation::Focus);
    assert_eq!(relations["3"], Relation::Descendant);

    Ok(())
}

#[test]
fn diamond_groups_middle_level_into_two_columns() -> TestResult {
    init_tracing();

    let tasks = vec![
        task("1"),
        task_after("2", &["1"]),
        task_after("3", &["1"]),
        task_after("4", &["2", "3"]),
    ];

    let graph = DependencyGraph::build(&tasks);
    let leveling = Leveling::compute(&graph);

    assert_eq!(leveling.level_of("1"), Some(0));
    assert_eq!(leveling.level_of("2"), Some(1));
    assert_eq!(leveling.level_of("3"), Some(1));
    assert_eq!(leveling.level_of("4"), Some(2));
    assert_eq!(leveling.level_count(), 3);

    let layout = GraphLayout::compute(&graph, &leveling, &LayoutConfig::default());
    assert_eq!(layout.edges.len(), 4);

    // Input order within the level drives columns: 2 before 3.
    assert_eq!(layout.nodes["2"].column, 0);
    assert_eq!(layout.nodes["3"].column, 1);
    assert!(layout.nodes["2"].x < layout.nodes["3"].x);

    Ok(())
}

#[test]
fn empty_snapshot_yields_empty_everything() -> TestResult {
    init_tracing();

    let graph = DependencyGraph::build(&[]);
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);

    let leveling = Leveling::compute(&graph);
    assert_eq!(leveling.level_count(), 0);
    assert!(leveling.levels().is_empty());
    assert!(leveling.fallback_ids().is_empty());

    let layout = GraphLayout::compute(&graph, &leveling, &LayoutConfig::default());
    assert!(layout.nodes.is_empty());
    assert!(layout.edges.is_empty());
    assert_eq!(layout.width, 0.0);
    assert_eq!(layout.height, 0.0);

    Ok(())
}

#[test]
fn dangling_dependency_is_treated_as_satisfied() -> TestResult {
    init_tracing();

    let tasks = vec![task_after("real", &["ghost-id"])];

    let graph = DependencyGraph::build(&tasks);
    assert_eq!(graph.in_degree_of("real"), 0);
    assert!(graph.dependencies_of("real").is_empty());

    let leveling = Leveling::compute(&graph);
    assert_eq!(leveling.level_of("real"), Some(0));
    assert!(leveling.fallback_ids().is_empty());

    let layout = GraphLayout::compute(&graph, &leveling, &LayoutConfig::default());
    assert_eq!(layout.nodes.len(), 1);
    assert!(layout.edges.is_empty());
    assert!(!layout.nodes.contains_key("ghost-id"));

    Ok(())
}

#[test]
fn self_dependency_is_skipped() -> TestResult {
    init_tracing();

    let tasks = vec![task_after("loner", &["loner"]), task("other")];

    let graph = DependencyGraph::build(&tasks);
    assert_eq!(graph.in_degree_of("loner"), 0);
    assert!(graph.dependents_of("loner").is_empty());

    let leveling = Leveling::compute(&graph);
    assert_eq!(leveling.level_of("loner"), Some(0));
    assert!(leveling.fallback_ids().is_empty());

    Ok(())
}

#[test]
fn duplicate_id_keeps_last_record_and_first_slot() -> TestResult {
    init_tracing();

    let tasks = vec![
        task("a"),
        task("b"),
        {
            let mut again = task_after("a", &["b"]);
            again.title = "a, revised".to_string();
            again
        },
    ];

    let graph = DependencyGraph::build(&tasks);
    assert_eq!(graph.len(), 2);

    // Last record wins...
    assert_eq!(graph.record("a").unwrap().title, "a, revised");
    assert_eq!(graph.dependencies_of("a"), ["b".to_string()]);

    // ...but the id keeps its original position in the ordering.
    assert_eq!(graph.task_ids().collect::<Vec<_>>(), vec!["a", "b"]);

    Ok(())
}

#[test]
fn repeated_dependency_produces_one_edge() -> TestResult {
    init_tracing();

    let tasks = vec![task("base"), task_after("top", &["base", "base"])];

    let graph = DependencyGraph::build(&tasks);
    assert_eq!(graph.in_degree_of("top"), 1);
    assert_eq!(graph.dependents_of("base"), ["top".to_string()]);

    let leveling = Leveling::compute(&graph);
    let layout = GraphLayout::compute(&graph, &leveling, &LayoutConfig::default());
    assert_eq!(layout.edges.len(), 1);

    Ok(())
}

#[test]
fn isolated_tasks_all_land_on_level_zero() -> TestResult {
    init_tracing();

    let tasks = vec![task("x"), task("y"), task("z")];

    let graph = DependencyGraph::build(&tasks);
    let leveling = Leveling::compute(&graph);
    let layout = GraphLayout::compute(&graph, &leveling, &LayoutConfig::default());

    assert_eq!(layout.nodes.len(), 3);
    assert!(layout.edges.is_empty());
    for (column, id) in ["x", "y", "z"].iter().enumerate() {
        assert_eq!(layout.nodes[*id].level, 0);
        assert_eq!(layout.nodes[*id].column, column);
    }

    Ok(())
}
