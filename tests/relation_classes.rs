// tests/relation_classes.rs

mod common;
use crate::common::builders::{task, task_after};
use crate::common::init_tracing;

use std::error::Error;

use taskdag::graph::{classify, classify_transitive, DependencyGraph};
use taskdag::types::Relation;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn focus_classifies_as_self() -> TestResult {
    init_tracing();

    let graph = DependencyGraph::build(&[task("solo")]);
    let relations = classify("solo", &graph);

    assert_eq!(relations["solo"], Relation::Focus);

    Ok(())
}

#[test]
fn direct_dependency_relations_are_symmetric() -> TestResult {
    init_tracing();

    let tasks = vec![task("Y"), task_after("X", &["Y"])];
    let graph = DependencyGraph::build(&tasks);

    let from_y = classify("Y", &graph);
    assert_eq!(from_y["X"], Relation::Descendant);

    let from_x = classify("X", &graph);
    assert_eq!(from_x["Y"], Relation::Ancestor);

    Ok(())
}

#[test]
fn single_hop_classification_ignores_transitive_links() -> TestResult {
    init_tracing();

    let tasks = vec![
        task("a"),
        task_after("b", &["a"]),
        task_after("c", &["b"]),
    ];
    let graph = DependencyGraph::build(&tasks);

    // Hover highlighting only follows direct edges: from "c", "a" is two
    // hops away and stays unrelated.
    let direct = classify("c", &graph);
    assert_eq!(direct["b"], Relation::Ancestor);
    assert_eq!(direct["a"], Relation::Unrelated);

    let transitive = classify_transitive("c", &graph);
    assert_eq!(transitive["b"], Relation::Ancestor);
    assert_eq!(transitive["a"], Relation::Ancestor);

    Ok(())
}

#[test]
fn transitive_classification_walks_both_directions() -> TestResult {
    init_tracing();

    let tasks = vec![
        task("root"),
        task_after("mid", &["root"]),
        task_after("leaf", &["mid"]),
        task("aside"),
    ];
    let graph = DependencyGraph::build(&tasks);

    let relations = classify_transitive("mid", &graph);
    assert_eq!(relations["root"], Relation::Ancestor);
    assert_eq!(relations["leaf"], Relation::Descendant);
    assert_eq!(relations["aside"], Relation::Unrelated);
    assert_eq!(relations["mid"], Relation::Focus);

    Ok(())
}

#[test]
fn missing_focus_classifies_everything_unrelated() -> TestResult {
    init_tracing();

    let tasks = vec![task("a"), task_after("b", &["a"])];
    let graph = DependencyGraph::build(&tasks);

    for relations in [
        classify("gone", &graph),
        classify_transitive("gone", &graph),
    ] {
        assert_eq!(relations.len(), 2);
        assert!(relations.values().all(|r| *r == Relation::Unrelated));
    }

    Ok(())
}

#[test]
fn unrelated_siblings_stay_unrelated() -> TestResult {
    init_tracing();

    let tasks = vec![
        task("parent"),
        task_after("left", &["parent"]),
        task_after("right", &["parent"]),
    ];
    let graph = DependencyGraph::build(&tasks);

    let relations = classify("left", &graph);
    assert_eq!(relations["parent"], Relation::Ancestor);
    assert_eq!(relations["right"], Relation::Unrelated);

    Ok(())
}

#[test]
fn classification_covers_every_task() -> TestResult {
    init_tracing();

    let tasks = vec![
        task("a"),
        task_after("b", &["a"]),
        task_after("c", &["a", "ghost"]),
    ];
    let graph = DependencyGraph::build(&tasks);

    let relations = classify("a", &graph);
    assert_eq!(relations.len(), 3);
    assert!(!relations.contains_key("ghost"));

    Ok(())
}
