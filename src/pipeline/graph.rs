// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! Task dependency graph
//!
//! Builds a directed graph over the registry (edges point from a dependency
//! to its dependent), resolves the transitive closure of a requested task,
//! and produces a topological execution order. Cycles and unknown
//! dependencies are detected before any task body runs.

use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::{HashMap, HashSet};

use crate::errors::SlipwayError;
use crate::pipeline::TaskRegistry;

/// Dependency graph over a task registry
#[derive(Debug)]
pub struct TaskGraph {
    graph: DiGraph<String, ()>,
    name_to_index: HashMap<String, NodeIndex>,
}

impl TaskGraph {
    /// Build the graph for a registry.
    ///
    /// Fails with `UnknownDependency` if any task names a dependency that is
    /// not registered. Cycles are not rejected here; they are reported when
    /// a requested task's closure is resolved, so a cycle outside that
    /// closure does not block unrelated tasks.
    pub fn build(registry: &TaskRegistry) -> Result<Self, SlipwayError> {
        let mut graph = DiGraph::new();
        let mut name_to_index = HashMap::new();

        for name in registry.names() {
            let node = graph.add_node(name.to_string());
            name_to_index.insert(name.to_string(), node);
        }

        for name in registry.names() {
            let Some(task) = registry.get(name) else {
                continue;
            };
            let task_node = name_to_index[name];

            for dep_name in task.dependencies() {
                let dep_node = name_to_index.get(dep_name).ok_or_else(|| {
                    SlipwayError::UnknownDependency {
                        task: name.to_string(),
                        dependency: dep_name.clone(),
                    }
                })?;

                if !graph.contains_edge(*dep_node, task_node) {
                    graph.add_edge(*dep_node, task_node, ());
                }
            }
        }

        Ok(Self {
            graph,
            name_to_index,
        })
    }

    /// Topologically sorted execution order for a requested task.
    ///
    /// The order covers exactly the transitive dependency closure of the
    /// task, each member once, dependencies before dependents.
    pub fn execution_order(&self, task: &str) -> Result<Vec<String>, SlipwayError> {
        let start = self
            .name_to_index
            .get(task)
            .ok_or_else(|| SlipwayError::TaskNotFound {
                task: task.to_string(),
            })?;

        // Walk dependency edges backwards; the visited set keeps this
        // terminating even when the closure contains a cycle.
        let mut closure: HashSet<NodeIndex> = HashSet::new();
        let mut stack = vec![*start];
        while let Some(node) = stack.pop() {
            if closure.insert(node) {
                stack.extend(self.graph.neighbors_directed(node, Direction::Incoming));
            }
        }

        // Topologically sort the induced subgraph. Members are inserted in
        // name order so the order among independent tasks is stable across
        // runs.
        let mut members: Vec<NodeIndex> = closure.iter().copied().collect();
        members.sort_unstable_by(|a, b| self.graph[*a].cmp(&self.graph[*b]));

        let mut sub = DiGraph::<String, ()>::new();
        let mut sub_index: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        for node in members {
            sub_index.insert(node, sub.add_node(self.graph[node].clone()));
        }
        for edge in self.graph.edge_indices() {
            if let Some((from, to)) = self.graph.edge_endpoints(edge) {
                if closure.contains(&from) && closure.contains(&to) {
                    sub.add_edge(sub_index[&from], sub_index[&to], ());
                }
            }
        }

        toposort(&sub, None)
            .map(|nodes| nodes.into_iter().map(|n| sub[n].clone()).collect())
            .map_err(|_| SlipwayError::CircularDependency {
                tasks: cycle_members(&sub),
            })
    }

    /// Direct dependencies of a task
    pub fn dependencies(&self, task: &str) -> Option<Vec<String>> {
        let node = self.name_to_index.get(task)?;
        let mut deps: Vec<String> = self
            .graph
            .neighbors_directed(*node, Direction::Incoming)
            .map(|n| self.graph[n].clone())
            .collect();
        deps.sort_unstable();
        Some(deps)
    }

    /// Generate a text listing of the execution order for a task
    pub fn to_text(&self, task: &str) -> Result<String, SlipwayError> {
        let order = self.execution_order(task)?;
        let mut out = String::new();

        for (i, name) in order.iter().enumerate() {
            let deps = self.dependencies(name).unwrap_or_default();

            out.push_str(&format!("{}. {}", i + 1, name));
            if !deps.is_empty() {
                out.push_str(&format!(" [depends: {}]", deps.join(", ")));
            }
            out.push('\n');
        }

        Ok(out)
    }

    /// Generate a DOT diagram of the full graph
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph tasks {\n");
        out.push_str("    rankdir=TB;\n");
        out.push_str("    node [shape=box, style=rounded];\n\n");

        for edge in self.graph.edge_indices() {
            if let Some((from, to)) = self.graph.edge_endpoints(edge) {
                out.push_str(&format!(
                    "    \"{}\" -> \"{}\";\n",
                    self.graph[from], self.graph[to]
                ));
            }
        }

        // Isolated nodes would otherwise not appear
        for (name, node) in &self.name_to_index {
            if self.graph.neighbors_undirected(*node).count() == 0 {
                out.push_str(&format!("    \"{}\";\n", name));
            }
        }

        out.push_str("}\n");
        out
    }

    /// Generate a Mermaid diagram of the full graph
    pub fn to_mermaid(&self) -> String {
        let mut out = String::from("graph TD\n");

        for name in self.name_to_index.keys() {
            out.push_str(&format!("    {}[{}]\n", name, name));
        }

        for edge in self.graph.edge_indices() {
            if let Some((from, to)) = self.graph.edge_endpoints(edge) {
                out.push_str(&format!(
                    "    {} --> {}\n",
                    self.graph[from], self.graph[to]
                ));
            }
        }

        out
    }
}

/// Names of the tasks participating in a cycle
fn cycle_members(graph: &DiGraph<String, ()>) -> Vec<String> {
    let mut members: Vec<String> = tarjan_scc(graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || scc.iter().any(|&n| graph.contains_edge(n, n)))
        .flatten()
        .map(|n| graph[n].clone())
        .collect();
    members.sort_unstable();
    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::GroupTask;
    use std::sync::Arc;

    fn make_registry(tasks: Vec<(&str, Vec<&str>)>) -> TaskRegistry {
        let mut registry = TaskRegistry::new();
        for (name, deps) in tasks {
            registry.register(Arc::new(GroupTask::new(
                name,
                deps.into_iter().map(String::from).collect(),
            )));
        }
        registry
    }

    #[test]
    fn test_linear_order() {
        let registry = make_registry(vec![("a", vec![]), ("b", vec!["a"]), ("c", vec!["b"])]);

        let graph = TaskGraph::build(&registry).unwrap();
        let order = graph.execution_order("c").unwrap();

        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_diamond_runs_shared_dependency_once() {
        let registry = make_registry(vec![
            ("a", vec![]),
            ("b", vec!["a"]),
            ("c", vec!["a"]),
            ("d", vec!["b", "c"]),
        ]);

        let graph = TaskGraph::build(&registry).unwrap();
        let order = graph.execution_order("d").unwrap();

        assert_eq!(order.len(), 4);
        assert_eq!(order.iter().filter(|n| *n == "a").count(), 1);
        assert_eq!(order[0], "a");
        assert_eq!(order[3], "d");
    }

    #[test]
    fn test_closure_excludes_unrelated_tasks() {
        let registry = make_registry(vec![
            ("a", vec![]),
            ("b", vec!["a"]),
            ("lonely", vec![]),
        ]);

        let graph = TaskGraph::build(&registry).unwrap();
        let order = graph.execution_order("b").unwrap();

        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn test_cycle_fails_resolution() {
        let registry = make_registry(vec![("a", vec!["b"]), ("b", vec!["a"]), ("c", vec!["a"])]);

        let graph = TaskGraph::build(&registry).unwrap();
        let err = graph.execution_order("c").unwrap_err();

        match err {
            SlipwayError::CircularDependency { tasks } => {
                assert_eq!(tasks, vec!["a", "b"]);
            }
            other => panic!("expected CircularDependency, got {:?}", other),
        }
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let registry = make_registry(vec![("a", vec!["a"])]);

        let graph = TaskGraph::build(&registry).unwrap();
        let err = graph.execution_order("a").unwrap_err();

        match err {
            SlipwayError::CircularDependency { tasks } => assert_eq!(tasks, vec!["a"]),
            other => panic!("expected CircularDependency, got {:?}", other),
        }
    }

    #[test]
    fn test_cycle_outside_closure_does_not_block() {
        let registry = make_registry(vec![
            ("x", vec!["y"]),
            ("y", vec!["x"]),
            ("a", vec![]),
            ("b", vec!["a"]),
        ]);

        let graph = TaskGraph::build(&registry).unwrap();
        assert_eq!(graph.execution_order("b").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_independent_tasks_order_is_stable() {
        // The order among independent members of a closure does not drift
        // between graph constructions.
        let tasks = vec![
            ("zeta", vec![]),
            ("alpha", vec![]),
            ("mid", vec![]),
            ("all", vec!["zeta", "alpha", "mid"]),
        ];

        let first = TaskGraph::build(&make_registry(tasks.clone()))
            .unwrap()
            .execution_order("all")
            .unwrap();
        assert_eq!(first.len(), 4);
        assert_eq!(first[3], "all");

        for _ in 0..10 {
            let order = TaskGraph::build(&make_registry(tasks.clone()))
                .unwrap()
                .execution_order("all")
                .unwrap();
            assert_eq!(order, first);
        }
    }

    #[test]
    fn test_unknown_dependency() {
        let registry = make_registry(vec![("a", vec!["nonexistent"])]);

        let err = TaskGraph::build(&registry).unwrap_err();
        assert!(matches!(err, SlipwayError::UnknownDependency { .. }));
    }

    #[test]
    fn test_unknown_requested_task() {
        let registry = make_registry(vec![("a", vec![])]);

        let graph = TaskGraph::build(&registry).unwrap();
        let err = graph.execution_order("missing").unwrap_err();

        assert!(matches!(err, SlipwayError::TaskNotFound { .. }));
    }

    #[test]
    fn test_dot_and_mermaid_output() {
        let registry = make_registry(vec![("a", vec![]), ("b", vec!["a"])]);

        let graph = TaskGraph::build(&registry).unwrap();

        let dot = graph.to_dot();
        assert!(dot.contains("digraph tasks"));
        assert!(dot.contains("\"a\" -> \"b\""));

        let mermaid = graph.to_mermaid();
        assert!(mermaid.contains("graph TD"));
        assert!(mermaid.contains("a --> b"));
    }

    #[test]
    fn test_text_output_lists_dependencies() {
        let registry = make_registry(vec![("a", vec![]), ("b", vec!["a"])]);

        let graph = TaskGraph::build(&registry).unwrap();
        let text = graph.to_text("b").unwrap();

        assert!(text.contains("1. a"));
        assert!(text.contains("2. b [depends: a]"));
    }
}
