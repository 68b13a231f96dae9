//! Cycle detection by depth-first search with a recursion stack.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{depth_first_search, Control, DfsEvent};
use skillweave_core::errors::GraphIntegrityError;
use skillweave_core::NodeId;

use super::edge::DependencyEdge;

/// Find one cycle, returned as the node sequence `v, …, u, v`.
///
/// A back edge `u → v` closes a cycle exactly when `v` is still on the
/// recursion stack, so the stack slice from `v` to `u` is the cycle.
pub fn find_cycle(graph: &DiGraph<NodeId, DependencyEdge>) -> Option<Vec<NodeIndex>> {
    let mut stack: Vec<NodeIndex> = Vec::new();
    depth_first_search(graph, graph.node_indices(), |event| match event {
        DfsEvent::Discover(node, _) => {
            stack.push(node);
            Control::Continue
        }
        DfsEvent::Finish(_, _) => {
            stack.pop();
            Control::Continue
        }
        DfsEvent::BackEdge(_, target) => {
            let start = stack.iter().rposition(|&n| n == target).unwrap_or(0);
            let mut cycle = stack[start..].to_vec();
            cycle.push(target);
            Control::Break(cycle)
        }
        _ => Control::Continue,
    })
    .break_value()
}

/// Reject the graph if it contains any cycle.
pub fn ensure_acyclic(graph: &DiGraph<NodeId, DependencyEdge>) -> Result<(), GraphIntegrityError> {
    match find_cycle(graph) {
        None => Ok(()),
        Some(cycle) => {
            let path = cycle
                .iter()
                .filter_map(|&idx| graph.node_weight(idx))
                .map(NodeId::as_str)
                .collect::<Vec<_>>()
                .join(" -> ");
            Err(GraphIntegrityError::Cycle { path })
        }
    }
}
