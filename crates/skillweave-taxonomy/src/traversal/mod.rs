//! Traversal primitives over the prerequisite DAG.

mod closure;

use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use skillweave_core::errors::EngineResult;
use skillweave_core::NodeId;

use crate::graph::edge::EdgeKind;
use crate::graph::TaxonomyGraph;

/// Which side of a node to walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Nodes this node depends on (incoming edges).
    Prerequisites,
    /// Nodes that depend on this node (outgoing edges).
    Dependents,
}

impl Direction {
    pub(crate) fn petgraph(self) -> petgraph::Direction {
        match self {
            Self::Prerequisites => petgraph::Direction::Incoming,
            Self::Dependents => petgraph::Direction::Outgoing,
        }
    }
}

/// An adjacent node and the edge that reaches it.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub id: NodeId,
    pub weight: f64,
    pub kind: EdgeKind,
}

impl TaxonomyGraph {
    /// Immediate prerequisites or dependents, in edge insertion order.
    ///
    /// Sub-areas and skill groups carry no edges and yield an empty list.
    pub fn neighbors(&self, id: &NodeId, direction: Direction) -> EngineResult<Vec<Neighbor>> {
        self.require(id)?;
        let Some(idx) = self.index_of(id) else {
            return Ok(Vec::new());
        };
        let dir = direction.petgraph();
        let mut neighbors: Vec<Neighbor> = self
            .graph
            .edges_directed(idx, dir)
            .filter_map(|edge| {
                let other = match direction {
                    Direction::Prerequisites => edge.source(),
                    Direction::Dependents => edge.target(),
                };
                self.graph.node_weight(other).map(|id| Neighbor {
                    id: id.clone(),
                    weight: edge.weight().weight,
                    kind: edge.weight().kind,
                })
            })
            .collect();
        // petgraph yields newest edges first.
        neighbors.reverse();
        Ok(neighbors)
    }
}
