//! Transitive closures, memoized for the lifetime of the graph.

use std::collections::BTreeSet;
use std::sync::Arc;

use dashmap::DashMap;
use petgraph::graph::NodeIndex;
use petgraph::visit::{Dfs, Reversed, Walker};

use skillweave_core::errors::EngineResult;
use skillweave_core::NodeId;

use super::Direction;
use crate::graph::TaxonomyGraph;

impl TaxonomyGraph {
    /// Every transitive prerequisite of `id`, excluding `id` itself.
    pub fn ancestors(&self, id: &NodeId) -> EngineResult<Arc<BTreeSet<NodeId>>> {
        self.closure(id, Direction::Prerequisites)
    }

    /// Every transitive dependent of `id`, excluding `id` itself.
    pub fn descendants(&self, id: &NodeId) -> EngineResult<Arc<BTreeSet<NodeId>>> {
        self.closure(id, Direction::Dependents)
    }

    /// Number of transitive prerequisites; 0 for a root.
    pub fn prerequisite_count(&self, id: &NodeId) -> EngineResult<usize> {
        Ok(self.ancestors(id)?.len())
    }

    fn closure(&self, id: &NodeId, direction: Direction) -> EngineResult<Arc<BTreeSet<NodeId>>> {
        self.require(id)?;
        let Some(idx) = self.index_of(id) else {
            return Ok(Arc::new(BTreeSet::new()));
        };
        let memo = match direction {
            Direction::Prerequisites => &self.ancestors_memo,
            Direction::Dependents => &self.descendants_memo,
        };
        Ok(memoized(memo, idx, || self.walk(idx, direction)))
    }

    fn walk(&self, start: NodeIndex, direction: Direction) -> BTreeSet<NodeId> {
        let reached: Vec<NodeIndex> = match direction {
            Direction::Dependents => Dfs::new(&self.graph, start).iter(&self.graph).collect(),
            Direction::Prerequisites => {
                let reversed = Reversed(&self.graph);
                Dfs::new(reversed, start).iter(reversed).collect()
            }
        };
        reached
            .into_iter()
            .filter(|&idx| idx != start)
            .filter_map(|idx| self.graph.node_weight(idx).cloned())
            .collect()
    }
}

fn memoized(
    memo: &DashMap<NodeIndex, Arc<BTreeSet<NodeId>>>,
    idx: NodeIndex,
    compute: impl FnOnce() -> BTreeSet<NodeId>,
) -> Arc<BTreeSet<NodeId>> {
    if let Some(hit) = memo.get(&idx) {
        return Arc::clone(hit.value());
    }
    // Two threads may race to fill the same slot; both compute the same set.
    let set = Arc::new(compute());
    memo.entry(idx).or_insert_with(|| Arc::clone(&set));
    set
}
