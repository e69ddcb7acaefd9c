//! dag.rs
//! Ordering algorithms over a `VertexRegistry`.

use super::storage::VertexRegistry;
use crate::error::{PolyError, Result};
use petgraph::algo::toposort;
use petgraph::graph::NodeIndex;
use std::fmt::Display;
use std::hash::Hash;

/// Returns a topological order, where every edge's `from` precedes its `to`.
///
/// Fails on any cycle, including a vertex with an edge to itself.
pub fn topological_order<V>(registry: &VertexRegistry<V>) -> Result<Vec<NodeIndex>>
where
    V: Clone + Eq + Hash + Display,
{
    toposort(registry.graph(), None).map_err(|cycle| {
        let vertex = registry.vertex(cycle.node_id()).to_string();
        log::warn!("Cycle detected involving vertex {}", vertex);
        PolyError::CycleDetected { vertex }
    })
}
