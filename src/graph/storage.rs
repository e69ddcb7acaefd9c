//! storage.rs
//! Interns caller vertices into a petgraph `DiGraph`.
//!
//! Each vertex is stored once as a node weight; each edge weight is the
//! position of the caller's edge in its input slice.

use super::edge::GetEdge;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct VertexRegistry<V> {
    graph: DiGraph<V, usize>,
    index: HashMap<V, NodeIndex>,
}

impl<V> Default for VertexRegistry<V> {
    fn default() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
        }
    }
}

impl<V: Clone + Eq + Hash> VertexRegistry<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every endpoint of every edge, in input order.
    pub fn from_edges<E, F, T>(edges: &[E], get: &GetEdge<F, T>) -> Self
    where
        F: Fn(&E) -> V,
        T: Fn(&E) -> V,
    {
        let mut registry = Self::new();
        for (i, edge) in edges.iter().enumerate() {
            registry.add_edge((get.from)(edge), (get.to)(edge), i);
        }
        registry
    }

    pub fn count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the node for `vertex`, adding it on first sight.
    pub fn intern(&mut self, vertex: V) -> NodeIndex {
        if let Some(&id) = self.index.get(&vertex) {
            return id;
        }
        let id = self.graph.add_node(vertex.clone());
        self.index.insert(vertex, id);
        id
    }

    pub fn add_edge(&mut self, from: V, to: V, position: usize) {
        let from = self.intern(from);
        let to = self.intern(to);
        self.graph.add_edge(from, to, position);
    }

    pub fn get(&self, vertex: &V) -> Option<NodeIndex> {
        self.index.get(vertex).copied()
    }

    #[inline(always)]
    pub fn vertex(&self, id: NodeIndex) -> &V {
        &self.graph[id]
    }

    pub fn graph(&self) -> &DiGraph<V, usize> {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{endpoints, Edge};

    #[test]
    fn test_from_edges_interns_each_vertex_once() {
        let edges = [Edge::new("a", "b"), Edge::new("b", "c"), Edge::new("a", "c")];
        let reg = VertexRegistry::from_edges(&edges, &endpoints::<Edge<&str>>());
        assert_eq!(reg.count(), 3);
        assert_eq!(reg.graph().edge_count(), 3);

        let a = reg.get(&"a").unwrap();
        assert_eq!(*reg.vertex(a), "a");
        assert_eq!(reg.get(&"z"), None);
    }

    #[test]
    fn test_edge_weights_are_input_positions() {
        let edges = [Edge::new("x", "y"), Edge::new("y", "z")];
        let reg = VertexRegistry::from_edges(&edges, &endpoints::<Edge<&str>>());
        let mut positions: Vec<usize> = reg.graph().edge_weights().copied().collect();
        positions.sort();
        assert_eq!(positions, vec![0, 1]);
    }
}
