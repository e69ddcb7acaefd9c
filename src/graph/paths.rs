//! paths.rs
//! Enumerates every path of a directed acyclic graph.

use super::dag::topological_order;
use super::edge::{endpoints, Endpoints, GetEdge};
use super::storage::VertexRegistry;
use crate::error::Result;
use crate::util::group_by;
use petgraph::Direction;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// What a graph vertex must support.
pub trait Vertex: Clone + Eq + Hash + Display {}

impl<T: Clone + Eq + Hash + Display> Vertex for T {}

/// A list of edges leading from vertex `from` to vertex `to`.
///
/// Produced by the path enumerators. A path of zero edges leads from a vertex
/// to itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path<V, E> {
    pub from: V,
    pub to: V,
    pub path: Vec<E>,
}

/// Paths grouped by the vertex they start at (outgoing) or end at (incoming).
pub type PathMap<V, E> = HashMap<V, Vec<Path<V, E>>>;

impl<V: Clone, E: Clone> Path<V, E> {
    /// The zero-length path from `vertex` to itself.
    pub fn empty(vertex: V) -> Self {
        Self {
            from: vertex.clone(),
            to: vertex,
            path: Vec::new(),
        }
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Extends this path by one edge at its grouped end, which moves to `vertex`.
    fn prepend(&self, direction: Direction, vertex: V, edge: E) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.push(edge);
        path.extend(self.path.iter().cloned());
        match direction {
            Direction::Outgoing => Self { from: vertex, to: self.to.clone(), path },
            Direction::Incoming => Self { from: self.from.clone(), to: vertex, path },
        }
    }
}

/// Every path in the graph, grouped by the vertex it *starts* at.
///
/// Every vertex has a zero-length path from itself. `vertices` adds isolated
/// vertices that appear in no edge.
///
/// ```
/// use production_poly::graph::{all_outgoing_paths, Edge};
/// //      a -> d
/// // b -> c -> d
/// let edges = [Edge::new("a", "d"), Edge::new("b", "c"), Edge::new("c", "d")];
/// let paths = all_outgoing_paths(&edges, &[]).unwrap();
/// assert_eq!(paths["a"].len(), 2); // [a -> a], [a -> d]
/// assert_eq!(paths["b"].len(), 3); // [b -> b], [b -> c], [b -> c -> d]
/// assert_eq!(paths["c"].len(), 2); // [c -> c], [c -> d]
/// assert_eq!(paths["d"].len(), 1); // [d -> d]
/// ```
pub fn all_outgoing_paths<E>(edges: &[E], vertices: &[E::Vertex]) -> Result<PathMap<E::Vertex, E>>
where
    E: Endpoints + Clone,
    E::Vertex: Vertex,
{
    all_outgoing_paths_by(edges, vertices, endpoints::<E>())
}

/// `all_outgoing_paths` for edges of any shape.
pub fn all_outgoing_paths_by<V, E, F, T>(
    edges: &[E],
    vertices: &[V],
    get: GetEdge<F, T>,
) -> Result<PathMap<V, E>>
where
    V: Vertex,
    E: Clone,
    F: Fn(&E) -> V,
    T: Fn(&E) -> V,
{
    all_paths(edges, vertices, get, Direction::Outgoing)
}

/// Every path in the graph, grouped by the vertex it *ends* at.
///
/// Every vertex has a zero-length path to itself. Each path lists its edges
/// starting from the end vertex and walking backwards.
///
/// ```
/// use production_poly::graph::{all_incoming_paths, Edge};
/// //      a -> d
/// // b -> c -> d
/// let edges = [Edge::new("a", "d"), Edge::new("b", "c"), Edge::new("c", "d")];
/// let paths = all_incoming_paths(&edges, &[]).unwrap();
/// assert_eq!(paths["a"].len(), 1); // [a -> a]
/// assert_eq!(paths["b"].len(), 1); // [b -> b]
/// assert_eq!(paths["c"].len(), 2); // [c -> c], [b -> c]
/// assert_eq!(paths["d"].len(), 4); // [d -> d], [a -> d], [c -> d], [b -> c -> d]
/// ```
pub fn all_incoming_paths<E>(edges: &[E], vertices: &[E::Vertex]) -> Result<PathMap<E::Vertex, E>>
where
    E: Endpoints + Clone,
    E::Vertex: Vertex,
{
    all_incoming_paths_by(edges, vertices, endpoints::<E>())
}

/// `all_incoming_paths` for edges of any shape.
pub fn all_incoming_paths_by<V, E, F, T>(
    edges: &[E],
    vertices: &[V],
    get: GetEdge<F, T>,
) -> Result<PathMap<V, E>>
where
    V: Vertex,
    E: Clone,
    F: Fn(&E) -> V,
    T: Fn(&E) -> V,
{
    all_paths(edges, vertices, get, Direction::Incoming)
}

fn all_paths<V, E, F, T>(
    edges: &[E],
    vertices: &[V],
    get: GetEdge<F, T>,
    direction: Direction,
) -> Result<PathMap<V, E>>
where
    V: Vertex,
    E: Clone,
    F: Fn(&E) -> V,
    T: Fn(&E) -> V,
{
    // Paths are grouped at the parent end and grow toward the child end.
    let (parent, child): (&dyn Fn(&E) -> V, &dyn Fn(&E) -> V) = match direction {
        Direction::Outgoing => (&get.from, &get.to),
        Direction::Incoming => (&get.to, &get.from),
    };
    let registry = VertexRegistry::from_edges(edges, &get);
    let mut order = topological_order(&registry)?;
    // Children must be resolved before their parents.
    if direction == Direction::Outgoing {
        order.reverse();
    }
    let edges_by_parent = group_by(edges, |&edge| parent(edge));

    let mut paths: PathMap<V, E> = HashMap::with_capacity(registry.count() + vertices.len());
    for id in order {
        let vertex = registry.vertex(id).clone();
        let mut vertex_paths = vec![Path::empty(vertex.clone())];
        let parent_edges = edges_by_parent.get(&vertex).map(Vec::as_slice).unwrap_or_default();
        for &edge in parent_edges {
            let Some(child_paths) = paths.get(&child(edge)) else {
                continue;
            };
            vertex_paths.extend(
                child_paths
                    .iter()
                    .map(|p| p.prepend(direction, vertex.clone(), edge.clone())),
            );
        }
        paths.insert(vertex, vertex_paths);
    }

    for vertex in vertices {
        paths
            .entry(vertex.clone())
            .or_insert_with(|| vec![Path::empty(vertex.clone())]);
    }

    log::debug!(
        "Enumerated {} {:?} paths over {} vertices from {} edges",
        paths.values().map(Vec::len).sum::<usize>(),
        direction,
        paths.len(),
        edges.len()
    );
    Ok(paths)
}
