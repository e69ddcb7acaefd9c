//! Builds production polynomials from a production graph.
//!
//! Each vertex is a quantity that starts at some count. Each edge `from -> to`
//! means every unit of `from` produces `each` units of `to` per unit of time.
//! The quantity of a vertex after time `t` is then a polynomial in `t`, with one
//! term per incoming path: a path of `n` edges contributes
//! `count(origin) * product(each) / n! * t^n`.

use crate::error::{PolyError, Result};
use crate::graph::{all_incoming_paths, Endpoints, Path, PathMap, Vertex};
use crate::num::NumberOps;
use crate::poly::Polynomial;
use crate::util::{factorial, map_values};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::iter;

/// How to read production data off caller-defined vertices and edges.
///
/// `each` is the production rate of an edge. `count` is the initial quantity of
/// a vertex, `None` when unknown, which is an error for any vertex that starts a path.
#[derive(Debug, Clone, Copy)]
pub struct GetPoly<Each, Count> {
    pub each: Each,
    pub count: Count,
}

/// The common shape of production edges: endpoints plus a rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionEdge<V, N> {
    pub from: V,
    pub to: V,
    pub each: N,
}

impl<V, N> ProductionEdge<V, N> {
    pub fn new(from: V, to: V, each: N) -> Self {
        Self { from, to, each }
    }
}

impl<V: Clone, N> Endpoints for ProductionEdge<V, N> {
    type Vertex = V;

    fn from(&self) -> V {
        self.from.clone()
    }

    fn to(&self) -> V {
        self.to.clone()
    }
}

/// Builds one polynomial per vertex from the graph's incoming paths.
///
/// `vertices` lists vertices that may appear in no edge.
pub fn vertices_edges_to_polynomials<O, E, Each, Count>(
    ops: &O,
    vertices: &[E::Vertex],
    edges: &[E],
    get: &GetPoly<Each, Count>,
) -> Result<HashMap<E::Vertex, Polynomial<O>>>
where
    O: NumberOps,
    E: Endpoints + Clone,
    E::Vertex: Vertex,
    Each: Fn(&E) -> O::Num,
    Count: Fn(&E::Vertex) -> Option<O::Num>,
{
    let paths = all_incoming_paths(edges, vertices)?;
    paths_to_polynomials(ops, paths, get)
}

/// Builds one polynomial per vertex from already-enumerated incoming paths.
pub fn paths_to_polynomials<O, V, E, Each, Count>(
    ops: &O,
    paths: PathMap<V, E>,
    get: &GetPoly<Each, Count>,
) -> Result<HashMap<V, Polynomial<O>>>
where
    O: NumberOps,
    V: Vertex,
    Each: Fn(&E) -> O::Num,
    Count: Fn(&V) -> Option<O::Num>,
{
    let path_count: usize = paths.values().map(Vec::len).sum();
    let polys = map_values(paths, |_, paths| {
        let terms = paths
            .iter()
            .map(|path| path_to_polynomial(ops, path, get))
            .collect::<Result<Vec<_>>>()?;
        Polynomial::<O>::sums(terms)
    })
    .into_iter()
    .map(|(vertex, poly)| poly.map(|poly| (vertex, poly)))
    .collect::<Result<HashMap<_, _>>>()?;

    log::debug!(
        "Built {} production polynomials from {} paths",
        polys.len(),
        path_count
    );
    Ok(polys)
}

/// The single term contributed by one path.
fn path_to_polynomial<O, V, E, Each, Count>(
    ops: &O,
    path: &Path<V, E>,
    get: &GetPoly<Each, Count>,
) -> Result<Polynomial<O>>
where
    O: NumberOps,
    V: Vertex,
    Each: Fn(&E) -> O::Num,
    Count: Fn(&V) -> Option<O::Num>,
{
    let degree = path.path.len();
    let count = (get.count)(&path.from).ok_or_else(|| PolyError::NullishCount {
        vertex: path.from.to_string(),
    })?;
    let each = path
        .path
        .iter()
        .fold(ops.one(), |acc, edge| ops.mul_t(&acc, &(get.each)(edge)));
    let coeff = ops.mul(&ops.mul_t(&each, &count), 1.0 / factorial(degree as u32));
    let coeffs = iter::repeat_with(|| ops.zero()).take(degree).chain(iter::once(coeff));
    Ok(Polynomial::parse(coeffs, ops.clone()))
}

/// Production polynomials for the common case: counts in a map, rates on the edges.
///
/// ```
/// use production_poly::num::NativeOps;
/// use production_poly::production::{simple_graph_to_polynomials, ProductionEdge};
/// use std::collections::HashMap;
///
/// let counts = HashMap::from([("meat", 2.0), ("drone", 3.0)]);
/// let edges = [ProductionEdge::new("drone", "meat", 5.0)];
/// let polys = simple_graph_to_polynomials(&counts, &edges, &NativeOps::new()).unwrap();
/// assert_eq!(polys["meat"].coeffs(), &[2.0, 15.0]);
/// assert_eq!(polys["meat"].to_string(), "15 t + 2");
/// ```
pub fn simple_graph_to_polynomials<O, V>(
    counts: &HashMap<V, O::Num>,
    edges: &[ProductionEdge<V, O::Num>],
    ops: &O,
) -> Result<HashMap<V, Polynomial<O>>>
where
    O: NumberOps,
    V: Vertex,
{
    let vertices: Vec<V> = counts.keys().cloned().collect();
    let get = GetPoly {
        each: |edge: &ProductionEdge<V, O::Num>| edge.each.clone(),
        count: |vertex: &V| counts.get(vertex).cloned(),
    };
    vertices_edges_to_polynomials(ops, &vertices, edges, &get)
}
