//! Defines how path enumeration reads the endpoints of an edge.
//!
//! Edges can be any type. Types with a natural `from`/`to` implement
//! `Endpoints`; anything else supplies a `GetEdge` pair of accessors.

use serde::{Deserialize, Serialize};

/// An edge that knows its own endpoints.
pub trait Endpoints {
    type Vertex;

    fn from(&self) -> Self::Vertex;
    fn to(&self) -> Self::Vertex;
}

/// A plain directed edge between two vertices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<V> {
    pub from: V,
    pub to: V,
}

impl<V> Edge<V> {
    pub fn new(from: V, to: V) -> Self {
        Self { from, to }
    }
}

impl<V: Clone> Endpoints for Edge<V> {
    type Vertex = V;

    fn from(&self) -> V {
        self.from.clone()
    }

    fn to(&self) -> V {
        self.to.clone()
    }
}

/// Accessors for the endpoints of an arbitrary edge type.
///
/// Both accessors are `Fn(&E) -> V` and may capture state, e.g. a lookup table.
///
/// ```
/// use production_poly::graph::GetEdge;
/// struct Link { parent: &'static str, child: &'static str }
/// let get = GetEdge { from: |l: &Link| l.parent, to: |l: &Link| l.child };
/// let link = Link { parent: "a", child: "b" };
/// assert_eq!(((get.from)(&link), (get.to)(&link)), ("a", "b"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GetEdge<F, T> {
    pub from: F,
    pub to: T,
}

impl<F, T> GetEdge<F, T> {
    /// The same accessors, with the direction of every edge flipped.
    pub fn reversed(self) -> GetEdge<T, F> {
        GetEdge {
            from: self.to,
            to: self.from,
        }
    }
}

/// Accessors that defer to the edge's `Endpoints` implementation.
pub fn endpoints<E: Endpoints>(
) -> GetEdge<impl Fn(&E) -> E::Vertex + Copy, impl Fn(&E) -> E::Vertex + Copy> {
    GetEdge {
        from: |e: &E| e.from(),
        to: |e: &E| e.to(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_endpoints_accessors() {
        let get = endpoints::<Edge<&str>>();
        let e = Edge::new("a", "b");
        assert_eq!((get.from)(&e), "a");
        assert_eq!((get.to)(&e), "b");

        let rev = get.reversed();
        assert_eq!((rev.from)(&e), "b");
        assert_eq!((rev.to)(&e), "a");
    }

    #[test]
    fn test_capturing_accessors() {
        let names = HashMap::from([(1, "drone"), (2, "meat")]);
        let get = GetEdge {
            from: |e: &(u32, u32)| names[&e.0],
            to: |e: &(u32, u32)| names[&e.1],
        };
        assert_eq!(((get.from)(&(1, 2)), (get.to)(&(1, 2))), ("drone", "meat"));
    }
}
