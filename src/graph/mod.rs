//! Path enumeration over caller-supplied directed acyclic graphs.
pub mod dag;
pub mod edge;
pub mod paths;
pub mod storage;

pub use dag::topological_order;
pub use edge::{endpoints, Edge, Endpoints, GetEdge};
pub use paths::{
    all_incoming_paths, all_incoming_paths_by, all_outgoing_paths, all_outgoing_paths_by, Path,
    PathMap, Vertex,
};
pub use storage::VertexRegistry;
