//! Polynomials for incremental-game production math.
//!
//! A production graph says how many units of each resource exist, and how many
//! units of one resource each unit of another produces per unit of time. The
//! amount of every resource over time is then a polynomial in `t`. This crate:
//!
//! - builds those polynomials from a caller-defined graph (`production`),
//! - evaluates and renders them (`poly`),
//! - answers "when will this reach N?" by finding roots (`solver`),
//! - over any number type, through a pluggable numeric backend (`num`).
//!
//! ```
//! use production_poly::num::NativeOps;
//! use production_poly::production::{simple_graph_to_polynomials, ProductionEdge};
//! use production_poly::Polynomial;
//! use std::collections::HashMap;
//!
//! // 3 drones each make 5 meat per second. Meat starts at 2.
//! let counts = HashMap::from([("meat", 2.0), ("drone", 3.0)]);
//! let edges = [ProductionEdge::new("drone", "meat", 5.0)];
//! let polys = simple_graph_to_polynomials(&counts, &edges, &NativeOps::new()).unwrap();
//! assert_eq!(polys["meat"].evaluate(2.0), 32.0);
//!
//! // When does meat reach 32?
//! let goal = polys["meat"].add(&Polynomial::native([-32.0]));
//! assert_eq!(goal.find_roots_quick().unwrap(), vec![2.0]);
//! ```
pub mod error;
pub mod graph;
pub mod num;
pub mod poly;
pub mod production;
pub mod solver;
pub mod util;

pub use error::{PolyError, Result};
pub use num::{BigNumber, Decimal, DecimalOps, NativeOps, NumberOps};
pub use poly::{NativePolynomial, Polynomial};
pub use solver::BisectOptions;
