//! Indoor routing over a floor-plan walkable mesh.
//!
//! A [`FloorPlan`] is loaded once from a JSON document and shared by a
//! [`Router`], which turns two destination ids into a [`Route`]: the origin
//! room, the shortest walk between the rooms' nearest mesh nodes, and the
//! destination room.
//!
//! ```no_run
//! use std::sync::Arc;
//! use floor_route::{FloorPlan, Router};
//!
//! let floor = Arc::new(FloorPlan::from_path("floor_1.json")?);
//! let router = Router::new(floor);
//! let route = router.compute_route("mac_lab", "lab_2")?;
//! println!("{} ({:.2} m)", route.svg_points(), route.total_distance);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod collections;
pub mod config;
pub mod errors;
pub mod floor;
pub mod geometry;
pub mod graph_algos;
pub mod router;

pub use config::{DistanceMode, RouterConfig};
pub use errors::{FloorDataError, RouteError, SolverError};
pub use floor::{Adjacency, Destination, Edge, FloorData, FloorPlan};
pub use geometry::{Meters, Point};
pub use graph_algos::SolverKind;
pub use router::{NodeRoute, Route, Router};
