//! Narrow-phase collision detection over convex shapes
//!
//! Answers one question many times per tick: do these two convex shapes
//! overlap, and if so, by how much and in which direction must they be
//! separated?
//!
//! # Architecture
//!
//! - **Snapshot shapes**: callers rebuild world-space [`Shape`] values
//!   each tick from live actor state; the engine owns no storage
//! - **Support mapping**: every shape answers "farthest point along a
//!   direction", the only geometric primitive GJK/EPA consume
//! - **Two phases**: GJK decides overlap, EPA extracts the penetration
//!   vector from the GJK terminal simplex
//!
//! # Module Organization
//!
//! - [`shape`] - The closed convex shape set and its support functions
//! - `simplex` - GJK working simplex (internal)
//! - `gjk` - Intersection test (internal)
//! - `epa` - Penetration resolution (internal)
//! - [`query`] - The public entry points
//! - [`error`] - Typed failure modes
//!
//! # Key Types
//!
//! - [`Shape`] - Convex primitive (rect, circle, polygon, capsule)
//! - [`NarrowPhase`] - Query runner with tunable convergence parameters
//! - [`CollisionError`] - Recoverable capacity/convergence failures

pub mod error;
pub mod query;
pub mod shape;

mod epa;
mod gjk;
mod simplex;

// Re-export commonly used types
pub use error::CollisionError;
pub use query::{intersects, resolve, NarrowPhase};
pub use shape::{minkowski_support, Shape, MAX_POLYGON_POINTS};
