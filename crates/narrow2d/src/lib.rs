//! # narrow2d
//!
//! 2D convex narrow-phase collision detection built on GJK and EPA.
//!
//! ## Features
//!
//! - **Closed shape set**: axis-aligned rectangles, circles, convex
//!   polygons, and capsules behind a single [`Shape`] enum
//! - **GJK intersection test**: iterative simplex search over the
//!   Minkowski difference
//! - **EPA penetration resolution**: minimum-translation vector from
//!   iterative polytope expansion
//! - **Typed errors**: capacity and convergence failures are recoverable,
//!   never process-fatal
//! - **Stateless queries**: every call is a pure function of its shape
//!   arguments, so independent pairs can be tested from any thread
//!
//! ## Quick Start
//!
//! ```rust
//! use narrow2d::prelude::*;
//!
//! fn main() -> Result<(), CollisionError> {
//!     let player = Shape::circle(Vec2::new(8.0, 5.0), 4.0);
//!     let wall = Shape::rect(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
//!
//!     if let Some(push) = resolve(&player, &wall)? {
//!         // Translating `player` by -push separates the pair.
//!         let _corrected = player.translated(-push);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`Shape`]: collision::Shape

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod collision;

pub use collision::{
    CollisionError,
    NarrowPhase,
    Shape,
    intersects,
    resolve,
};
pub use config::{Config, ConfigError, NarrowPhaseConfig};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        collision::{intersects, resolve, CollisionError, NarrowPhase, Shape},
        config::{Config, NarrowPhaseConfig},
        foundation::math::Vec2,
    };
}
