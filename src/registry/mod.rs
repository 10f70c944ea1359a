//! Registry module orchestrator.
//!
//! Downstream code imports registry types from here while the
//! implementation details live in the private `core` module.

mod core;

pub use core::{GeometryRegistry, PlacedGeometry};
