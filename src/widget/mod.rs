//! Widget module orchestrator.
//!
//! Downstream code imports widget types from here while the implementation
//! details live in the private `core` and `arena` modules.

mod arena;
mod core;

pub use arena::WidgetArena;
pub use core::{ChildState, WidgetHost, WidgetId};
