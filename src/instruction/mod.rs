//! Instruction module orchestrator.
//!
//! Downstream code imports instruction types from here while the
//! implementation details live in the private `core` module.

mod core;

pub use core::{Directive, Instruction, Kind, Modifier, parse_rule};
