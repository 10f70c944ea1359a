//! Directional rule-based flow layout engine.
//!
//! Widgets registered with the engine are replayed through compact
//! placement rules (`"=<"`, `"/^"`, ...) every time their container is
//! resized or first drawn: each instruction nudges or grows its widget one
//! unit at a time along a compass direction until it hits the container
//! boundary or a previously placed sibling. The host toolkit stays behind
//! the [`WidgetHost`] trait; the engine owns rules and per-child state but
//! never the widgets themselves.

pub mod error;
pub mod flow;
pub mod geometry;
pub mod instruction;
pub mod logging;
pub mod metrics;
pub mod registry;
pub mod transform;
pub mod widget;

pub use error::{FlowError, Result};
pub use flow::{FlowConfig, FlowEngine};
pub use geometry::{Rect, Scale, Size};
pub use instruction::{Directive, Instruction, Kind, Modifier, parse_rule};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{LayoutMetrics, MetricsSnapshot};
pub use registry::{GeometryRegistry, PlacedGeometry};
pub use transform::Transform;
pub use widget::{ChildState, WidgetArena, WidgetHost, WidgetId};
