use crate::geometry::{Rect, Size};

/// Stable identity for a widget managed by the engine.
pub type WidgetId = String;

/// Surface the engine drives on the host toolkit.
///
/// The engine never owns widgets. It keeps ids only and re-checks existence
/// against the host at the start of every pass, so children may be added,
/// removed, or destroyed between passes without notice.
pub trait WidgetHost {
    /// Screen-space bounds of the managed container.
    fn container(&self) -> Rect;

    /// Direct children of the container, in insertion order.
    fn children(&self) -> Vec<WidgetId>;

    /// Whether the widget still exists anywhere in the host.
    fn exists(&self, id: &WidgetId) -> bool;

    /// Current geometry of a widget.
    fn rect_of(&self, id: &WidgetId) -> Option<Rect>;

    /// Move and resize a widget in one call.
    fn place(&mut self, id: &WidgetId, rect: Rect);
}

/// Per-child bookkeeping held by the engine between passes.
#[derive(Debug, Clone)]
pub struct ChildState {
    pub widget: WidgetId,
    /// Size the child had when the engine first observed it.
    pub natural: Size,
    /// Set once an instruction targeting this child has executed in the
    /// current pass; cleared at the start of every pass.
    pub placed: bool,
}

impl ChildState {
    pub fn new(widget: WidgetId, natural: Size) -> Self {
        Self {
            widget,
            natural,
            placed: false,
        }
    }
}
