use std::collections::HashMap;

use crate::geometry::{Rect, Size};
use crate::widget::{WidgetHost, WidgetId};

/// In-memory widget store standing in for a real toolkit.
///
/// Tests, benches, and demos use this as the host side of the collaborator
/// contract: it owns the container bounds, the ordered child list, and each
/// widget's geometry.
#[derive(Debug, Default)]
pub struct WidgetArena {
    container: Rect,
    order: Vec<WidgetId>,
    rects: HashMap<WidgetId, Rect>,
}

impl WidgetArena {
    pub fn new(container: Rect) -> Self {
        Self {
            container,
            order: Vec::new(),
            rects: HashMap::new(),
        }
    }

    /// Add a child at the container origin with its natural size.
    pub fn insert(&mut self, id: impl Into<WidgetId>, size: Size) -> WidgetId {
        let id = id.into();
        self.rects.insert(
            id.clone(),
            Rect::new(self.container.x, self.container.y, size.width, size.height),
        );
        self.order.push(id.clone());
        id
    }

    /// Drop a child entirely, as if the toolkit destroyed it.
    pub fn remove(&mut self, id: &WidgetId) {
        self.order.retain(|child| child != id);
        self.rects.remove(id);
    }

    /// Detach a child from the container without destroying it.
    pub fn detach(&mut self, id: &WidgetId) {
        self.order.retain(|child| child != id);
    }

    pub fn resize_container(&mut self, container: Rect) {
        self.container = container;
    }

    pub fn rect(&self, id: &str) -> Option<Rect> {
        self.rects.get(id).copied()
    }
}

impl WidgetHost for WidgetArena {
    fn container(&self) -> Rect {
        self.container
    }

    fn children(&self) -> Vec<WidgetId> {
        self.order.clone()
    }

    fn exists(&self, id: &WidgetId) -> bool {
        self.rects.contains_key(id)
    }

    fn rect_of(&self, id: &WidgetId) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    fn place(&mut self, id: &WidgetId, rect: Rect) {
        if let Some(entry) = self.rects.get_mut(id) {
            *entry = rect;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_spawns_at_container_origin() {
        let mut arena = WidgetArena::new(Rect::new(10, 20, 300, 200));
        let id = arena.insert("child", Size::new(40, 30));
        assert_eq!(arena.rect_of(&id), Some(Rect::new(10, 20, 40, 30)));
        assert_eq!(arena.children(), vec![id]);
    }

    #[test]
    fn detach_keeps_widget_alive_but_unparented() {
        let mut arena = WidgetArena::new(Rect::new(0, 0, 100, 100));
        let id = arena.insert("child", Size::new(10, 10));
        arena.detach(&id);
        assert!(arena.children().is_empty());
        assert!(arena.exists(&id));
    }

    #[test]
    fn remove_forgets_the_widget() {
        let mut arena = WidgetArena::new(Rect::new(0, 0, 100, 100));
        let id = arena.insert("child", Size::new(10, 10));
        arena.remove(&id);
        assert!(!arena.exists(&id));
        assert_eq!(arena.rect_of(&id), None);
    }

    #[test]
    fn place_ignores_unknown_ids() {
        let mut arena = WidgetArena::new(Rect::new(0, 0, 100, 100));
        arena.place(&"ghost".to_string(), Rect::new(1, 2, 3, 4));
        assert_eq!(arena.rect_of(&"ghost".to_string()), None);
    }
}
