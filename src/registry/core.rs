use std::collections::{HashMap, HashSet};

use blake3::{Hash, Hasher};

use crate::geometry::Rect;
use crate::widget::WidgetId;

/// Last applied geometry for one widget.
#[derive(Debug, Clone)]
pub struct PlacedGeometry {
    pub rect: Rect,
    pub is_dirty: bool,
}

impl PlacedGeometry {
    fn new(rect: Rect) -> Self {
        Self {
            rect,
            is_dirty: true,
        }
    }
}

/// Registry mapping widgets to the geometry the last pass produced.
///
/// Hosts that redraw incrementally drain [`GeometryRegistry::take_dirty`]
/// after each pass; the pass fingerprint lets them skip redraw entirely
/// when a pass reproduced the previous layout bit for bit.
#[derive(Debug, Default)]
pub struct GeometryRegistry {
    entries: HashMap<WidgetId, PlacedGeometry>,
    dirty: HashSet<WidgetId>,
    fingerprint: Option<Hash>,
}

impl GeometryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a pass. Widgets absent from `placed` are
    /// forgotten along with any pending dirty flag.
    pub fn sync_pass(&mut self, placed: &[(WidgetId, Rect)]) {
        use std::collections::hash_map::Entry;

        let mut newly_dirty = Vec::new();

        for (id, rect) in placed {
            match self.entries.entry(id.clone()) {
                Entry::Occupied(mut entry) => {
                    let state = entry.get_mut();
                    if state.rect != *rect {
                        state.rect = *rect;
                        state.is_dirty = true;
                        newly_dirty.push(id.clone());
                    }
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(PlacedGeometry::new(*rect));
                    newly_dirty.push(id.clone());
                }
            }
        }

        let to_remove: Vec<_> = self
            .entries
            .keys()
            .filter(|id| !placed.iter().any(|(placed_id, _)| placed_id == *id))
            .cloned()
            .collect();
        for id in to_remove {
            self.entries.remove(&id);
            self.dirty.remove(&id);
        }

        for id in newly_dirty {
            self.dirty.insert(id);
        }

        self.fingerprint = Some(fingerprint_of(placed));
    }

    /// Drain the widgets whose geometry changed since the last drain.
    pub fn take_dirty(&mut self) -> Vec<(WidgetId, Rect)> {
        let ids: Vec<_> = self.dirty.drain().collect();
        ids.into_iter()
            .filter_map(|id| {
                self.entries.get_mut(&id).map(|state| {
                    state.is_dirty = false;
                    (id, state.rect)
                })
            })
            .collect()
    }

    pub fn rect_of(&self, id: &WidgetId) -> Option<Rect> {
        self.entries.get(id).map(|state| state.rect)
    }

    pub fn has_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Digest of the last synced pass, stable across identical layouts.
    pub fn fingerprint(&self) -> Option<Hash> {
        self.fingerprint
    }
}

fn fingerprint_of(placed: &[(WidgetId, Rect)]) -> Hash {
    let mut hasher = Hasher::new();
    for (id, rect) in placed {
        hasher.update(id.as_bytes());
        for value in [rect.x, rect.y, rect.width, rect.height] {
            hasher.update(&value.to_le_bytes());
        }
    }
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pass(rects: &[(&str, Rect)]) -> Vec<(WidgetId, Rect)> {
        rects
            .iter()
            .map(|(id, rect)| (id.to_string(), *rect))
            .collect()
    }

    #[test]
    fn sync_flags_new_widgets_as_dirty() {
        let mut registry = GeometryRegistry::new();
        registry.sync_pass(&pass(&[("a", Rect::new(0, 0, 10, 10))]));

        let dirty = registry.take_dirty();
        assert_eq!(dirty.len(), 1);
        assert_eq!(dirty[0].0, "a");
        assert!(!registry.has_dirty());
    }

    #[test]
    fn unchanged_geometry_stays_clean() {
        let mut registry = GeometryRegistry::new();
        let placed = pass(&[("a", Rect::new(0, 0, 10, 10))]);
        registry.sync_pass(&placed);
        registry.take_dirty();

        registry.sync_pass(&placed);
        assert!(registry.take_dirty().is_empty());
    }

    #[test]
    fn moved_geometry_is_dirty_again() {
        let mut registry = GeometryRegistry::new();
        registry.sync_pass(&pass(&[("a", Rect::new(0, 0, 10, 10))]));
        registry.take_dirty();

        registry.sync_pass(&pass(&[("a", Rect::new(5, 0, 10, 10))]));
        let dirty = registry.take_dirty();
        assert_eq!(dirty, vec![("a".to_string(), Rect::new(5, 0, 10, 10))]);
    }

    #[test]
    fn absent_widgets_are_forgotten() {
        let mut registry = GeometryRegistry::new();
        registry.sync_pass(&pass(&[
            ("a", Rect::new(0, 0, 10, 10)),
            ("b", Rect::new(20, 0, 10, 10)),
        ]));
        registry.sync_pass(&pass(&[("a", Rect::new(0, 0, 10, 10))]));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.rect_of(&"b".to_string()), None);
    }

    #[test]
    fn fingerprint_tracks_layout_identity() {
        let mut registry = GeometryRegistry::new();
        let placed = pass(&[("a", Rect::new(0, 0, 10, 10))]);
        registry.sync_pass(&placed);
        let first = registry.fingerprint().unwrap();

        registry.sync_pass(&placed);
        assert_eq!(registry.fingerprint().unwrap(), first);

        registry.sync_pass(&pass(&[("a", Rect::new(1, 0, 10, 10))]));
        assert_ne!(registry.fingerprint().unwrap(), first);
    }
}
