use crate::geometry::Rect;
use crate::widget::{WidgetHost, WidgetId};

/// Staged rectangle explored one unit step at a time.
///
/// The staging rectangle is the candidate geometry being mutated; the
/// committed rectangle is the last known-good position, restorable with
/// [`Transform::rollback`] after the step loop overshoots. Widget
/// transforms enter with their true bounds inflated by the padding margin
/// and leave it again in [`Transform::apply`].
#[derive(Debug, Clone)]
pub struct Transform {
    target: Option<WidgetId>,
    padding: i32,
    staging: Rect,
    committed: Rect,
}

impl Transform {
    /// Placement bounds for the container itself. No padding and no target:
    /// the container is never written back.
    pub fn container(rect: Rect) -> Self {
        Self {
            target: None,
            padding: 0,
            staging: rect,
            committed: rect,
        }
    }

    /// Transform over a widget's current geometry, inflated by `padding`.
    pub fn for_widget(id: WidgetId, rect: Rect, padding: i32) -> Self {
        let padded = rect.inflate(padding);
        Self {
            target: Some(id),
            padding,
            staging: padded,
            committed: padded,
        }
    }

    pub fn staging(&self) -> Rect {
        self.staging
    }

    pub fn committed(&self) -> Rect {
        self.committed
    }

    /// True when `other`'s staging rectangle lies entirely within ours,
    /// edges inclusive.
    pub fn contains(&self, other: &Transform) -> bool {
        if other.staging.x < self.staging.x {
            return false;
        }
        if other.staging.y < self.staging.y {
            return false;
        }
        if other.staging.right() > self.staging.right() {
            return false;
        }
        if other.staging.bottom() > self.staging.bottom() {
            return false;
        }
        true
    }

    /// Axis-aligned overlap test between staging rectangles.
    ///
    /// Separation requires a strict gap: a flush shared edge still counts
    /// as overlap, so a stepping widget settles one unit short of the
    /// sibling it approaches.
    pub fn colliding(&self, other: &Transform) -> bool {
        if self.staging.x < other.staging.x {
            if self.staging.right() < other.staging.x {
                return false;
            }
        } else if other.staging.right() < self.staging.x {
            return false;
        }

        if self.staging.y < other.staging.y {
            if self.staging.bottom() < other.staging.y {
                return false;
            }
        } else if other.staging.bottom() < self.staging.y {
            return false;
        }

        true
    }

    pub fn commit(&mut self) {
        self.committed = self.staging;
    }

    pub fn rollback(&mut self) {
        self.staging = self.committed;
    }

    /// Commit the current position, then shift the staging origin.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.commit();
        self.staging.x += dx;
        self.staging.y += dy;
    }

    /// Commit the current position, then grow one edge per axis: a negative
    /// delta moves the left/top edge outward, a positive one moves the
    /// right/bottom edge.
    pub fn scale(&mut self, dx: i32, dy: i32) {
        self.commit();
        if dx < 0 {
            self.staging.x += dx;
            self.staging.width -= dx;
        } else {
            self.staging.width += dx;
        }

        if dy < 0 {
            self.staging.y += dy;
            self.staging.height -= dy;
        } else {
            self.staging.height += dy;
        }
    }

    /// Re-center the staging rectangle on a new target size.
    pub fn contract(&mut self, width: i32, height: i32) {
        self.staging.x += self.staging.width / 2 - width / 2;
        self.staging.y += self.staging.height / 2 - height / 2;
        self.staging.width = width;
        self.staging.height = height;
    }

    /// Write the staging rectangle, with the padding margin removed, back
    /// to the real widget. The only operation with a side effect outside
    /// the transform.
    pub fn apply(&self, host: &mut dyn WidgetHost) {
        if let Some(id) = &self.target {
            host.place(id, self.staging.deflate(self.padding));
        }
    }
}
