use serde::Serialize;

/// Integer pixel size of a widget, captured before layout runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Rectangle in the host toolkit's screen coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Grow outward by `margin` on all four sides.
    pub fn inflate(&self, margin: i32) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.width + margin * 2,
            self.height + margin * 2,
        )
    }

    /// Shrink inward by `margin` on all four sides.
    pub fn deflate(&self, margin: i32) -> Rect {
        self.inflate(-margin)
    }
}

/// UI scale factor threaded through configuration instead of living in
/// process-wide mutable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(f32);

impl Scale {
    pub const IDENTITY: Scale = Scale(1.0);

    pub fn new(factor: f32) -> Self {
        Self(factor)
    }

    pub fn factor(&self) -> f32 {
        self.0
    }

    /// Convert logical units to device pixels, truncating toward zero.
    pub fn px(&self, logical: i32) -> i32 {
        (self.0 * logical as f32) as i32
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let rect = Rect::new(10, 20, 30, 40);
        assert_eq!(rect.right(), 40);
        assert_eq!(rect.bottom(), 60);
        assert_eq!(rect.size(), Size::new(30, 40));
    }

    #[test]
    fn inflate_then_deflate_roundtrips() {
        let rect = Rect::new(5, 5, 50, 50);
        assert_eq!(rect.inflate(3).deflate(3), rect);
        assert_eq!(rect.inflate(3), Rect::new(2, 2, 56, 56));
    }

    #[test]
    fn scale_truncates_like_integer_cast() {
        let scale = Scale::new(1.5);
        assert_eq!(scale.px(25), 37);
        assert_eq!(scale.px(0), 0);
        assert_eq!(Scale::IDENTITY.px(42), 42);
    }
}
