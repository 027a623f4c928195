//! Rectangle type for UI layout

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by padding on all sides
    pub fn pad(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.w - padding * 2.0).max(0.0),
            (self.h - padding * 2.0).max(0.0),
        )
    }

    /// Split off a strip along the top, returns (strip, rest)
    pub fn take_top(&self, height: f32) -> (Self, Self) {
        let h = height.clamp(0.0, self.h);
        (
            Self::new(self.x, self.y, self.w, h),
            Self::new(self.x, self.y + h, self.w, self.h - h),
        )
    }

    /// Split off a strip along the bottom, returns (rest, strip)
    pub fn take_bottom(&self, height: f32) -> (Self, Self) {
        let h = height.clamp(0.0, self.h);
        (
            Self::new(self.x, self.y, self.w, self.h - h),
            Self::new(self.x, self.bottom() - h, self.w, h),
        )
    }

    /// Split off a column on the right, returns (rest, column)
    pub fn take_right(&self, width: f32) -> (Self, Self) {
        let w = width.clamp(0.0, self.w);
        (
            Self::new(self.x, self.y, self.w - w, self.h),
            Self::new(self.right() - w, self.y, w, self.h),
        )
    }

    /// Split at a fixed width from the left, returns (left, right)
    pub fn take_left(&self, width: f32) -> (Self, Self) {
        let w = width.clamp(0.0, self.w);
        (
            Self::new(self.x, self.y, w, self.h),
            Self::new(self.x + w, self.y, self.w - w, self.h),
        )
    }

    /// Nth fixed-height row from the top
    pub fn row(&self, index: usize, height: f32) -> Self {
        Self::new(self.x, self.y + index as f32 * height, self.w, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_right() {
        let r = Rect::new(0.0, 0.0, 1000.0, 600.0);
        let (rest, side) = r.take_right(300.0);
        assert!((rest.w - 700.0).abs() < 0.001);
        assert!((side.x - 700.0).abs() < 0.001);
        assert!((side.w - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_take_top_clamps() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        let (strip, rest) = r.take_top(80.0);
        assert!((strip.h - 50.0).abs() < 0.001);
        assert!(rest.h.abs() < 0.001);
    }

    #[test]
    fn test_row() {
        let r = Rect::new(0.0, 100.0, 200.0, 300.0);
        let row = r.row(3, 20.0);
        assert!((row.y - 160.0).abs() < 0.001);
        assert!(row.contains(10.0, 170.0));
        assert!(!row.contains(10.0, 180.0));
    }
}
