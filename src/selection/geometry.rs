//! Rectangle helpers for the selection overlay.
//!
//! Pointer positions arrive as surface coordinates. The normalized [`Rect`]
//! is what gets rendered and, after [`SurfaceTransform::to_image_rect`],
//! what gets cropped.

/// A pointer position on the overlay surface, in whole pixels.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Snap a sub-pixel pointer position to the pixel under it
    pub fn from_surface(x: f64, y: f64) -> Self {
        Self {
            x: x.floor() as i32,
            y: y.floor() as i32,
        }
    }
}

/// A normalized rectangle: top-left origin, non-negative size.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounding box of two arbitrary corners
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: a.x.abs_diff(b.x),
            height: a.y.abs_diff(b.y),
        }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add_unsigned(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add_unsigned(self.height)
    }

    /// True when either side is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn center_x(&self) -> f64 {
        self.x as f64 + self.width as f64 / 2.0
    }

    /// Corners in the order top-left, top-right, bottom-left, bottom-right
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.x, self.bottom()),
            Point::new(self.right(), self.bottom()),
        ]
    }

    /// The "W × H" text shown above the selection
    pub fn dimension_label(&self) -> String {
        format!("{} × {}", self.width, self.height)
    }

    /// Intersect with `[0, width) x [0, height)`.
    pub fn clamp_to(&self, width: u32, height: u32) -> Rect {
        let max_x = i32::try_from(width).unwrap_or(i32::MAX);
        let max_y = i32::try_from(height).unwrap_or(i32::MAX);

        let left = self.x.clamp(0, max_x);
        let top = self.y.clamp(0, max_y);
        let right = self.right().clamp(0, max_x);
        let bottom = self.bottom().clamp(0, max_y);

        Rect::from_corners(Point::new(left, top), Point::new(right, bottom))
    }
}

/// A rectangular selection while it is being drawn
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub start: Point,
    pub end: Point,
}

impl Selection {
    /// Create a new selection anchored at `start`
    pub fn new(start: Point) -> Self {
        Self { start, end: start }
    }

    /// Move the free corner
    pub fn update_end(&mut self, end: Point) {
        self.end = end;
    }

    /// Get the selection as a normalized rectangle
    pub fn rectangle(&self) -> Rect {
        Rect::from_corners(self.start, self.end)
    }
}

/// Square of side `size` centered on each corner of `rect`, as `(x, y, w, h)`.
pub fn handle_squares(rect: &Rect, size: f64) -> [(f64, f64, f64, f64); 4] {
    let half = size / 2.0;
    rect.corners()
        .map(|corner| (corner.x as f64 - half, corner.y as f64 - half, size, size))
}

/// Placement of the dimension label's background box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LabelBox {
    /// Center a box around text of the given extents, floating above `rect`.
    ///
    /// The text's bottom sits `gap` pixels above the rectangle's top edge and
    /// the box grows by `padding` on every side.
    pub fn above(rect: &Rect, text_width: f64, text_height: f64, gap: f64, padding: f64) -> Self {
        let text_x = rect.center_x() - text_width / 2.0;
        let text_y = rect.y as f64 - gap - text_height;

        Self {
            x: text_x - padding,
            y: text_y - padding,
            width: text_width + 2.0 * padding,
            height: text_height + 2.0 * padding,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Maps overlay surface coordinates into background image pixels.
///
/// The background is drawn from the surface origin scaled to fit, so a
/// single factor covers both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceTransform {
    pub scale: f64,
}

impl Default for SurfaceTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl SurfaceTransform {
    pub fn identity() -> Self {
        Self { scale: 1.0 }
    }

    pub fn fit(image_width: u32, image_height: u32, surface_width: i32, surface_height: i32) -> Self {
        if image_width == 0 || image_height == 0 || surface_width <= 0 || surface_height <= 0 {
            return Self::identity();
        }

        let scale_x = surface_width as f64 / image_width as f64;
        let scale_y = surface_height as f64 / image_height as f64;
        Self {
            scale: scale_x.min(scale_y),
        }
    }

    /// Convert a surface rectangle to image pixels.
    ///
    /// Edges are mapped independently so a surface rect that tiles its
    /// neighbours still tiles them in image space.
    pub fn to_image_rect(&self, rect: Rect) -> Rect {
        let map = |v: i32| (v as f64 / self.scale).round() as i32;
        Rect::from_corners(
            Point::new(map(rect.x), map(rect.y)),
            Point::new(map(rect.right()), map(rect.bottom())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_normalizes_any_drag_direction() {
        let mut sel = Selection::new(Point::new(300, 250));
        sel.update_end(Point::new(100, 100));
        assert_eq!(sel.rectangle(), Rect::new(100, 100, 200, 150));

        let mut sel = Selection::new(Point::new(100, 250));
        sel.update_end(Point::new(300, 100));
        assert_eq!(sel.rectangle(), Rect::new(100, 100, 200, 150));
    }

    #[test]
    fn test_point_sized_selection() {
        let sel = Selection::new(Point::new(42, 7));
        let rect = sel.rectangle();
        assert_eq!(rect, Rect::new(42, 7, 0, 0));
        assert!(rect.is_empty());
    }

    #[test]
    fn test_from_surface_floors() {
        assert_eq!(Point::from_surface(10.9, 3.2), Point::new(10, 3));
        assert_eq!(Point::from_surface(-0.5, 0.0), Point::new(-1, 0));
    }

    #[test]
    fn test_dimension_label() {
        assert_eq!(Rect::new(0, 0, 200, 150).dimension_label(), "200 × 150");
    }

    #[test]
    fn test_handles_centered_on_corners() {
        let rect = Rect::new(10, 20, 100, 50);
        let handles = handle_squares(&rect, 8.0);
        assert_eq!(handles[0], (6.0, 16.0, 8.0, 8.0));
        assert_eq!(handles[1], (106.0, 16.0, 8.0, 8.0));
        assert_eq!(handles[2], (6.0, 66.0, 8.0, 8.0));
        assert_eq!(handles[3], (106.0, 66.0, 8.0, 8.0));
    }

    #[test]
    fn test_label_box_floats_above_rect() {
        let rect = Rect::new(100, 100, 200, 150);
        let label = LabelBox::above(&rect, 60.0, 10.0, 5.0, 5.0);

        assert_eq!(label.center().0, 200.0);
        assert_eq!(label.width, 70.0);
        assert_eq!(label.height, 20.0);
        // bottom edge lands on the selection's top edge
        assert_eq!(label.y + label.height, 100.0);
    }

    #[test]
    fn test_clamp_to_image() {
        let rect = Rect::new(-10, 90, 50, 50);
        assert_eq!(rect.clamp_to(100, 100), Rect::new(0, 90, 40, 10));

        let outside = Rect::new(200, 200, 10, 10);
        assert!(outside.clamp_to(100, 100).is_empty());
    }

    #[test]
    fn test_transform_identity_when_sizes_match() {
        let transform = SurfaceTransform::fit(1920, 1080, 1920, 1080);
        assert_eq!(transform.scale, 1.0);

        let rect = Rect::new(100, 100, 200, 150);
        assert_eq!(transform.to_image_rect(rect), rect);
    }

    #[test]
    fn test_transform_hidpi() {
        // 2x output: logical surface is half the captured size
        let transform = SurfaceTransform::fit(3840, 2160, 1920, 1080);
        assert_eq!(transform.scale, 0.5);
        assert_eq!(
            transform.to_image_rect(Rect::new(10, 20, 30, 40)),
            Rect::new(20, 40, 60, 80)
        );
    }

    #[test]
    fn test_transform_degenerate_surface() {
        assert_eq!(SurfaceTransform::fit(100, 100, 0, 0), SurfaceTransform::identity());
    }
}
