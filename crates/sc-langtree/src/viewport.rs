//! Scrollable window onto the canvas.
//!
//! The canvas uses y-up coordinates centred on the origin; window pixels
//! are y-down from the top-left corner. One canvas unit is one pixel.

use crate::layout::Point;

/// Canvas width in units.
pub const CANVAS_WIDTH: f32 = 2400.0;
/// Canvas height in units.
pub const CANVAS_HEIGHT: f32 = 2400.0;
/// Canvas units moved per scroll step.
pub const SCROLL_STEP: f32 = 40.0;

/// A window-sized view centred somewhere on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Canvas point shown at the window centre.
    center: Point,
    /// Window width in pixels.
    width: f32,
    /// Window height in pixels.
    height: f32,
}

impl Viewport {
    /// A view of `width` x `height` pixels centred on the canvas origin.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            center: Point::new(0.0, 0.0),
            width,
            height,
        }
    }

    /// The canvas point at the window centre.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Adapt to a new window size, keeping the view inside the canvas.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.clamp();
    }

    /// Map a canvas point to window pixels.
    pub fn to_screen(&self, p: Point) -> (f32, f32) {
        (
            p.x - self.center.x + self.width / 2.0,
            self.center.y - p.y + self.height / 2.0,
        )
    }

    /// Map window pixels back to a canvas point.
    pub fn to_canvas(&self, sx: f32, sy: f32) -> Point {
        Point::new(
            sx - self.width / 2.0 + self.center.x,
            self.center.y + self.height / 2.0 - sy,
        )
    }

    /// Move the view by `dx`, `dy` canvas units (y up).
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.center.x += dx;
        self.center.y += dy;
        self.clamp();
    }

    /// Scroll by whole steps. Positive `steps_x` moves right, positive
    /// `steps_y` moves up.
    pub fn scroll(&mut self, steps_x: f32, steps_y: f32) {
        self.pan(steps_x * SCROLL_STEP, steps_y * SCROLL_STEP);
    }

    /// Whether a canvas point lies within `margin` pixels of the window.
    pub fn is_visible(&self, p: Point, margin: f32) -> bool {
        let top_left = self.to_canvas(-margin, -margin);
        let bottom_right = self.to_canvas(self.width + margin, self.height + margin);
        (top_left.x..=bottom_right.x).contains(&p.x) && (bottom_right.y..=top_left.y).contains(&p.y)
    }

    fn clamp(&mut self) {
        self.center.x = clamp_axis(self.center.x, CANVAS_WIDTH, self.width);
        self.center.y = clamp_axis(self.center.y, CANVAS_HEIGHT, self.height);
    }
}

/// Keep a centre coordinate such that the view stays inside the canvas.
/// A view larger than the canvas stays centred.
fn clamp_axis(center: f32, canvas: f32, view: f32) -> f32 {
    let limit = (canvas - view).max(0.0) / 2.0;
    center.clamp(-limit, limit)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn origin_maps_to_window_centre() {
        let vp = Viewport::new(1920.0, 1080.0);
        assert_eq!(vp.to_screen(Point::new(0.0, 0.0)), (960.0, 540.0));
    }

    #[test]
    fn y_axis_is_flipped() {
        let vp = Viewport::new(1920.0, 1080.0);
        let (_, above) = vp.to_screen(Point::new(0.0, 100.0));
        let (_, below) = vp.to_screen(Point::new(0.0, -100.0));
        assert_eq!(above, 440.0);
        assert_eq!(below, 640.0);
    }

    #[test]
    fn scrolling_up_reveals_titles() {
        let mut vp = Viewport::new(1920.0, 1080.0);
        assert!(!vp.is_visible(Point::new(0.0, 650.0), 0.0));
        vp.scroll(0.0, 5.0);
        assert_eq!(vp.center(), Point::new(0.0, 200.0));
        assert!(vp.is_visible(Point::new(0.0, 650.0), 0.0));
    }

    #[test]
    fn pan_is_clamped_to_canvas() {
        let mut vp = Viewport::new(1920.0, 1080.0);
        vp.pan(10_000.0, -10_000.0);
        assert_eq!(vp.center(), Point::new(240.0, -660.0));
        let (_, bottom) = vp.to_screen(Point::new(0.0, -1200.0));
        assert_eq!(bottom, 1080.0);
    }

    #[test]
    fn visibility_margin_extends_past_edges() {
        let vp = Viewport::new(1920.0, 1080.0);
        assert!(vp.is_visible(Point::new(960.0, 540.0), 0.0));
        assert!(!vp.is_visible(Point::new(1000.0, 0.0), 0.0));
        assert!(vp.is_visible(Point::new(1000.0, 0.0), 50.0));
        assert!(!vp.is_visible(Point::new(0.0, -800.0), 200.0));
    }

    #[test]
    fn oversized_window_stays_centred() {
        let mut vp = Viewport::new(3000.0, 1080.0);
        vp.pan(500.0, 0.0);
        assert_eq!(vp.center().x, 0.0);
    }

    #[test]
    fn resize_reclamps() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.pan(800.0, 0.0);
        assert_eq!(vp.center().x, 800.0);
        vp.resize(1920.0, 1080.0);
        assert_eq!(vp.center().x, 240.0);
        assert_eq!(vp.to_screen(Point::new(240.0, 0.0)), (960.0, 540.0));
    }

    proptest! {
        #[test]
        fn screen_canvas_round_trip(
            x in -1200.0f32..1200.0,
            y in -1200.0f32..1200.0,
            dx in -2000.0f32..2000.0,
            dy in -2000.0f32..2000.0,
        ) {
            let mut vp = Viewport::new(1920.0, 1080.0);
            vp.pan(dx, dy);
            let (sx, sy) = vp.to_screen(Point::new(x, y));
            let back = vp.to_canvas(sx, sy);
            prop_assert!((back.x - x).abs() < 1e-2);
            prop_assert!((back.y - y).abs() < 1e-2);
        }
    }
}
