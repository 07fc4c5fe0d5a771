//! macroquad front-end: draws a [`Scene`] through a scrollable [`Viewport`].
//!
//! Families appear two per frame, then titles and stars. Arrow keys and
//! the mouse wheel scroll; a left click closes the window.

use macroquad::prelude::*;

use crate::layout::{Element, FontStyle, Point, Scene};
use crate::table::Rgb;
use crate::viewport::Viewport;

/// Window title.
pub const WINDOW_TITLE: &str = "Hierarchical Global Language Tree";
/// Initial window width.
pub const WINDOW_WIDTH: i32 = 1920;
/// Initial window height.
pub const WINDOW_HEIGHT: i32 = 1080;

/// Environment variable naming a TTF file for labels.
pub const FONT_ENV: &str = "LANGTREE_FONT";

/// Families revealed per frame while the tree is being drawn.
const FAMILIES_PER_FRAME: usize = 2;
/// Point sizes are scaled to pixels by this factor.
const POINTS_TO_PIXELS: f32 = 1.4;
/// Elements further than this outside the window are skipped.
const CULL_MARGIN: f32 = 200.0;

/// Background colour (#0a0a15).
pub const BACKGROUND: Color = Color::new(0.039, 0.039, 0.082, 1.0);

/// Convert a table colour for drawing.
pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.0, rgb.1, rgb.2, 255)
}

/// Load the label font named by `LANGTREE_FONT`, if any.
///
/// A missing or unreadable font is logged and the built-in font is used.
pub async fn load_label_font() -> Option<Font> {
    let path = std::env::var(FONT_ENV).ok()?;
    match load_ttf_font(&path).await {
        Ok(font) => {
            tracing::info!(%path, "loaded label font");
            Some(font)
        }
        Err(e) => {
            tracing::warn!(%path, error = %e, "cannot load label font, using built-in font");
            None
        }
    }
}

/// Interactive view state.
pub struct TreeView {
    /// What to draw.
    scene: Scene,
    /// Current scroll position.
    viewport: Viewport,
    /// Number of families drawn so far.
    revealed: usize,
    /// Optional label font.
    font: Option<Font>,
}

impl TreeView {
    /// Create a view showing only the trunk.
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            viewport: Viewport::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32),
            revealed: 0,
            font: None,
        }
    }

    /// Use `font` for all text.
    pub fn with_font(mut self, font: Option<Font>) -> Self {
        self.font = font;
        self
    }

    /// Whether every family has been revealed.
    pub fn is_complete(&self) -> bool {
        self.revealed >= self.scene.family_count()
    }

    /// Handle one frame of input. Returns `false` when the window should close.
    pub fn update(&mut self) -> bool {
        if !self.is_complete() {
            self.revealed = (self.revealed + FAMILIES_PER_FRAME).min(self.scene.family_count());
            if self.is_complete() {
                tracing::info!(families = self.revealed, "tree complete");
            }
        }

        self.viewport.resize(screen_width(), screen_height());

        let mut dx = 0.0;
        let mut dy = 0.0;
        if is_key_down(KeyCode::Left) {
            dx -= 1.0;
        }
        if is_key_down(KeyCode::Right) {
            dx += 1.0;
        }
        if is_key_down(KeyCode::Up) {
            dy += 1.0;
        }
        if is_key_down(KeyCode::Down) {
            dy -= 1.0;
        }
        let (wheel_x, wheel_y) = mouse_wheel();
        dx -= wheel_step(wheel_x);
        dy += wheel_step(wheel_y);
        if dx != 0.0 || dy != 0.0 {
            self.viewport.scroll(dx, dy);
        }

        !(is_mouse_button_pressed(MouseButton::Left) || is_key_pressed(KeyCode::Escape))
    }

    /// Draw the revealed part of the scene.
    pub fn draw(&self) {
        clear_background(BACKGROUND);
        for item in self.scene.visible(self.revealed) {
            match &item.element {
                Element::Segment {
                    from,
                    to,
                    width,
                    color,
                } => self.draw_segment(*from, *to, *width, to_color(*color)),
                Element::Dot {
                    center,
                    diameter,
                    color,
                } => {
                    if self.viewport.is_visible(*center, CULL_MARGIN) {
                        let (x, y) = self.viewport.to_screen(*center);
                        draw_circle(x, y, diameter / 2.0, to_color(*color));
                    }
                }
                Element::Label {
                    text,
                    at,
                    size,
                    style,
                    color,
                } => self.draw_label(text, *at, *size, *style, to_color(*color)),
            }
        }
    }

    fn draw_segment(&self, from: Point, to: Point, width: f32, color: Color) {
        if !self.viewport.is_visible(from, CULL_MARGIN) && !self.viewport.is_visible(to, CULL_MARGIN) {
            return;
        }
        let (x1, y1) = self.viewport.to_screen(from);
        let (x2, y2) = self.viewport.to_screen(to);
        draw_line(x1, y1, x2, y2, width, color);
        // round the joints like a turtle pen
        if width > 2.0 {
            draw_circle(x2, y2, width / 2.0, color);
        }
    }

    fn draw_label(&self, text: &str, at: Point, size: f32, style: FontStyle, color: Color) {
        if !self.viewport.is_visible(at, CULL_MARGIN) {
            return;
        }
        let font_size = (size * POINTS_TO_PIXELS).round() as u16;
        let dims = measure_text(text, self.font.as_ref(), font_size, 1.0);
        let (x, y) = self.viewport.to_screen(at);
        let x = x - dims.width / 2.0;

        let params = TextParams {
            font: self.font.as_ref(),
            font_size,
            color,
            ..Default::default()
        };
        draw_text_ex(text, x, y, params.clone());
        // the built-in font has no bold face
        if style == FontStyle::Bold {
            draw_text_ex(text, x + 0.6, y, params);
        }
    }
}

/// -1, 0 or 1 for a wheel delta.
fn wheel_step(delta: f32) -> f32 {
    if delta > 0.0 {
        1.0
    } else if delta < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Run the window until it is closed.
pub async fn run(scene: Scene) {
    let font = load_label_font().await;
    let mut view = TreeView::new(scene).with_font(font);
    loop {
        if !view.update() {
            tracing::info!("window closed");
            break;
        }
        view.draw();
        next_frame().await;
    }
}
