//=========================================================================
// Canvas
//=========================================================================
//
// Drawing boundary between game states and whatever rasterizes them.
//
// States draw through `&mut dyn Canvas` and never see the backend. The
// host draws into a software raster; `DrawList` records commands in
// order so tests can assert on what a frame drew.
//
//=========================================================================

//=== Color ===============================================================

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const GRAY: Self = Self::rgb(130, 130, 130);
    pub const LIGHT_GRAY: Self = Self::rgb(200, 200, 200);
    pub const GOLD: Self = Self::rgb(255, 203, 0);
    pub const YELLOW: Self = Self::rgb(253, 249, 0);
    pub const GREEN: Self = Self::rgb(0, 228, 48);
    pub const DARK_GREEN: Self = Self::rgb(0, 117, 44);
    pub const RED: Self = Self::rgb(230, 41, 55);
    pub const FOREST_GREEN: Self = Self::rgb(34, 139, 34);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

//=== Rect ================================================================

/// Axis-aligned rectangle in logical pixels, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Point-in-rectangle test. Left/top edges inside, right/bottom outside.
    pub fn contains(&self, (px, py): (f32, f32)) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

//=== Canvas Trait ========================================================

/// Primitive draw calls used by the game states.
pub trait Canvas {
    /// Fills the whole surface.
    fn clear_background(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline drawn inside `rect`.
    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color);

    /// Text with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Color);

    /// Width in pixels `text` would occupy at `size`.
    fn measure_text(&self, text: &str, size: i32) -> i32;
}

//=== DrawCommand =========================================================

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, thickness: f32, color: Color },
    Text { text: String, x: i32, y: i32, size: i32, color: Color },
}

//=== DrawList ============================================================

/// Recording [`Canvas`]. Commands are kept in submission order until
/// [`clear`](DrawList::clear).
///
/// Text is measured with a fixed advance of `size / 2` per character plus
/// `size / 10` spacing between characters.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Every text string drawn, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Fill color used for `rect`, if it was filled.
    pub fn fill_color_of(&self, rect: Rect) -> Option<Color> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            DrawCommand::FillRect { rect: r, color } if *r == rect => Some(*color),
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    fn clear_background(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeRect { rect, thickness, color });
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
            size,
            color,
        });
    }

    fn measure_text(&self, text: &str, size: i32) -> i32 {
        let chars = text.chars().count() as i32;
        if chars == 0 {
            return 0;
        }
        chars * (size / 2) + (chars - 1) * (size / 10)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
