//=========================================================================
// Widgets
//=========================================================================
//
// Clickable rectangle with a hover highlight and a centred label.
//
//=========================================================================

use crate::core::canvas::{Canvas, Color, Rect};

const LABEL_SIZE: i32 = 30;
const OUTLINE: f32 = 3.0;

//=== Button ==============================================================

/// Rectangle button. Placed by the owning state's `enter`.
#[derive(Debug, Clone)]
pub struct Button {
    rect: Rect,
    label: &'static str,
    base: Color,
    highlight: Color,
    hovered: bool,
}

impl Button {
    /// Creates an unplaced button (zero-sized rectangle).
    pub fn new(label: &'static str, base: Color, highlight: Color) -> Self {
        Self {
            rect: Rect::default(),
            label,
            base,
            highlight,
            hovered: false,
        }
    }

    /// Moves the button to `rect` and clears its hover state.
    pub fn place(&mut self, rect: Rect) {
        self.rect = rect;
        self.hovered = false;
    }

    /// Refreshes the hover state from the pointer.
    ///
    /// Returns `true` when `pressed` (a press edge this frame) lands on
    /// the button.
    pub fn track(&mut self, pointer: (f32, f32), pressed: bool) -> bool {
        self.hovered = self.rect.contains(pointer);
        self.hovered && pressed
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Fill color for the current hover state.
    pub fn color(&self) -> Color {
        if self.hovered {
            self.highlight
        } else {
            self.base
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.rect, self.color());
        canvas.stroke_rect(self.rect, OUTLINE, Color::WHITE);

        let text_width = canvas.measure_text(self.label, LABEL_SIZE);
        let x = self.rect.x as i32 + (self.rect.width as i32 - text_width) / 2;
        let y = self.rect.y as i32 + (self.rect.height as i32 - LABEL_SIZE) / 2;
        canvas.draw_text(self.label, x, y, LABEL_SIZE, Color::WHITE);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::canvas::{DrawCommand, DrawList};

    fn placed() -> Button {
        let mut button = Button::new("OK", Color::DARK_GREEN, Color::GREEN);
        button.place(Rect::new(100.0, 100.0, 200.0, 60.0));
        button
    }

    #[test]
    fn hover_swaps_color() {
        let mut button = placed();
        assert_eq!(button.color(), Color::DARK_GREEN);

        assert!(!button.track((150.0, 120.0), false));
        assert!(button.is_hovered());
        assert_eq!(button.color(), Color::GREEN);

        button.track((0.0, 0.0), false);
        assert_eq!(button.color(), Color::DARK_GREEN);
    }

    #[test]
    fn click_requires_hover() {
        let mut button = placed();
        assert!(!button.track((0.0, 0.0), true));
        assert!(button.track((150.0, 120.0), true));
    }

    #[test]
    fn unplaced_button_is_never_hit() {
        let mut button = Button::new("OK", Color::RED, Color::YELLOW);
        assert!(!button.track((0.0, 0.0), true));
    }

    #[test]
    fn place_clears_hover() {
        let mut button = placed();
        button.track((150.0, 120.0), false);
        button.place(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(!button.is_hovered());
    }

    #[test]
    fn draw_emits_fill_outline_and_label() {
        let button = placed();
        let mut canvas = DrawList::new();

        button.draw(&mut canvas);

        let commands = canvas.commands();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], DrawCommand::FillRect { .. }));
        assert!(matches!(commands[1], DrawCommand::StrokeRect { thickness, .. } if thickness == 3.0));
        match &commands[2] {
            DrawCommand::Text { text, x, y, .. } => {
                assert_eq!(text, "OK");
                // "OK" at size 30 measures 2*15 + 3 = 33
                assert_eq!(*x, 100 + (200 - 33) / 2);
                assert_eq!(*y, 100 + (60 - 30) / 2);
            }
            other => panic!("expected label, got {other:?}"),
        }
    }
}
