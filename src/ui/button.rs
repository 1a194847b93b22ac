use macroquad::prelude::*;

use super::{ACTIVE_GREEN, INACTIVE_GREEN, UiAction};

/// Text button in the control panel
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    action: UiAction,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, action: UiAction) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: action.label().to_owned(),
            action,
        }
    }

    pub fn action(&self) -> UiAction {
        self.action
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw in the active or inactive color, highlighting on hover
    pub fn draw(&self, mouse_pos: (f32, f32), enabled: bool) {
        let color = if enabled { ACTIVE_GREEN } else { INACTIVE_GREEN };
        let border = if enabled && self.is_hovered(mouse_pos) { 3.0 } else { 1.0 };

        draw_rectangle_lines(self.x, self.y, self.width, self.height, border, color);

        let text_size = measure_text(&self.text, None, 18, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            18.0,
            color,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_released(MouseButton::Left)
    }
}
