mod button;

pub use button::Button;

use macroquad::prelude::Color;

use crate::application::{AppConfig, GameState};
use crate::domain::Pattern;

pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_SPACING: f32 = 10.0;

pub const ACTIVE_GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
pub const INACTIVE_GREEN: Color = Color::new(0.0, 55.0 / 255.0, 0.0, 1.0);
pub const CELL_GREEN: Color = Color::new(0.0, 155.0 / 255.0, 0.0, 1.0);
pub const GRID_LINE_GRAY: Color = Color::new(40.0 / 255.0, 40.0 / 255.0, 40.0 / 255.0, 1.0);

/// Everything a panel click can ask the driver to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    Start,
    Stop,
    Clear,
    Quit,
    Place(Pattern),
}

impl UiAction {
    pub fn label(&self) -> &'static str {
        match self {
            UiAction::Start => "Start",
            UiAction::Stop => "Stop",
            UiAction::Clear => "Clear",
            UiAction::Quit => "Quit",
            UiAction::Place(pattern) => pattern.name(),
        }
    }

    /// Whether the action is currently available, mirroring the driver state
    pub fn is_enabled(&self, state: &GameState) -> bool {
        match self {
            UiAction::Start => state.can_start(),
            UiAction::Stop => state.can_stop(),
            UiAction::Clear | UiAction::Quit => true,
            UiAction::Place(_) => !state.is_running,
        }
    }

    /// One-line explanation shown while the button is hovered
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            UiAction::Place(pattern) => Some(pattern.description()),
            _ => None,
        }
    }
}

/// Pixel geometry of the window: grid canvas on the left, panel on the right
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub cell_size: f32,
    pub panel_width: f32,
}

impl Layout {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            canvas_width: config.canvas_width as f32,
            canvas_height: config.canvas_height as f32,
            cell_size: config.cell_size as f32,
            panel_width: config.panel_width as f32,
        }
    }

    /// Get the X position where the panel starts (right side)
    pub fn panel_x(&self) -> f32 {
        self.canvas_width
    }

    /// Pixel position to grid coordinate, or None outside the canvas
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32) -> Option<(i32, i32)> {
        let inside = (0.0..self.canvas_width).contains(&screen_x)
            && (0.0..self.canvas_height).contains(&screen_y);
        inside.then(|| {
            (
                (screen_x / self.cell_size).floor() as i32,
                (screen_y / self.cell_size).floor() as i32,
            )
        })
    }

    pub fn grid_to_screen(&self, grid_x: usize, grid_y: usize) -> (f32, f32) {
        (grid_x as f32 * self.cell_size, grid_y as f32 * self.cell_size)
    }
}

/// Pattern buttons in two columns at the top, controls stacked at the bottom
pub fn create_buttons(layout: &Layout) -> Vec<Button> {
    let left = layout.panel_x() + BUTTON_SPACING;
    let column_width = (layout.panel_width - 3.0 * BUTTON_SPACING) / 2.0;
    let row_height = BUTTON_HEIGHT + BUTTON_SPACING;

    let patterns = Pattern::ALL.iter().enumerate().map(|(idx, &pattern)| {
        let column = (idx % 2) as f32;
        let row = (idx / 2) as f32;
        Button::new(
            left + column * (column_width + BUTTON_SPACING),
            20.0 + row * row_height,
            column_width,
            BUTTON_HEIGHT,
            UiAction::Place(pattern),
        )
    });

    let controls = [UiAction::Start, UiAction::Stop, UiAction::Clear, UiAction::Quit];
    let controls_top = layout.canvas_height - controls.len() as f32 * row_height;
    let controls = controls.into_iter().enumerate().map(|(idx, action)| {
        Button::new(
            left,
            controls_top + idx as f32 * row_height,
            layout.panel_width - 2.0 * BUTTON_SPACING,
            BUTTON_HEIGHT,
            action,
        )
    });

    patterns.chain(controls).collect()
}
