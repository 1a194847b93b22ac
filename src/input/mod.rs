use macroquad::prelude::*;

use crate::application::GameState;
use crate::ui::{Button, Layout, UiAction};

/// First enabled button released under the cursor this frame
pub fn clicked_action(
    state: &GameState,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> Option<UiAction> {
    buttons
        .iter()
        .filter(|btn| btn.action().is_enabled(state))
        .find(|btn| btn.is_clicked(mouse_pos))
        .map(Button::action)
}

/// Apply a panel or keyboard action to the driver state.
/// Quit is handled by the frame loop and leaves the state untouched.
pub fn apply_action(state: GameState, action: UiAction) -> GameState {
    match action {
        UiAction::Start => state.start(),
        UiAction::Stop => state.stop(),
        UiAction::Clear => state.clear(),
        UiAction::Place(pattern) => state.place_pattern(pattern),
        UiAction::Quit => state,
    }
}

/// Toggle the cell under the cursor on a left click inside the canvas
pub fn handle_canvas_click(state: &mut GameState, layout: &Layout, mouse_pos: (f32, f32)) {
    if !is_mouse_button_released(MouseButton::Left) {
        return;
    }
    if let Some((x, y)) = layout.screen_to_grid(mouse_pos.0, mouse_pos.1) {
        state.toggle_cell(x, y);
    }
}

/// Keyboard shortcuts: Space run/stop, C clear, Escape quit
pub fn keyboard_action(state: &GameState) -> Option<UiAction> {
    if is_key_pressed(KeyCode::Escape) {
        Some(UiAction::Quit)
    } else if is_key_pressed(KeyCode::Space) {
        Some(if state.is_running { UiAction::Stop } else { UiAction::Start })
    } else if is_key_pressed(KeyCode::C) {
        Some(UiAction::Clear)
    } else {
        None
    }
}
