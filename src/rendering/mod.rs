use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::Grid;
use crate::ui::{
    ACTIVE_GREEN, BUTTON_SPACING, Button, CELL_GREEN, GRID_LINE_GRAY, INACTIVE_GREEN, Layout,
};

/// Draw live cells, then the grid lines over them
pub fn draw_grid(grid: &Grid, layout: &Layout) {
    let size = layout.cell_size;

    grid.iter_cells()
        .filter(|&(_, _, alive)| alive)
        .for_each(|(x, y, _)| {
            let (sx, sy) = layout.grid_to_screen(x, y);
            draw_rectangle(sx, sy, size, size, CELL_GREEN);
        });

    let (width, height) = grid.dimensions();
    for x in 0..=width {
        let sx = x as f32 * size;
        draw_line(sx, 0.0, sx, layout.canvas_height, 1.0, GRID_LINE_GRAY);
    }
    for y in 0..=height {
        let sy = y as f32 * size;
        draw_line(0.0, sy, layout.canvas_width, sy, 1.0, GRID_LINE_GRAY);
    }
}

/// Draw the control panel: buttons, the generation/population/status readout,
/// and the hint of whichever pattern button is under the cursor
pub fn draw_controls(state: &GameState, layout: &Layout, buttons: &[Button], mouse_pos: (f32, f32)) {
    buttons
        .iter()
        .for_each(|btn| btn.draw(mouse_pos, btn.action().is_enabled(state)));

    let px = layout.panel_x() + BUTTON_SPACING;
    let status = if state.is_running { "Running" } else { "Stopped" };
    let labels = [
        format!("Generation: {}", state.generation),
        format!("Population: {}", state.grid.population()),
        format!("Status: {}", status),
        format!("{} | {:.1}ms/gen", state.algorithm.name(), state.last_step_time_ms),
    ];

    labels.iter().enumerate().for_each(|(idx, text)| {
        draw_text(text, px, 320.0 + idx as f32 * 24.0, 18.0, ACTIVE_GREEN);
    });

    let below = 320.0 + labels.len() as f32 * 24.0;
    draw_text(state.algorithm.description(), px, below, 16.0, INACTIVE_GREEN);

    if let Some(hint) = buttons
        .iter()
        .find(|btn| btn.is_hovered(mouse_pos))
        .and_then(|btn| btn.action().hint())
    {
        draw_text(hint, px, below + 36.0, 16.0, ACTIVE_GREEN);
    }
}
