use clap::Parser;
use macroquad::prelude::*;
use torus_life::{
    AppConfig, Algorithm, GameState, Layout, UiAction,
    input, rendering, ui,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "c_gol")]
#[command(about = "Conway's Game of Life on a wraparound grid")]
struct Cli {
    /// Canvas width in pixels
    #[arg(long, default_value_t = AppConfig::default().canvas_width)]
    canvas_width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = AppConfig::default().canvas_height)]
    canvas_height: u32,

    /// Side of one cell in pixels
    #[arg(long, default_value_t = AppConfig::default().cell_size)]
    cell_size: u32,

    /// Generations per second while running
    #[arg(long, default_value_t = AppConfig::default().fps)]
    fps: u32,

    /// Split each generation across all cores
    #[arg(long)]
    parallel: bool,
}

impl Cli {
    fn into_config(self) -> AppConfig {
        AppConfig {
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            cell_size: self.cell_size,
            fps: self.fps,
            algorithm: if self.parallel { Algorithm::Parallel } else { Algorithm::Serial },
            ..AppConfig::default()
        }
    }
}

fn window_conf() -> Conf {
    // macroquad asks for the window before main runs, so arguments are read here too.
    // A rejected configuration keeps the default window and main reports the error.
    let config = Cli::parse().into_config();
    let mut conf = Conf {
        window_title: "c_gol".to_owned(),
        window_resizable: false,
        ..Default::default()
    };
    if let Ok((width, height)) = config.validate().and_then(|()| config.window_size()) {
        conf.window_width = width;
        conf.window_height = height;
    }
    conf
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Cli::parse().into_config();
    let mut state = match GameState::from_config(&config) {
        Ok(state) => state,
        Err(err) => {
            tracing::error!(%err, "invalid configuration");
            return;
        }
    };
    let (width, height) = state.grid.dimensions();
    tracing::info!(width, height, algorithm = state.algorithm.name(), "grid ready");

    let layout = Layout::from_config(&config);
    let buttons = ui::create_buttons(&layout);

    loop {
        let mouse_pos = mouse_position();

        let action = input::keyboard_action(&state)
            .or_else(|| input::clicked_action(&state, &buttons, mouse_pos));
        match action {
            Some(UiAction::Quit) => break,
            Some(action) => state = input::apply_action(state, action),
            None => input::handle_canvas_click(&mut state, &layout, mouse_pos),
        }

        state = state.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_grid(&state.grid, &layout);
        rendering::draw_controls(&state, &layout, &buttons, mouse_pos);

        next_frame().await;
    }

    tracing::info!(generation = state.generation, "quit");
}
