// src/app/mod.rs
use macroquad::prelude::*;
use tracing::info;

use crate::core::LayoutError;
use crate::input::poll_events;
use crate::rendering::{Hud, MacroquadSurface};
use crate::state::ApplicationState;

/// Native driver: one `ApplicationState::frame` per macroquad frame until quit.
pub async fn run() -> Result<(), LayoutError> {
    let mut state = ApplicationState::new(get_time())?;
    let mut hud = Hud::new();
    let mut surface = MacroquadSurface;

    // Route the window close button through `poll_events`
    prevent_quit();
    info!(
        grid = state.grid.size(),
        preview = state.preview.output_size(),
        scale = state.preview.scale_factor(),
        "editor started"
    );

    loop {
        hud.update(get_frame_time());

        let events = poll_events();
        if !state.frame(&mut surface, &events, get_time()) {
            break;
        }
        hud.draw(&mut surface, &state);

        next_frame().await
    }

    info!("editor stopped");
    Ok(())
}
