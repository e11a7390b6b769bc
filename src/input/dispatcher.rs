use macroquad::prelude::{KeyCode, MouseButton};
use tracing::info;

use super::events::InputEvent;
use crate::core::constants::*;
use crate::state::ApplicationState;

/// Route one event to the first component that claims it
pub fn dispatch(state: &mut ApplicationState, event: &InputEvent) {
    match *event {
        InputEvent::PointerDown {
            x,
            y,
            button: MouseButton::Left,
        } => handle_left_click(state, x, y),
        InputEvent::PointerDown { .. } => {}
        InputEvent::KeyDown(KeyCode::C) => {
            state.grid.clear();
            info!("grid cleared");
        }
        InputEvent::KeyDown(KeyCode::Escape) | InputEvent::Quit => {
            if state.running {
                info!("quit requested");
            }
            state.running = false;
        }
        InputEvent::KeyDown(_) => {}
    }
}

fn handle_left_click(state: &mut ApplicationState, x: i32, y: i32) {
    if state
        .palette
        .handle_click(x, y, PALETTE_ORIGIN.0, PALETTE_ORIGIN.1, PALETTE_CELL_SIZE)
    {
        return;
    }

    let color = state.palette.current_color_index();
    state
        .grid
        .handle_click(x, y, EDITOR_ORIGIN.0, EDITOR_ORIGIN.1, EDITOR_CELL_SIZE, color);
}
