use macroquad::prelude::*;

/// Discrete input delivered to the editor once per frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown { x: i32, y: i32, button: MouseButton },
    KeyDown(KeyCode),
    Quit,
}

const BUTTONS: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

/// Collect this frame's presses from macroquad's input state.
///
/// Expects `prevent_quit()` to have been called so window close shows up here.
pub fn poll_events() -> Vec<InputEvent> {
    let mut events = Vec::new();

    if is_quit_requested() {
        events.push(InputEvent::Quit);
    }

    let (mouse_x, mouse_y) = mouse_position();
    for button in BUTTONS {
        if is_mouse_button_pressed(button) {
            events.push(InputEvent::PointerDown {
                x: mouse_x.floor() as i32,
                y: mouse_y.floor() as i32,
                button,
            });
        }
    }

    for key in get_keys_pressed() {
        events.push(InputEvent::KeyDown(key));
    }

    events
}
