pub mod dispatcher;
pub mod events;

pub use dispatcher::dispatch;
pub use events::{poll_events, InputEvent};
