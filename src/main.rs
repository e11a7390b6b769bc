mod app;
mod core;
mod input;
mod rendering;
mod state;

use tracing::error;

use crate::core::constants::{window_conf, LOG_LEVEL};

fn init_tracing() {
    tracing_subscriber::fmt().with_max_level(LOG_LEVEL).init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    if let Err(err) = app::run().await {
        error!(%err, "failed to start editor");
        std::process::exit(1);
    }
}
