#![allow(non_snake_case)]

use dioxus_logger::tracing::Level;

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus_logger::init(level).ok();

    dioxus::launch(urban_console::client::App);
}
