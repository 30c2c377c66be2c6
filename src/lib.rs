use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod domain;
pub mod format_utils;
pub mod infrastructure;
pub mod presentation;

/// Wire the logging and clock implementations. Runs for every host, including
/// the one that only serves the dashboard image API.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        infrastructure::services::ConsoleLogger::new_development()
    } else {
        infrastructure::services::ConsoleLogger::new_production()
    };
    domain::logging::init_logger(Box::new(console_logger));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 RADBOT runtime initialized");
}

/// Mount the dashboard UI into `document.body`.
#[wasm_bindgen(js_name = mountDashboard)]
pub fn mount_dashboard() {
    leptos::mount_to_body(app::App);
}
