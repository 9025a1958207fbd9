use gloo::console;

/// Console logger with per-component tags. Logging is best-effort and never
/// leaves the browser.
pub struct Logger;

impl Logger {
    pub fn debug(component: &str, message: &str) {
        console::debug!(format!("[{}] {}", component, message));
    }

    pub fn info(component: &str, message: &str) {
        console::log!(format!("[{}] {}", component, message));
    }

    pub fn warn(component: &str, message: &str) {
        console::warn!(format!("[{}] {}", component, message));
    }

    pub fn error(component: &str, message: &str) {
        console::error!(format!("[{}] {}", component, message));
    }
}
