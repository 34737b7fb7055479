use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use once_cell::sync::Lazy;
use chrono::Local;

use crate::config::Config;

static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Initialize logging to a file under `~/.numpick/logs`
pub fn init() -> std::io::Result<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".numpick")
        .join("logs");

    std::fs::create_dir_all(&log_dir)?;

    let log_path = log_dir.join(format!("numpick_{}.log", timestamp));

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(file);
    }

    log(&format!("=== numpick {} started ===", env!("CARGO_PKG_VERSION")));

    Ok(log_path)
}

/// Log a message with timestamp. No-op until `init` succeeded.
pub fn log(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, msg);

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}

/// Log an event
pub fn log_event(event: &str) {
    log(&format!("[EVENT] {}", event));
}

/// Record the effective settings a picking session starts with.
pub fn log_session(config: &Config) {
    log(&session_summary(config));
}

fn session_summary(config: &Config) -> String {
    let excluded: Vec<String> = config.exclusions().iter().map(|id| id.to_string()).collect();
    format!(
        "Session: range 1..={}, tick {}ms, instant {}, always on top {}, excluded [{}]",
        config.range().upper_bound(),
        config.tick().as_millis(),
        config.instant_mode(),
        config.always_on_top(),
        excluded.join(",")
    )
}

/// Restore the terminal and log the panic before the default hook prints it.
///
/// Without this a panic leaves the terminal in raw mode on the alternate screen.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crate::tui::restore_terminal();
        log(&format!("PANIC: {}", info));
        default_hook(info);
    }));
}
