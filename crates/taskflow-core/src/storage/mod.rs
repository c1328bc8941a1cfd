mod config;
mod plan_store;

pub use config::Config;
pub use plan_store::PlanStore;

use std::path::PathBuf;

/// Returns `~/.config/taskflow[-dev]/` based on TASKFLOW_ENV.
///
/// Set TASKFLOW_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TASKFLOW_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("taskflow-dev")
    } else {
        base_dir.join("taskflow")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
