pub mod hours;
pub mod plan;
pub mod project;
pub mod schedule;
pub mod task;

use std::path::PathBuf;

use taskflow_core::PlanStore;

/// Resolve the plan store from an optional `--plan` override.
pub fn open_plan_store(path: Option<PathBuf>) -> Result<PlanStore, Box<dyn std::error::Error>> {
    let path = match path {
        Some(path) => path,
        None => PlanStore::default_path()?,
    };
    Ok(PlanStore::new(path))
}
