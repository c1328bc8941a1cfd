//! JSON plan file storage.
//!
//! The plan file is the input the editing commands mutate; generated
//! schedules are never written back, they are recomputed on demand.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::plan::Plan;

/// Load/save handle for a plan file.
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default plan location, `<data_dir>/plan.json`.
    pub fn default_path() -> std::io::Result<PathBuf> {
        Ok(super::data_dir()?.join("plan.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the plan, or an empty one when the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Plan> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Plan::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Persist the plan as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the plan cannot be serialized or written.
    pub fn save(&self, plan: &Plan) -> Result<()> {
        let content = serde_json::to_string_pretty(plan)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
