//! # Taskflow Core Library
//!
//! This library provides the core logic for Taskflow, a priority-driven
//! short-term scheduler. All operations are available via a standalone CLI
//! binary, with any GUI expected to be a thin layer over the same core.
//!
//! ## Architecture
//!
//! - **Plan**: projects and tasks edited by the outer surfaces
//! - **Availability**: per-weekday work hours and slot derivation
//! - **Pool**: priority-tiered task queues for one allocation run
//! - **Allocator**: the pure slot-allocation core
//! - **Storage**: JSON plan file and TOML configuration
//!
//! ## Key Components
//!
//! - [`SlotAllocator`]: generates the five-day schedule
//! - [`Plan`]: the editable project/task aggregate
//! - [`WeekSchedule`]: the weekly work-hours pattern
//! - [`Config`]: application configuration management

pub mod allocator;
pub mod availability;
pub mod error;
pub mod plan;
pub mod pool;
pub mod storage;

pub use allocator::{DaySchedule, Slot, SlotAllocator, LOOKAHEAD_DAYS, OPEN_SLOT};
pub use availability::{
    parse_weekday, weekday_label, weekday_name, DayAvailability, WeekSchedule, WorkDayConfig,
    SLOT_HOURS,
};
pub use error::{ConfigError, CoreError};
pub use plan::{Bucket, Category, Plan, Priority, Project, Task};
pub use pool::TaskPool;
pub use storage::{Config, PlanStore};
