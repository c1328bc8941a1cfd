//! Slot allocator: packs pending tasks into fixed two-hour slots.
//!
//! This is the core of the system:
//! - Derives availability windows from the weekly work-hours pattern
//! - Drains the priority-tiered task queues into slots, in order
//! - Resolves each task's owning project for display labels
//!
//! The whole computation is a pure function of its three inputs; it never
//! errors, never mutates the plan, and retains no state between calls.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::availability::{weekday_label, WeekSchedule, SLOT_HOURS};
use crate::plan::{Priority, Project};
use crate::pool::TaskPool;

/// Lookahead horizon: today plus the next four calendar days.
pub const LOOKAHEAD_DAYS: u32 = 5;

/// Task label for a slot no bucket could fill.
pub const OPEN_SLOT: &str = "Open slot";

/// One two-hour window in a generated schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Slot {
    /// Time-range label, `"9:00 - 11:00"` form.
    pub time: String,
    /// Task name, or [`OPEN_SLOT`] when unassigned.
    pub task: String,
    pub task_id: Option<String>,
    /// Owning project name, if assigned.
    pub project: Option<String>,
    /// Owning project priority tier, if assigned.
    pub priority: Option<Priority>,
}

impl Slot {
    pub fn is_open(&self) -> bool {
        self.task_id.is_none()
    }
}

/// One scheduled day: formatted date, weekday label, chronological slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DaySchedule {
    /// Formatted calendar date, `M/D/YYYY`.
    pub date: String,
    /// Capitalized weekday label.
    pub day_name: String,
    pub slots: Vec<Slot>,
}

/// The slot allocator. Stateless; a value exists only to mirror the call
/// shape of the surrounding services.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotAllocator;

impl SlotAllocator {
    pub fn new() -> Self {
        Self
    }

    /// Generate the short-term schedule.
    ///
    /// Walks the five-day horizon starting at `today`, skips days without
    /// availability, and fills each day's slots by dequeuing tasks bucket
    /// by bucket. Identical inputs always produce identical output; tasks
    /// that overflow the horizon's slot capacity are simply not placed.
    pub fn generate(
        &self,
        projects: &[Project],
        week: &WeekSchedule,
        today: NaiveDate,
    ) -> Vec<DaySchedule> {
        let mut pool = TaskPool::from_projects(projects);
        let mut schedule = Vec::new();

        for offset in 0..LOOKAHEAD_DAYS {
            let date = today + Duration::days(i64::from(offset));
            let Some(availability) = week.availability_on(date) else {
                continue;
            };

            let mut slots = Vec::with_capacity(availability.slot_count as usize);
            for index in 0..availability.slot_count {
                let slot_start = availability.start_hour + index * SLOT_HOURS;
                let time = format!("{}:00 - {}:00", slot_start, slot_start + SLOT_HOURS);

                let slot = match pool.next_task() {
                    Some(task) => {
                        // Lookup by identity: buckets only order the dequeue,
                        // the owning project supplies the display labels.
                        let owner = owning_project(projects, &task.id);
                        Slot {
                            time,
                            task: task.name.clone(),
                            task_id: Some(task.id.clone()),
                            project: owner.map(|p| p.name.clone()),
                            priority: owner.map(|p| p.priority),
                        }
                    }
                    None => Slot {
                        time,
                        task: OPEN_SLOT.to_string(),
                        task_id: None,
                        project: None,
                        priority: None,
                    },
                };
                slots.push(slot);
            }

            schedule.push(DaySchedule {
                date: format_date(date),
                day_name: weekday_label(date.weekday()).to_string(),
                slots,
            });
        }

        log::debug!(
            "generated {} day(s), {} task(s) left unplaced",
            schedule.len(),
            pool.remaining()
        );
        schedule
    }
}

fn owning_project<'a>(projects: &'a [Project], task_id: &str) -> Option<&'a Project> {
    projects
        .iter()
        .find(|project| project.tasks.iter().any(|task| task.id == task_id))
}

fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
