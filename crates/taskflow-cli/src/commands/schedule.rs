//! Schedule generation commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use std::path::PathBuf;
use taskflow_core::{Config, SlotAllocator, LOOKAHEAD_DAYS};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Generate the five-day schedule from the plan and work hours
    Generate {
        /// Plan file path
        #[arg(long)]
        plan: Option<PathBuf>,
        /// Reference date, YYYY-MM-DD (defaults to the system date)
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ScheduleAction::Generate { plan, today, json } => {
            let store = super::open_plan_store(plan)?;
            let plan = store.load()?;
            let config = Config::load_or_default();
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());

            let schedule = SlotAllocator::new().generate(&plan.projects, &config.workweek, today);

            if json {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
            } else if schedule.is_empty() {
                println!("No working days within the next {LOOKAHEAD_DAYS} days.");
            } else {
                for day in &schedule {
                    println!("{} - {}", day.day_name, day.date);
                    for slot in &day.slots {
                        match (&slot.project, slot.priority) {
                            (Some(project), Some(priority)) => println!(
                                "  {:<14} {} ({project}) [{priority}]",
                                slot.time, slot.task
                            ),
                            _ => println!("  {:<14} {}", slot.time, slot.task),
                        }
                    }
                }
            }
        }
    }
    Ok(())
}
