//! Plan file commands for CLI.

use clap::Subcommand;
use std::path::PathBuf;
use taskflow_core::Plan;

#[derive(Subcommand)]
pub enum PlanAction {
    /// Seed the plan file with the sample projects
    Init {
        /// Plan file path (default: <data_dir>/plan.json)
        #[arg(long)]
        plan: Option<PathBuf>,
        /// Overwrite a non-empty plan file
        #[arg(long)]
        force: bool,
    },
    /// Show the plan
    Show {
        /// Plan file path
        #[arg(long)]
        plan: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::Init { plan, force } => {
            let store = super::open_plan_store(plan)?;
            if !force && !store.load()?.projects.is_empty() {
                return Err(format!(
                    "plan at {} is not empty; use --force to overwrite",
                    store.path().display()
                )
                .into());
            }
            store.save(&Plan::sample())?;
            println!("Plan initialized: {}", store.path().display());
        }
        PlanAction::Show { plan, json } => {
            let store = super::open_plan_store(plan)?;
            let plan = store.load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else if plan.projects.is_empty() {
                println!("Plan is empty. Use 'plan init' or 'project add' to get started.");
            } else {
                for project in &plan.projects {
                    match project.due_date {
                        Some(due) => println!(
                            "{} [{}] ({}) due {due}",
                            project.name, project.priority, project.category
                        ),
                        None => println!(
                            "{} [{}] ({})",
                            project.name, project.priority, project.category
                        ),
                    }
                    for task in &project.tasks {
                        let mark = if task.completed { "x" } else { " " };
                        println!(
                            "  [{mark}] {}  {}h  ({})",
                            task.name, task.estimated_hours, task.id
                        );
                    }
                }
            }
        }
    }
    Ok(())
}
