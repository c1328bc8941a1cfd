//! Project management commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use std::path::PathBuf;
use taskflow_core::{Category, Priority, Project};

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Add a new project
    Add {
        /// Project name
        name: String,
        /// Priority tier: immediate|urgent|usual|if-you-have-time|do-whenever
        #[arg(long, default_value = "usual")]
        priority: String,
        /// Due date, YYYY-MM-DD
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Category: professional|personal|home|social
        #[arg(long, default_value = "professional")]
        category: String,
        /// Plan file path
        #[arg(long)]
        plan: Option<PathBuf>,
    },
    /// List projects
    List {
        /// Plan file path
        #[arg(long)]
        plan: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ProjectAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProjectAction::Add {
            name,
            priority,
            due,
            category,
            plan,
        } => {
            let store = super::open_plan_store(plan)?;
            let mut plan = store.load()?;

            let project = Project::new(
                name,
                priority.parse::<Priority>()?,
                due,
                category.parse::<Category>()?,
            );
            println!("Project created: {}", project.id);
            plan.projects.push(project);
            store.save(&plan)?;
        }
        ProjectAction::List { plan, json } => {
            let store = super::open_plan_store(plan)?;
            let plan = store.load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plan.projects)?);
            } else {
                for project in &plan.projects {
                    let open = project.tasks.iter().filter(|t| !t.completed).count();
                    println!(
                        "{}  {} [{}] ({}): {open} open task(s)",
                        project.id, project.name, project.priority, project.category
                    );
                }
            }
        }
    }
    Ok(())
}
