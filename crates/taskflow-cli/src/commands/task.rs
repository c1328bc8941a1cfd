//! Task management commands for CLI.

use clap::Subcommand;
use std::path::PathBuf;
use taskflow_core::Task;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to a project
    Add {
        /// Project id or exact name
        project: String,
        /// Task name
        name: String,
        /// Estimated hours (informational only; slots stay two hours)
        #[arg(long, default_value = "1")]
        hours: f32,
        /// Plan file path
        #[arg(long)]
        plan: Option<PathBuf>,
    },
    /// Mark a task completed
    Done {
        /// Task id
        id: String,
        /// Plan file path
        #[arg(long)]
        plan: Option<PathBuf>,
    },
    /// Reopen a completed task
    Reopen {
        /// Task id
        id: String,
        /// Plan file path
        #[arg(long)]
        plan: Option<PathBuf>,
    },
    /// List tasks across all projects
    List {
        /// Filter by project id or exact name
        #[arg(long)]
        project: Option<String>,
        /// Plan file path
        #[arg(long)]
        plan: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TaskAction::Add {
            project,
            name,
            hours,
            plan,
        } => {
            let store = super::open_plan_store(plan)?;
            let mut plan = store.load()?;
            let owner = plan
                .project_mut(&project)
                .ok_or_else(|| format!("no project matching `{project}`"))?;

            let task = Task::new(name, hours);
            println!("Task created: {}", task.id);
            owner.tasks.push(task);
            store.save(&plan)?;
        }
        TaskAction::Done { id, plan } => {
            set_completed(plan, &id, true)?;
            println!("Task completed: {id}");
        }
        TaskAction::Reopen { id, plan } => {
            set_completed(plan, &id, false)?;
            println!("Task reopened: {id}");
        }
        TaskAction::List {
            project,
            plan,
            json,
        } => {
            let store = super::open_plan_store(plan)?;
            let plan = store.load()?;

            let projects: Vec<_> = plan
                .projects
                .iter()
                .filter(|p| {
                    project
                        .as_deref()
                        .map(|key| p.id == key || p.name == key)
                        .unwrap_or(true)
                })
                .collect();

            if json {
                let rows: Vec<serde_json::Value> = projects
                    .iter()
                    .flat_map(|p| {
                        p.tasks.iter().map(|t| {
                            serde_json::json!({
                                "id": t.id,
                                "name": t.name,
                                "completed": t.completed,
                                "estimated_hours": t.estimated_hours,
                                "project": p.name,
                                "priority": p.priority,
                            })
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for p in projects {
                    for t in &p.tasks {
                        let mark = if t.completed { "x" } else { " " };
                        println!("[{mark}] {}  ({})  {}", t.name, p.name, t.id);
                    }
                }
            }
        }
    }
    Ok(())
}

fn set_completed(
    plan: Option<PathBuf>,
    id: &str,
    completed: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_plan_store(plan)?;
    let mut plan = store.load()?;
    let task = plan
        .task_mut(id)
        .ok_or_else(|| format!("no task with id `{id}`"))?;
    task.completed = completed;
    store.save(&plan)?;
    Ok(())
}
