//! Plan model: projects, their tasks, and priority tiers.
//!
//! A [`Plan`] is the aggregate state edited by the outer surfaces (CLI
//! commands, a future GUI). The allocator only ever reads it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority tier assigned to a project.
///
/// Tiers map deterministically into three allocation buckets, see
/// [`Priority::bucket`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    #[serde(rename = "immediate")]
    Immediate,
    #[serde(rename = "urgent")]
    Urgent,
    #[serde(rename = "usual")]
    Usual,
    #[serde(rename = "if-you-have-time")]
    IfYouHaveTime,
    #[serde(rename = "do-whenever")]
    DoWhenever,
}

impl Priority {
    /// The allocation bucket this tier drains into.
    pub fn bucket(self) -> Bucket {
        match self {
            Priority::Immediate | Priority::Urgent => Bucket::Urgent,
            Priority::Usual => Bucket::Normal,
            Priority::IfYouHaveTime | Priority::DoWhenever => Bucket::Flexible,
        }
    }

    /// Human-readable label, as shown next to a scheduled slot.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Immediate => "immediate",
            Priority::Urgent => "urgent",
            Priority::Usual => "usual",
            Priority::IfYouHaveTime => "if you have time",
            Priority::DoWhenever => "do whenever",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "immediate" => Ok(Priority::Immediate),
            "urgent" => Ok(Priority::Urgent),
            "usual" => Ok(Priority::Usual),
            "if-you-have-time" | "if you have time" => Ok(Priority::IfYouHaveTime),
            "do-whenever" | "do whenever" => Ok(Priority::DoWhenever),
            other => Err(format!(
                "unknown priority `{other}`; expected immediate|urgent|usual|if-you-have-time|do-whenever"
            )),
        }
    }
}

/// Allocation bucket consulted in strict order when filling a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// immediate + urgent projects
    Urgent,
    /// usual projects
    Normal,
    /// if-you-have-time + do-whenever projects
    Flexible,
}

impl Bucket {
    /// Drain order: urgent first, flexible last.
    pub const ORDER: [Bucket; 3] = [Bucket::Urgent, Bucket::Normal, Bucket::Flexible];

    pub(crate) fn index(self) -> usize {
        match self {
            Bucket::Urgent => 0,
            Bucket::Normal => 1,
            Bucket::Flexible => 2,
        }
    }
}

/// Project category. Presentation-only, never consulted by the allocator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Professional,
    Personal,
    Home,
    Social,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Professional => "professional",
            Category::Personal => "personal",
            Category::Home => "home",
            Category::Social => "social",
        };
        f.write_str(label)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "professional" => Ok(Category::Professional),
            "personal" => Ok(Category::Personal),
            "home" => Ok(Category::Home),
            "social" => Ok(Category::Social),
            other => Err(format!(
                "unknown category `{other}`; expected professional|personal|home|social"
            )),
        }
    }
}

/// A single task inside a project.
///
/// `estimated_hours` is informational only; slots are a fixed two-hour
/// granularity regardless of the estimate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub estimated_hours: f32,
}

impl Task {
    /// Create a new incomplete task with a fresh id.
    pub fn new(name: impl Into<String>, estimated_hours: f32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            completed: false,
            estimated_hours,
        }
    }
}

/// A project grouping related tasks under one priority tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub category: Category,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Project {
    /// Create a new empty project with a fresh id.
    pub fn new(
        name: impl Into<String>,
        priority: Priority,
        due_date: Option<NaiveDate>,
        category: Category,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            priority,
            due_date,
            category,
            tasks: Vec::new(),
        }
    }
}

/// The full editable plan: an ordered list of projects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Plan {
    /// Find a project by id or exact name.
    pub fn project_mut(&mut self, key: &str) -> Option<&mut Project> {
        self.projects
            .iter_mut()
            .find(|p| p.id == key || p.name == key)
    }

    /// Find a task anywhere in the plan by id.
    pub fn task_mut(&mut self, task_id: &str) -> Option<&mut Task> {
        self.projects
            .iter_mut()
            .flat_map(|p| p.tasks.iter_mut())
            .find(|t| t.id == task_id)
    }

    /// The reference data set used by `plan init` and throughout the tests.
    pub fn sample() -> Self {
        fn task(id: &str, name: &str, completed: bool, estimated_hours: f32) -> Task {
            Task {
                id: id.to_string(),
                name: name.to_string(),
                completed,
                estimated_hours,
            }
        }

        Plan {
            projects: vec![
                Project {
                    id: "website-redesign".to_string(),
                    name: "Website Redesign".to_string(),
                    priority: Priority::Urgent,
                    due_date: NaiveDate::from_ymd_opt(2025, 6, 15),
                    category: Category::Professional,
                    tasks: vec![
                        task("research-competitors", "Research competitor sites", true, 2.0),
                        task("wireframes", "Create wireframes", false, 4.0),
                        task("mockups", "Design mockups", false, 6.0),
                    ],
                },
                Project {
                    id: "kitchen-cabinets".to_string(),
                    name: "Kitchen Cabinet Repair".to_string(),
                    priority: Priority::Usual,
                    due_date: NaiveDate::from_ymd_opt(2025, 6, 30),
                    category: Category::Home,
                    tasks: vec![
                        task("wood-stain", "Buy wood stain", false, 1.0),
                        task("sand-doors", "Sand cabinet doors", false, 3.0),
                        task("apply-stain", "Apply stain", false, 2.0),
                    ],
                },
                Project {
                    id: "friend-hangout".to_string(),
                    name: "Plan Friend Hangout".to_string(),
                    priority: Priority::IfYouHaveTime,
                    due_date: NaiveDate::from_ymd_opt(2025, 6, 20),
                    category: Category::Social,
                    tasks: vec![
                        task("text-group", "Text group chat", false, 0.5),
                        task("research-activities", "Research activities", false, 1.0),
                        task("reservations", "Make reservations", false, 0.5),
                    ],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_mapping_is_three_way() {
        assert_eq!(Priority::Immediate.bucket(), Bucket::Urgent);
        assert_eq!(Priority::Urgent.bucket(), Bucket::Urgent);
        assert_eq!(Priority::Usual.bucket(), Bucket::Normal);
        assert_eq!(Priority::IfYouHaveTime.bucket(), Bucket::Flexible);
        assert_eq!(Priority::DoWhenever.bucket(), Bucket::Flexible);
    }

    #[test]
    fn priority_serializes_kebab_case() {
        let json = serde_json::to_string(&Priority::IfYouHaveTime).unwrap();
        assert_eq!(json, "\"if-you-have-time\"");
        let parsed: Priority = serde_json::from_str("\"do-whenever\"").unwrap();
        assert_eq!(parsed, Priority::DoWhenever);
    }

    #[test]
    fn priority_parses_spaced_form() {
        assert_eq!(
            "if you have time".parse::<Priority>().unwrap(),
            Priority::IfYouHaveTime
        );
        assert!("someday".parse::<Priority>().is_err());
    }

    #[test]
    fn plan_serialization_roundtrip() {
        let plan = Plan::sample();
        let json = serde_json::to_string(&plan).unwrap();
        let decoded: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, plan);
    }

    #[test]
    fn project_lookup_by_id_or_name() {
        let mut plan = Plan::sample();
        assert!(plan.project_mut("website-redesign").is_some());
        assert!(plan.project_mut("Kitchen Cabinet Repair").is_some());
        assert!(plan.project_mut("missing").is_none());
    }

    #[test]
    fn task_lookup_crosses_projects() {
        let mut plan = Plan::sample();
        let task = plan.task_mut("apply-stain").unwrap();
        assert_eq!(task.name, "Apply stain");
        task.completed = true;
        assert!(plan.projects[1].tasks[2].completed);
    }
}
