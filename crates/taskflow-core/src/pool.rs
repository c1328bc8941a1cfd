//! Priority-ordered task queues for a single allocation run.
//!
//! Buckets are index cursors over immutable per-bucket sequences rather
//! than mutated lists, so a task can never be observed by two buckets or
//! handed out twice within one run.

use crate::plan::{Bucket, Project, Task};

/// Snapshot of all eligible (incomplete) tasks, grouped by bucket.
///
/// Queue order follows project order, then task order within each project.
/// Dequeuing consults buckets in [`Bucket::ORDER`]; once a task is handed
/// out it is consumed for the rest of the run.
#[derive(Debug)]
pub struct TaskPool<'a> {
    queues: [Vec<&'a Task>; 3],
    cursors: [usize; 3],
}

impl<'a> TaskPool<'a> {
    /// Build the three bucket queues from a project snapshot.
    pub fn from_projects(projects: &'a [Project]) -> Self {
        let mut queues: [Vec<&'a Task>; 3] = [Vec::new(), Vec::new(), Vec::new()];
        for project in projects {
            let queue = &mut queues[project.priority.bucket().index()];
            queue.extend(project.tasks.iter().filter(|task| !task.completed));
        }
        Self {
            queues,
            cursors: [0; 3],
        }
    }

    /// Dequeue the next task, draining urgent before normal before flexible.
    pub fn next_task(&mut self) -> Option<&'a Task> {
        for bucket in Bucket::ORDER {
            let index = bucket.index();
            let queue = &self.queues[index];
            let cursor = &mut self.cursors[index];
            if *cursor < queue.len() {
                let task = queue[*cursor];
                *cursor += 1;
                return Some(task);
            }
        }
        None
    }

    /// Tasks still queued in one bucket.
    pub fn remaining_in(&self, bucket: Bucket) -> usize {
        let index = bucket.index();
        self.queues[index].len() - self.cursors[index]
    }

    /// Tasks still queued across all buckets.
    pub fn remaining(&self) -> usize {
        Bucket::ORDER
            .iter()
            .map(|bucket| self.remaining_in(*bucket))
            .sum()
    }
}
