//! Property tests for the slot allocator.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;
use taskflow_core::{
    Category, Plan, Priority, Project, SlotAllocator, Task, TaskPool, WeekSchedule, WorkDayConfig,
    LOOKAHEAD_DAYS, SLOT_HOURS,
};

fn priority_strategy() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Immediate),
        Just(Priority::Urgent),
        Just(Priority::Usual),
        Just(Priority::IfYouHaveTime),
        Just(Priority::DoWhenever),
    ]
}

fn plan_strategy() -> impl Strategy<Value = Plan> {
    prop::collection::vec(
        (priority_strategy(), prop::collection::vec(any::<bool>(), 0..6)),
        0..6,
    )
    .prop_map(|specs| {
        let projects = specs
            .into_iter()
            .enumerate()
            .map(|(p, (priority, completions))| {
                let tasks = completions
                    .into_iter()
                    .enumerate()
                    .map(|(t, completed)| Task {
                        id: format!("p{p}-t{t}"),
                        name: format!("Task {p}.{t}"),
                        completed,
                        estimated_hours: 1.0,
                    })
                    .collect();
                Project {
                    id: format!("p{p}"),
                    name: format!("Project {p}"),
                    priority,
                    due_date: None,
                    category: Category::Professional,
                    tasks,
                }
            })
            .collect();
        Plan { projects }
    })
}

fn week_strategy() -> impl Strategy<Value = WeekSchedule> {
    prop::collection::vec((any::<bool>(), 0u32..24, 0u32..24), 7).prop_map(|days| {
        let mut week = WeekSchedule::default();
        for (i, (enabled, start, end)) in days.into_iter().enumerate() {
            let config = WorkDayConfig::new(
                format!("{start:02}:00"),
                format!("{end:02}:00"),
                enabled,
            );
            match i {
                0 => week.monday = config,
                1 => week.tuesday = config,
                2 => week.wednesday = config,
                3 => week.thursday = config,
                4 => week.friday = config,
                5 => week.saturday = config,
                _ => week.sunday = config,
            }
        }
        week
    })
}

fn today_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..730).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(offset)
    })
}

proptest! {
    #[test]
    fn no_task_is_assigned_twice(plan in plan_strategy(), week in week_strategy(), today in today_strategy()) {
        let schedule = SlotAllocator::new().generate(&plan.projects, &week, today);

        let mut seen = HashSet::new();
        for slot in schedule.iter().flat_map(|day| day.slots.iter()) {
            if let Some(id) = &slot.task_id {
                prop_assert!(seen.insert(id.clone()), "task {} assigned twice", id);
            }
        }
    }

    #[test]
    fn only_incomplete_tasks_are_assigned(plan in plan_strategy(), week in week_strategy(), today in today_strategy()) {
        let by_id: HashMap<&str, &Task> = plan
            .projects
            .iter()
            .flat_map(|p| p.tasks.iter())
            .map(|t| (t.id.as_str(), t))
            .collect();

        let schedule = SlotAllocator::new().generate(&plan.projects, &week, today);
        for slot in schedule.iter().flat_map(|day| day.slots.iter()) {
            if let Some(id) = &slot.task_id {
                let task = by_id.get(id.as_str()).expect("assigned task exists in input");
                prop_assert!(!task.completed);
            }
        }
    }

    #[test]
    fn assignment_order_matches_bucket_drain_order(plan in plan_strategy(), week in week_strategy(), today in today_strategy()) {
        let schedule = SlotAllocator::new().generate(&plan.projects, &week, today);

        let assigned: Vec<String> = schedule
            .iter()
            .flat_map(|day| day.slots.iter())
            .filter_map(|slot| slot.task_id.clone())
            .collect();

        let mut pool = TaskPool::from_projects(&plan.projects);
        let expected: Vec<String> = std::iter::from_fn(|| pool.next_task())
            .take(assigned.len())
            .map(|task| task.id.clone())
            .collect();

        prop_assert_eq!(assigned, expected);
    }

    #[test]
    fn emitted_days_match_the_availability_contract(plan in plan_strategy(), week in week_strategy(), today in today_strategy()) {
        let schedule = SlotAllocator::new().generate(&plan.projects, &week, today);
        prop_assert!(schedule.len() <= LOOKAHEAD_DAYS as usize);

        let mut emitted = schedule.iter();
        for offset in 0..LOOKAHEAD_DAYS {
            let date = today + Duration::days(i64::from(offset));
            let config = week.day(date.weekday());
            let expected_slots = match (config.enabled, config.start_hour(), config.end_hour()) {
                (true, Some(start), Some(end)) if end > start => Some((end - start) / SLOT_HOURS),
                (true, Some(_), Some(_)) => Some(0),
                _ => None,
            };

            if let Some(count) = expected_slots {
                let day = emitted.next().expect("enabled day must be emitted");
                prop_assert_eq!(day.slots.len(), count as usize);
            }
        }
        prop_assert!(emitted.next().is_none(), "no extra days beyond the horizon");
    }

    #[test]
    fn generation_is_deterministic(plan in plan_strategy(), week in week_strategy(), today in today_strategy()) {
        let first = SlotAllocator::new().generate(&plan.projects, &week, today);
        let second = SlotAllocator::new().generate(&plan.projects, &week, today);
        prop_assert_eq!(first, second);
    }
}
