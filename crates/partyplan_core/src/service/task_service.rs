//! Task use-case service.
//!
//! # Responsibility
//! - Filter and group the party checklist.
//! - Report completion progress and upcoming work.
//! - Resolve task relations to elements and timeline events.
//!
//! # Invariants
//! - Filtering never reorders tasks; groups follow `TaskCategory::ALL`.
//! - Upcoming tasks are pending only, ordered by due date then store order.

use crate::model::element::Element;
use crate::model::ids::{EntityKind, TaskId};
use crate::model::task::{Task, TaskCategory, TaskPriority};
use crate::model::timeline_event::TimelineEvent;
use crate::repo::party_repo::{PartyRepository, RepoError, RepoResult};
use crate::repo::patch::TaskPatch;
use jiff::civil::Date;

/// Completion-state filter for the checklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletionFilter {
    #[default]
    All,
    Completed,
    Pending,
}

/// Conjunctive task filter; `None` means "any".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub category: Option<TaskCategory>,
    pub completion: CompletionFilter,
    pub priority: Option<TaskPriority>,
}

impl TaskFilter {
    /// Returns whether `task` passes every set criterion.
    pub fn matches(&self, task: &Task) -> bool {
        let category_ok = self.category.map_or(true, |c| task.category == c);
        let completion_ok = match self.completion {
            CompletionFilter::All => true,
            CompletionFilter::Completed => task.completed,
            CompletionFilter::Pending => !task.completed,
        };
        let priority_ok = self.priority.map_or(true, |p| task.priority == p);
        category_ok && completion_ok && priority_ok
    }
}

/// Tasks of one category, in store order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGroup {
    pub category: TaskCategory,
    pub tasks: Vec<Task>,
}

/// Completed vs. total task counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionRate {
    pub completed: usize,
    pub total: usize,
}

impl CompletionRate {
    /// Rounded percentage; `0` for an empty checklist.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }
}

/// Records linked from one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRelations {
    pub task: Task,
    pub elements: Vec<Element>,
    pub timeline_events: Vec<TimelineEvent>,
}

/// Counts completed tasks in `tasks`.
pub fn completion_rate(tasks: &[Task]) -> CompletionRate {
    CompletionRate {
        completed: tasks.iter().filter(|t| t.completed).count(),
        total: tasks.len(),
    }
}

/// Up to `limit` pending tasks, earliest due date first.
pub fn upcoming_tasks(tasks: &[Task], limit: usize) -> Vec<Task> {
    let mut pending: Vec<Task> = tasks.iter().filter(|t| !t.completed).cloned().collect();
    pending.sort_by_key(|t| t.due_date);
    pending.truncate(limit);
    pending
}

/// Groups tasks by category in display order, skipping empty groups.
pub fn group_by_category(tasks: Vec<Task>) -> Vec<TaskGroup> {
    TaskCategory::ALL
        .iter()
        .map(|&category| TaskGroup {
            category,
            tasks: tasks
                .iter()
                .filter(|t| t.category == category)
                .cloned()
                .collect(),
        })
        .filter(|group| !group.tasks.is_empty())
        .collect()
}

/// Use-case service for the party checklist.
pub struct TaskService<R: PartyRepository> {
    repo: R,
}

impl<R: PartyRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists tasks matching `filter`, in store order.
    pub fn list_tasks(&self, filter: &TaskFilter) -> Vec<Task> {
        self.repo
            .list_tasks()
            .into_iter()
            .filter(|task| filter.matches(task))
            .collect()
    }

    /// Filtered tasks grouped as to-purchase, to-confirm, to-prepare.
    pub fn grouped_tasks(&self, filter: &TaskFilter) -> Vec<TaskGroup> {
        group_by_category(self.list_tasks(filter))
    }

    /// Returns one task by id.
    pub fn get_task(&self, id: &TaskId) -> Option<Task> {
        self.repo.get_task(id)
    }

    /// Completed vs. total over the whole checklist.
    pub fn completion_rate(&self) -> CompletionRate {
        completion_rate(&self.repo.list_tasks())
    }

    /// Up to `limit` pending tasks, earliest due first.
    pub fn upcoming_tasks(&self, limit: usize) -> Vec<Task> {
        upcoming_tasks(&self.repo.list_tasks(), limit)
    }

    /// Pending tasks whose due date is before `today`.
    pub fn past_due_tasks(&self, today: Date) -> Vec<Task> {
        self.repo
            .list_tasks()
            .into_iter()
            .filter(|task| task.is_past_due(today))
            .collect()
    }

    /// Flips the completion flag of one task.
    pub fn toggle_completion(&mut self, id: &TaskId) -> RepoResult<Task> {
        let task = self
            .repo
            .get_task(id)
            .ok_or_else(|| RepoError::NotFound {
                kind: EntityKind::Task,
                id: id.to_string(),
            })?;
        self.repo
            .update_task(id, &TaskPatch::completed(!task.completed))
    }

    /// Applies `patch` to one task.
    pub fn update_task(&mut self, id: &TaskId, patch: &TaskPatch) -> RepoResult<Task> {
        self.repo.update_task(id, patch)
    }

    /// Resolves linked elements and events; dangling ids are skipped.
    pub fn relations(&self, id: &TaskId) -> RepoResult<TaskRelations> {
        let task = self
            .repo
            .get_task(id)
            .ok_or_else(|| RepoError::NotFound {
                kind: EntityKind::Task,
                id: id.to_string(),
            })?;
        let elements = self
            .repo
            .list_elements()
            .into_iter()
            .filter(|element| task.related_elements.contains(&element.id))
            .collect();
        let timeline_events = self
            .repo
            .list_timeline_events()
            .into_iter()
            .filter(|event| task.related_timeline_events.contains(&event.id))
            .collect();

        Ok(TaskRelations {
            task,
            elements,
            timeline_events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{completion_rate, group_by_category, upcoming_tasks, CompletionRate};
    use crate::model::task::{Task, TaskCategory, TaskPriority};
    use jiff::civil::date;

    fn task(id: &str, completed: bool, day: i8, category: TaskCategory) -> Task {
        Task {
            id: id.into(),
            title: format!("task {id}"),
            description: String::new(),
            completed,
            due_date: date(2026, 6, day),
            priority: TaskPriority::Medium,
            category,
            related_elements: Vec::new(),
            related_timeline_events: Vec::new(),
        }
    }

    #[test]
    fn percentage_rounds_and_handles_empty_list() {
        assert_eq!(CompletionRate::default().percentage(), 0);
        let rate = CompletionRate {
            completed: 1,
            total: 3,
        };
        assert_eq!(rate.percentage(), 33);
        let rate = CompletionRate {
            completed: 2,
            total: 3,
        };
        assert_eq!(rate.percentage(), 67);
    }

    #[test]
    fn upcoming_skips_completed_and_orders_by_due_date() {
        let tasks = vec![
            task("a", false, 10, TaskCategory::ToPrepare),
            task("b", true, 1, TaskCategory::ToPrepare),
            task("c", false, 3, TaskCategory::ToPrepare),
            task("d", false, 7, TaskCategory::ToPrepare),
        ];
        let ids: Vec<String> = upcoming_tasks(&tasks, 2)
            .into_iter()
            .map(|t| t.id.to_string())
            .collect();
        assert_eq!(ids, vec!["c", "d"]);
        assert_eq!(completion_rate(&tasks).completed, 1);
    }

    #[test]
    fn groups_follow_fixed_category_order_and_skip_empty() {
        let tasks = vec![
            task("a", false, 1, TaskCategory::ToPrepare),
            task("b", false, 1, TaskCategory::ToPurchase),
            task("c", false, 1, TaskCategory::ToPrepare),
        ];
        let groups = group_by_category(tasks);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, TaskCategory::ToPurchase);
        assert_eq!(groups[1].category, TaskCategory::ToPrepare);
        assert_eq!(groups[1].tasks.len(), 2);
    }
}
