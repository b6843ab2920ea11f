//! Todo list view model: wire types, period grouping, add validation and
//! the optimistic-toggle bookkeeping used by the interactive panel.
//!
//! The server is the sole source of truth for todos. The panel never keeps
//! a durable copy: every successful mutation is followed by a wholesale
//! reload, and the only client-side state beyond the last fetched list is
//! the in-flight toggle that may still need to be rolled back.

use crate::libs::formatter::capitalize_first;
use crate::libs::messages::Message;
use serde::{Deserialize, Serialize};

/// A todo item as returned by the `/todo` feed.
///
/// `goal_period` and `completion_status` may be absent in older records;
/// both default the way the dashboard treats them (no period, not done).
#[derive(Debug, Clone, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    pub task: String,
    #[serde(default)]
    pub goal_period: Option<String>,
    #[serde(default)]
    pub completion_status: bool,
}

/// Payload for `POST /todo/add`, produced only by [`validate_new_todo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTodo {
    pub task: String,
    pub goal_period: String,
}

/// The four rendering buckets, in their fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodGroup {
    Daily,
    Weekly,
    Monthly,
    Other,
}

impl PeriodGroup {
    /// Display order: daily, weekly, monthly, then the no-period catch-all.
    pub const ORDER: [PeriodGroup; 4] = [PeriodGroup::Daily, PeriodGroup::Weekly, PeriodGroup::Monthly, PeriodGroup::Other];

    /// Buckets a todo by its goal period. Absent and unknown values both
    /// land in the catch-all group.
    pub fn of(todo: &Todo) -> Self {
        match todo.goal_period.as_deref() {
            Some("daily") => PeriodGroup::Daily,
            Some("weekly") => PeriodGroup::Weekly,
            Some("monthly") => PeriodGroup::Monthly,
            _ => PeriodGroup::Other,
        }
    }

    /// Group header text: "<Period> Goals", or "Other Tasks" for the
    /// catch-all.
    pub fn header(&self) -> String {
        match self {
            PeriodGroup::Daily => format!("{} Goals", capitalize_first("daily")),
            PeriodGroup::Weekly => format!("{} Goals", capitalize_first("weekly")),
            PeriodGroup::Monthly => format!("{} Goals", capitalize_first("monthly")),
            PeriodGroup::Other => "Other Tasks".to_string(),
        }
    }
}

/// Goal periods offered when adding a task.
pub const GOAL_PERIODS: [&str; 3] = ["daily", "weekly", "monthly"];

/// Groups todos into the fixed-order buckets, dropping empty groups.
///
/// The relative order of items within a group follows the feed order, and
/// groups with no items simply do not appear, so the renderer never has to
/// special-case an empty bucket.
pub fn group_by_period(todos: &[Todo]) -> Vec<(PeriodGroup, Vec<&Todo>)> {
    PeriodGroup::ORDER
        .iter()
        .filter_map(|group| {
            let members: Vec<&Todo> = todos.iter().filter(|todo| PeriodGroup::of(todo) == *group).collect();
            if members.is_empty() {
                None
            } else {
                Some((*group, members))
            }
        })
        .collect()
}

/// Validates add-task input before any network call is made.
///
/// Whitespace-only task text and a missing goal period are both rejected
/// client-side with the matching alert message; the task text is trimmed on
/// the way out.
pub fn validate_new_todo(task: &str, goal_period: &str) -> Result<NewTodo, Message> {
    let task = task.trim();
    if task.is_empty() {
        return Err(Message::TaskCannotBeEmpty);
    }
    if goal_period.is_empty() {
        return Err(Message::GoalPeriodRequired);
    }
    Ok(NewTodo {
        task: task.to_string(),
        goal_period: goal_period.to_string(),
    })
}

/// Interactive panel state: the open flag, the last fetched list and the
/// bookkeeping for an optimistic toggle that may have to be reverted.
///
/// Mirrors the mutation contract of the dashboard: a toggle flips the
/// rendered state immediately, then either the whole list is replaced from
/// the server (success) or the flip is undone (failure).
#[derive(Debug, Default)]
pub struct TodoPanel {
    open: bool,
    items: Vec<Todo>,
}

impl TodoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the panel with a freshly loaded list.
    pub fn open(&mut self, items: Vec<Todo>) {
        self.items = items;
        self.open = true;
    }

    /// Closes the panel. The caller is responsible for the follow-up stats
    /// reload.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    /// Replaces the item list after a successful mutation reload.
    pub fn replace(&mut self, items: Vec<Todo>) {
        self.items = items;
    }

    /// Optimistically flips the rendered completion state of an item and
    /// returns its pre-toggle value, which the caller must hand back to
    /// [`TodoPanel::rollback`] if the server rejects the change.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let todo = self.items.iter_mut().find(|todo| todo.id == id)?;
        let prior = todo.completion_status;
        todo.completion_status = !prior;
        Some(prior)
    }

    /// Reverts a failed toggle to its pre-click state.
    pub fn rollback(&mut self, id: &str, prior: bool) {
        if let Some(todo) = self.items.iter_mut().find(|todo| todo.id == id) {
            todo.completion_status = prior;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str, task: &str, period: Option<&str>, done: bool) -> Todo {
        Todo {
            id: id.to_string(),
            task: task.to_string(),
            goal_period: period.map(str::to_string),
            completion_status: done,
        }
    }

    #[test]
    fn groups_follow_fixed_order() {
        let todos = vec![
            todo("1", "read notes", Some("monthly"), false),
            todo("2", "flashcards", Some("daily"), false),
            todo("3", "mock exam", Some("weekly"), true),
            todo("4", "tidy desk", None, false),
        ];
        let groups = group_by_period(&todos);
        let order: Vec<PeriodGroup> = groups.iter().map(|(group, _)| *group).collect();
        assert_eq!(
            order,
            vec![PeriodGroup::Daily, PeriodGroup::Weekly, PeriodGroup::Monthly, PeriodGroup::Other]
        );
    }

    #[test]
    fn unknown_period_lands_in_catch_all() {
        let todos = vec![todo("1", "stretch", Some("fortnightly"), false)];
        let groups = group_by_period(&todos);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, PeriodGroup::Other);
    }

    #[test]
    fn empty_groups_are_dropped() {
        let todos = vec![todo("1", "flashcards", Some("weekly"), false)];
        let groups = group_by_period(&todos);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, PeriodGroup::Weekly);
    }

    #[test]
    fn headers_match_dashboard_labels() {
        assert_eq!(PeriodGroup::Daily.header(), "Daily Goals");
        assert_eq!(PeriodGroup::Weekly.header(), "Weekly Goals");
        assert_eq!(PeriodGroup::Monthly.header(), "Monthly Goals");
        assert_eq!(PeriodGroup::Other.header(), "Other Tasks");
    }

    #[test]
    fn add_validation_rejects_blank_task() {
        assert!(matches!(validate_new_todo("", "daily"), Err(Message::TaskCannotBeEmpty)));
        assert!(matches!(validate_new_todo("   ", "daily"), Err(Message::TaskCannotBeEmpty)));
    }

    #[test]
    fn add_validation_requires_goal_period() {
        assert!(matches!(validate_new_todo("revise algebra", ""), Err(Message::GoalPeriodRequired)));
    }

    #[test]
    fn add_validation_trims_task_text() {
        let new_todo = validate_new_todo("  revise algebra  ", "weekly").unwrap();
        assert_eq!(new_todo.task, "revise algebra");
        assert_eq!(new_todo.goal_period, "weekly");
    }

    #[test]
    fn toggle_returns_prior_state_and_flips() {
        let mut panel = TodoPanel::new();
        panel.open(vec![todo("1", "flashcards", Some("daily"), false)]);

        let prior = panel.toggle("1");
        assert_eq!(prior, Some(false));
        assert!(panel.items()[0].completion_status);
    }

    #[test]
    fn rollback_restores_pre_click_state() {
        let mut panel = TodoPanel::new();
        panel.open(vec![todo("1", "flashcards", Some("daily"), true)]);

        let prior = panel.toggle("1").unwrap();
        assert!(!panel.items()[0].completion_status);

        panel.rollback("1", prior);
        assert!(panel.items()[0].completion_status);
    }

    #[test]
    fn toggle_of_unknown_id_is_a_no_op() {
        let mut panel = TodoPanel::new();
        panel.open(vec![todo("1", "flashcards", Some("daily"), false)]);
        assert_eq!(panel.toggle("missing"), None);
        assert!(!panel.items()[0].completion_status);
    }
}
