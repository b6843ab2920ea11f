//! Display implementation for pathway application messages.
//!
//! Converts `Message` variants into the human-readable text shown in the
//! terminal. All user-facing wording lives here, in one place, so commands
//! and API clients never carry inline strings.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === SUBJECT MESSAGES ===
            Message::SubjectUpdated(name) => format!("Subject '{}' updated", name),
            Message::SubjectUpdateFailed => "Failed to update subject.".to_string(),
            Message::SubjectDeleted(name) => format!("Subject '{}' deleted", name),
            Message::SubjectDeleteFailed => "Failed to delete subject.".to_string(),
            Message::SubjectNotFound(name) => format!("Subject '{}' not found on the dashboard", name),
            Message::SubjectsHeader => "📚 Subjects".to_string(),
            Message::NoSubjectsFound => "No subjects found. Add some on the dashboard first.".to_string(),
            Message::EditingSubject(name) => format!("Editing subject '{}'", name),
            Message::ConfirmDeleteSubject(name) => format!("Are you sure you want to delete '{}'?", name),
            Message::ConfirmRetryUpdate => "Try again?".to_string(),
            Message::DeleteCanceled => "Delete canceled".to_string(),
            Message::PromptMarks => "Marks".to_string(),
            Message::PromptPriority => "Priority".to_string(),
            Message::PromptCategory => "Category".to_string(),

            // === TODO MESSAGES ===
            Message::TaskCannotBeEmpty => "Task cannot be empty".to_string(),
            Message::GoalPeriodRequired => "Please select a goal period".to_string(),
            Message::TaskAdded => "Task added".to_string(),
            Message::TodoAddFailed(err) => format!("Failed to add task: {}", err),
            Message::TodoAddError(err) => format!("Error adding task: {}", err),
            Message::TodoLoadError(err) => format!("Error loading todos: {}", err),
            Message::TodoMarkDoneFailed(err) => format!("Failed to mark todo done: {}", err),
            Message::TodoListEmpty => "No tasks yet. Add one above!".to_string(),
            Message::TodoPanelTitle => "📋 Todo List".to_string(),
            Message::TodoNotFoundWithId(id) => format!("Todo with id '{}' not found", id),
            Message::PromptNewTask => "New task".to_string(),
            Message::PromptGoalPeriod => "Goal period".to_string(),
            Message::PromptSelectTodo => "Select a task".to_string(),
            Message::PromptPanelAction => "Action".to_string(),

            // === DEADLINE MESSAGES ===
            Message::ExpiredTasksWarning(tasks) => {
                format!("WARNING: These tasks have reached their deadline and will be deleted:\n\n{}", tasks)
            }
            Message::ExpiredTasksAcknowledge => "Acknowledge and refresh the list?".to_string(),

            // === STATS MESSAGES ===
            Message::StatsLoadError(err) => format!("Failed to fetch stats: {}", err),
            Message::StatsHeader => "📊 Goal Progress".to_string(),
            Message::StatsOverall(completed, total, percentage) => {
                format!("Overall: {}/{} goals completed ({}%)", completed, total, percentage)
            }

            // === CALENDAR / REMINDER MESSAGES ===
            Message::PastDateReminder => "Cannot add reminders for past dates!".to_string(),
            Message::PromptReminderText => "Enter reminder".to_string(),
            Message::ReminderAdded => "Reminder added successfully!".to_string(),
            Message::ReminderAddFailed => "Failed to add reminder".to_string(),
            Message::ReminderLoadError(err) => format!("Error loading reminders: {}", err),
            Message::NetworkError => "Network error occurred".to_string(),
            Message::CalendarTitle(month) => format!("📅 {}", month),
            Message::InvalidDate(raw) => format!("Invalid date '{}' (expected YYYY-MM-DD)", raw),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleTracker => "Dashboard server settings".to_string(),
            Message::PromptSelectModules => "Select modules".to_string(),
            Message::PromptTrackerUrl => "Enter the dashboard server URL".to_string(),
            Message::PromptTrackerEmail => "Enter your account email".to_string(),
            Message::TrackerNotConfigured => "Dashboard server is not configured. Run 'pathway init' first.".to_string(),

            // === SESSION MESSAGES ===
            Message::LoggedIn(email) => format!("Logged in as {}", email),
            Message::LoggedOut => "You have been logged out.".to_string(),
            Message::WrongPassword(count) => format!("You entered the wrong password {} times!", count),

            // === GENERIC MESSAGES ===
            Message::Canceled => "Canceled".to_string(),
        };
        write!(f, "{}", message)
    }
}
