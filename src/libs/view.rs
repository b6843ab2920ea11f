//! Console rendering for the dashboard views.
//!
//! Rendering is split in two layers: pure structure builders that turn
//! fetched data into line/row models (unit-testable without a terminal),
//! and thin print functions that apply styling and write to stdout.

use crate::libs::calendar::CalendarState;
use crate::libs::chart::{rings, GoalStats};
use crate::libs::dashboard::{DashboardTable, SubjectRow};
use crate::libs::messages::Message;
use crate::libs::todo::{group_by_period, Todo};
use chrono::{Datelike, NaiveDate};
use console::Style;
use prettytable::{row, Table};

/// Chart width in cells for the outermost (zero-cutout) ring.
const CHART_WIDTH: usize = 40;

/// One line of the rendered todo list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoLine {
    /// Divider drawn between two non-empty groups.
    Separator,
    /// Group caption ("Daily Goals", "Other Tasks", ...).
    Header(String),
    /// A single task with its rendered completion state.
    Item { id: String, text: String, done: bool },
    /// Placeholder shown when the list has no tasks at all.
    Empty,
}

/// Builds the todo list structure: groups in fixed order, a separator
/// before every group except the first rendered one, and no header at
/// all for empty groups.
pub fn todo_lines(todos: &[Todo]) -> Vec<TodoLine> {
    let groups = group_by_period(todos);
    if groups.is_empty() {
        return vec![TodoLine::Empty];
    }

    let mut lines = Vec::new();
    for (group, members) in groups {
        if !lines.is_empty() {
            lines.push(TodoLine::Separator);
        }
        lines.push(TodoLine::Header(group.header()));
        for todo in members {
            lines.push(TodoLine::Item {
                id: todo.id.clone(),
                text: todo.task.clone(),
                done: todo.completion_status,
            });
        }
    }
    lines
}

/// Style applied to a task line: completed tasks render struck through
/// and dimmed, open tasks render plain.
pub fn item_style(done: bool) -> Style {
    if done {
        Style::new().strikethrough().dim()
    } else {
        Style::new()
    }
}

pub struct View {}

impl View {
    /// Prints the subject table the way the dashboard lists it.
    pub fn subjects(table: &DashboardTable) {
        if table.is_empty() {
            println!("{}", Message::NoSubjectsFound);
            return;
        }

        let mut out = Table::new();
        out.add_row(row!["#", "SUBJECT", "MARKS", "PRIORITY", "CATEGORY"]);
        for subject in table.rows() {
            out.add_row(row![subject.index, subject.name, subject.marks, subject.priority, subject.category]);
        }
        out.printstd();
    }

    /// Prints a single patched row, confirming what is now displayed.
    pub fn subject_row(subject: &SubjectRow) {
        let mut out = Table::new();
        out.add_row(row!["#", "SUBJECT", "MARKS", "PRIORITY", "CATEGORY"]);
        out.add_row(row![subject.index, subject.name, subject.marks, subject.priority, subject.category]);
        out.printstd();
    }

    /// Prints the grouped todo list with completion styling.
    pub fn todos(todos: &[Todo]) {
        for line in todo_lines(todos) {
            match line {
                TodoLine::Separator => println!("  {}", "─".repeat(28)),
                TodoLine::Header(header) => println!("  {}", Style::new().dim().italic().apply_to(header.to_uppercase())),
                TodoLine::Item { text, done, .. } => {
                    let marker = if done { "[x]" } else { "[ ]" };
                    println!("  {} {}", marker, item_style(done).apply_to(text));
                }
                TodoLine::Empty => println!("  {}", Message::TodoListEmpty),
            }
        }
    }

    /// Prints the three-ring progress chart plus the textual summary.
    pub fn stats(stats: &GoalStats) {
        println!("{}", Message::StatsHeader);
        for ring in rings(stats) {
            let extent = ring.extent(CHART_WIDTH);
            let filled = ring.filled(extent).min(extent);
            let completed = Style::new().fg(ring.completed_color).apply_to("█".repeat(filled));
            let remaining = Style::new().fg(ring.remaining_color).apply_to("░".repeat(extent - filled));
            // Only the completed segment gets a caption.
            println!("  {:<13} {}{} {}", ring.label, completed, remaining, ring.stats.caption());
        }

        let overall = stats.overall();
        println!();
        println!("  Daily {}  Weekly {}  Monthly {}", stats.daily.caption(), stats.weekly.caption(), stats.monthly.caption());
        msg_line(Message::StatsOverall(overall.completed, overall.total, overall.percentage()));
    }

    /// Prints the month grid with reminder markers and the reminder list
    /// for the visible month.
    pub fn calendar(calendar: &CalendarState, today: NaiveDate) {
        let Some(month) = calendar.visible_month() else {
            return;
        };

        println!("{}", Message::CalendarTitle(crate::libs::calendar::month_label(month)));
        println!("   Su  Mo  Tu  We  Th  Fr  Sa");
        for week in calendar.month_weeks() {
            let mut line = String::new();
            for slot in week {
                match slot {
                    Some(day) => {
                        let marker = if calendar.events_on(day).is_empty() { ' ' } else { '*' };
                        let cell = format!("{:>3}{}", day.day(), marker);
                        if day == today {
                            line.push_str(&Style::new().reverse().apply_to(cell).to_string());
                        } else {
                            line.push_str(&cell);
                        }
                    }
                    None => line.push_str("    "),
                }
            }
            println!("{}", line);
        }

        let mut shown_any = false;
        for (day, titles) in calendar.event_days() {
            if day.month() != month.month() || day.year() != month.year() {
                continue;
            }
            for title in titles {
                println!("  {} · {}", day.format("%d %b"), title);
                shown_any = true;
            }
        }
        if !shown_any {
            println!("  (no reminders this month)");
        }
    }
}

fn msg_line(message: Message) {
    println!("  {}", message);
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
    fn empty_list_renders_placeholder_only() {
        assert_eq!(todo_lines(&[]), vec![TodoLine::Empty]);
    }

    #[test]
    fn first_group_has_no_separator() {
        let todos = vec![todo("1", "flashcards", Some("weekly"), false)];
        let lines = todo_lines(&todos);
        assert_eq!(lines[0], TodoLine::Header("Weekly Goals".to_string()));
        assert!(!lines.contains(&TodoLine::Separator));
    }

    #[test]
    fn separator_drawn_between_non_empty_groups_only() {
        let todos = vec![
            todo("1", "flashcards", Some("daily"), false),
            todo("2", "mock exam", Some("monthly"), false),
        ];
        let lines = todo_lines(&todos);
        assert_eq!(
            lines,
            vec![
                TodoLine::Header("Daily Goals".to_string()),
                TodoLine::Item {
                    id: "1".to_string(),
                    text: "flashcards".to_string(),
                    done: false
                },
                TodoLine::Separator,
                TodoLine::Header("Monthly Goals".to_string()),
                TodoLine::Item {
                    id: "2".to_string(),
                    text: "mock exam".to_string(),
                    done: false
                },
            ]
        );
    }

    #[test]
    fn completed_items_strike_and_dim() {
        let styled = item_style(true).force_styling(true).apply_to("flashcards").to_string();
        assert!(styled.contains("\u{1b}[")); // styled at all
        assert!(styled.contains("9m") || styled.contains(";9")); // strikethrough attribute
        assert!(styled.contains("2m") || styled.contains(";2")); // dim attribute
    }

    #[test]
    fn open_items_render_plain() {
        let styled = item_style(false).force_styling(true).apply_to("flashcards").to_string();
        assert_eq!(styled, "flashcards");
    }
}
