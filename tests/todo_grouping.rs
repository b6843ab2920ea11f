#[cfg(test)]
mod tests {
    use pathway::libs::todo::{group_by_period, PeriodGroup, Todo};
    use pathway::libs::view::{todo_lines, TodoLine};

    fn feed() -> Vec<Todo> {
        serde_json::from_str::<serde_json::Value>(
            r#"{
                "todos": [
                    {"_id": "a1", "task": "flashcards", "goal_period": "daily", "completion_status": false},
                    {"_id": "b2", "task": "mock exam", "goal_period": "weekly", "completion_status": true},
                    {"_id": "c3", "task": "read two chapters", "goal_period": "monthly", "completion_status": false},
                    {"_id": "d4", "task": "tidy desk", "completion_status": false}
                ]
            }"#,
        )
        .ok()
        .and_then(|value| serde_json::from_value(value["todos"].clone()).ok())
        .unwrap()
    }

    #[test]
    fn test_feed_deserialization_defaults() {
        let todos = feed();
        assert_eq!(todos.len(), 4);
        assert_eq!(todos[0].id, "a1");
        assert_eq!(todos[3].goal_period, None);
        assert!(!todos[3].completion_status);
    }

    #[test]
    fn test_group_order_with_every_period_present() {
        let binding = feed();
        let groups = group_by_period(&binding);
        let order: Vec<PeriodGroup> = groups.iter().map(|(group, _)| *group).collect();
        assert_eq!(
            order,
            vec![PeriodGroup::Daily, PeriodGroup::Weekly, PeriodGroup::Monthly, PeriodGroup::Other]
        );
    }

    #[test]
    fn test_rendered_lines_carry_headers_and_separators() {
        let lines = todo_lines(&feed());

        let headers: Vec<&str> = lines
            .iter()
            .filter_map(|line| match line {
                TodoLine::Header(header) => Some(header.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(headers, vec!["Daily Goals", "Weekly Goals", "Monthly Goals", "Other Tasks"]);

        // Four groups are rendered, so exactly three separators sit between them.
        let separators = lines.iter().filter(|line| matches!(line, TodoLine::Separator)).count();
        assert_eq!(separators, 3);

        // The first rendered line is never a separator.
        assert!(!matches!(lines[0], TodoLine::Separator));
    }

    #[test]
    fn test_empty_groups_render_nothing() {
        let todos = vec![Todo {
            id: "a1".to_string(),
            task: "flashcards".to_string(),
            goal_period: Some("monthly".to_string()),
            completion_status: false,
        }];
        let lines = todo_lines(&todos);

        assert_eq!(
            lines,
            vec![
                TodoLine::Header("Monthly Goals".to_string()),
                TodoLine::Item {
                    id: "a1".to_string(),
                    text: "flashcards".to_string(),
                    done: false
                },
            ]
        );
    }

    #[test]
    fn test_completion_state_travels_to_the_rendered_item() {
        let lines = todo_lines(&feed());
        let done_flags: Vec<bool> = lines
            .iter()
            .filter_map(|line| match line {
                TodoLine::Item { done, .. } => Some(*done),
                _ => None,
            })
            .collect();
        assert_eq!(done_flags, vec![false, true, false, false]);
    }

    #[test]
    fn test_empty_feed_renders_placeholder() {
        assert_eq!(todo_lines(&[]), vec![TodoLine::Empty]);
    }
}
