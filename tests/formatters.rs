#[cfg(test)]
mod tests {
    use pathway::libs::formatter::{capitalize_first, format_minutes};

    #[test]
    fn test_format_minutes_matches_dashboard_display() {
        assert_eq!(format_minutes(5), "5m");
        assert_eq!(format_minutes(59), "59m");
        assert_eq!(format_minutes(60), "1h 0m");
        assert_eq!(format_minutes(125), "2h 5m");
    }

    #[test]
    fn test_capitalize_first_for_group_headers() {
        assert_eq!(format!("{} Goals", capitalize_first("daily")), "Daily Goals");
        assert_eq!(format!("{} Goals", capitalize_first("weekly")), "Weekly Goals");
        assert_eq!(format!("{} Goals", capitalize_first("monthly")), "Monthly Goals");
    }

    #[test]
    fn test_capitalize_first_edge_cases() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("é tude"), "É tude");
        assert_eq!(capitalize_first("Already"), "Already");
    }
}
