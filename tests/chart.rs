#[cfg(test)]
mod tests {
    use pathway::libs::chart::{rings, GoalStats, PeriodStats};

    fn snapshot() -> GoalStats {
        serde_json::from_str(
            r#"{
                "daily": {"completed": 2, "total": 5},
                "weekly": {"completed": 1, "total": 1},
                "monthly": {"completed": 0, "total": 0}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_stats_deserialize_from_server_shape() {
        let stats = snapshot();
        assert_eq!(stats.daily, PeriodStats { completed: 2, total: 5 });
        assert_eq!(stats.weekly.percentage(), 100);
    }

    #[test]
    fn test_zero_total_renders_zero_percent() {
        let stats = snapshot();
        assert_eq!(stats.monthly.percentage(), 0);
        assert_eq!(stats.monthly.caption(), "0/0 (0%)");
    }

    #[test]
    fn test_overall_percentage_guards_division_by_zero() {
        let stats = GoalStats::default();
        let overall = stats.overall();
        assert_eq!(overall.total, 0);
        assert_eq!(overall.percentage(), 0);
    }

    #[test]
    fn test_overall_summary_counts() {
        let overall = snapshot().overall();
        assert_eq!(overall.completed, 3);
        assert_eq!(overall.total, 6);
        assert_eq!(overall.percentage(), 50);
    }

    #[test]
    fn test_ring_nesting_follows_cutouts() {
        let [daily, weekly, monthly] = rings(&snapshot());
        assert_eq!(daily.cutout, 70);
        assert_eq!(weekly.cutout, 55);
        assert_eq!(monthly.cutout, 40);

        // Inner rings are shorter than outer ones at any width.
        assert!(daily.extent(40) < weekly.extent(40));
        assert!(weekly.extent(40) < monthly.extent(40));
    }

    #[test]
    fn test_completed_segment_never_overflows_the_ring() {
        let stats: GoalStats = serde_json::from_str(r#"{"daily": {"completed": 9, "total": 5}, "weekly": {"completed": 0, "total": 0}, "monthly": {"completed": 0, "total": 0}}"#).unwrap();
        assert_eq!(stats.daily.remaining(), 0);

        let [daily, _, _] = rings(&stats);
        let extent = daily.extent(40);
        assert!(daily.filled(extent).min(extent) <= extent);
    }

    #[test]
    fn test_missing_period_defaults_to_empty() {
        let stats: GoalStats = serde_json::from_str(r#"{"daily": {"completed": 1, "total": 2}}"#).unwrap();
        assert_eq!(stats.weekly, PeriodStats::default());
        assert_eq!(stats.monthly.percentage(), 0);
    }
}
