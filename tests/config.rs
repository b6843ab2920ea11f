#[cfg(test)]
mod tests {
    use pathway::api::TrackerConfig;
    use pathway::libs::config::Config;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context that points the data directory at a throwaway HOME.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_round_trip(_ctx: &mut ConfigTestContext) {
        // A missing file yields the default configuration.
        let config = Config::read().unwrap();
        assert!(config.tracker.is_none());

        let mut config = Config::default();
        config.tracker = Some(TrackerConfig {
            email: "student@example.com".to_string(),
            api_url: "http://localhost:5000".to_string(),
        });
        config.save().unwrap();

        let reloaded = Config::read().unwrap();
        let tracker = reloaded.tracker.expect("tracker module should survive a save");
        assert_eq!(tracker.email, "student@example.com");
        assert_eq!(tracker.api_url, "http://localhost:5000");
    }

    #[test]
    fn test_tracker_module_metadata() {
        let module = TrackerConfig::module();
        assert_eq!(module.key, "tracker");
        assert_eq!(module.name, "Dashboard server");
    }
}
