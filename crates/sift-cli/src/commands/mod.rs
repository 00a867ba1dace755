pub mod filters;
pub mod interactive;
pub mod list;

use sift_config::Config;
use sift_engine::PersistMode;
use sift_storage::FilterStore;
use std::path::PathBuf;

/// Resolve the filter state file: config override, then the platform
/// data dir, then the working directory.
pub fn state_path(config: &Config) -> PathBuf {
    config
        .state_path
        .clone()
        .or_else(FilterStore::default_path)
        .unwrap_or_else(|| PathBuf::from("sift-state.json"))
}

pub fn persist_mode(config: &Config) -> PersistMode {
    match config.persist.as_str() {
        "delay" => PersistMode::Delay,
        _ => PersistMode::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persist_mode_mapping() {
        let mut config = Config::default();
        assert_eq!(persist_mode(&config), PersistMode::Idle);
        config.persist = "delay".to_string();
        assert_eq!(persist_mode(&config), PersistMode::Delay);
        config.persist = "something-else".to_string();
        assert_eq!(persist_mode(&config), PersistMode::Idle);
    }

    #[test]
    fn test_state_path_prefers_override() {
        let config = Config {
            state_path: Some(PathBuf::from("/tmp/custom.json")),
            ..Default::default()
        };
        assert_eq!(state_path(&config), PathBuf::from("/tmp/custom.json"));
    }
}
