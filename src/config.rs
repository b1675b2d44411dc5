use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Tunables for the tracker core. Everything has a sensible default so the
/// crate works with no config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Number of days in the generated cycle chart.
    pub chart_days: u32,
    /// Reference cycle length shown as "Day N / 28".
    pub reference_cycle_days: u32,
    /// Cycle day the app starts on.
    pub default_cycle_day: u32,
    /// Mood the draft slider resets to.
    pub default_draft_mood: u8,
    /// Simulated analysis duration in milliseconds.
    pub analysis_delay_ms: u64,
    /// Capacity of the insight LRU cache.
    pub insight_cache_size: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            chart_days: 30,
            reference_cycle_days: 28,
            default_cycle_day: 26,
            default_draft_mood: 5,
            analysis_delay_ms: 1500,
            insight_cache_size: 200,
        }
    }
}

fn get_config_path() -> PathBuf {
    // Per-OS app data locations
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push("Library/Application Support/com.moodcast.app");
            dir.push("moodcast.toml");
            return dir;
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            let mut dir = PathBuf::from(appdata);
            dir.push("com.moodcast.app");
            dir.push("moodcast.toml");
            return dir;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push(".local/share/com.moodcast.app");
            dir.push("moodcast.toml");
            return dir;
        }
    }

    // Fallback
    PathBuf::from("moodcast.toml")
}

fn load_tracker_config_internal() -> TrackerConfig {
    // A moodcast.toml in the working directory wins over the app data copy
    for config_path in [PathBuf::from("moodcast.toml"), get_config_path()] {
        if let Ok(content) = fs::read_to_string(&config_path) {
            match toml::from_str::<TrackerConfig>(&content) {
                Ok(config) => {
                    eprintln!("[Config] Loaded tracker config from: {:?}", config_path);
                    return config;
                }
                Err(_) => {
                    eprintln!("[Config] Failed to parse {:?}, using defaults", config_path);
                }
            }
        }
    }

    // Return defaults if no file exists or parsing fails
    eprintln!("[Config] Using default tracker configuration");
    TrackerConfig::default()
}

lazy_static! {
    static ref TRACKER_CONFIG: TrackerConfig = load_tracker_config_internal();
}

/// Get the cached tracker configuration (loaded once at startup)
pub fn get_tracker_config() -> &'static TrackerConfig {
    &TRACKER_CONFIG
}
