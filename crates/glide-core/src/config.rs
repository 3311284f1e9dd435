use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::scroll::options::DEFAULT_DURATION_MS;
use crate::scroll::timing::frame_interval;
use crate::scroll::{Container, Easing, GoToOverrides};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Shared scroll options as stored in the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate scrolling; when false every scroll lands on the first frame
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve name (e.g., "linear", "easeOutQuad", "easeInOutCubic")
    #[serde(default)]
    pub easing: Easing,
    /// Pixels added to every computed target
    #[serde(default)]
    pub offset: f64,
    /// Subtract the fixed layout offset reported by the target's style
    #[serde(default)]
    pub layout: bool,
    /// Container selector, or "parent" for the target's parent element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<Container>,
    /// Frame rate for real-time animation
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: Easing::default(),
            offset: 0.0,
            layout: false,
            container: None,
            animation_fps: default_animation_fps(),
        }
    }
}

impl ScrollConfig {
    /// Check if smooth scrolling is effectively enabled
    #[inline]
    pub fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }

    /// Get animation duration as Duration
    #[inline]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Get tick duration for animation FPS
    #[inline]
    pub fn animation_tick_duration(&self) -> Duration {
        frame_interval(self.animation_fps)
    }

    /// Options layer for the shared scroll instance
    pub fn to_overrides(&self) -> GoToOverrides {
        let duration_ms = if self.is_smooth() {
            self.animation_duration_ms
        } else {
            0
        };
        GoToOverrides {
            container: self.container.clone(),
            duration_ms: Some(duration_ms),
            layout: Some(self.layout),
            offset: Some(self.offset),
            easing: Some(self.easing.clone()),
            ..Default::default()
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_animation_duration() -> u64 {
    DEFAULT_DURATION_MS
}

fn default_animation_fps() -> u32 {
    60
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, returning defaults when it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/glide/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("glide")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScrollConfig::default();
        assert!(config.smooth_enabled);
        assert_eq!(config.animation_duration_ms, 300);
        assert_eq!(config.easing.label(), "easeInOutCubic");
        assert_eq!(config.animation_fps, 60);
        assert_eq!(AppConfig::default().general.log_level, "info");
    }

    #[test]
    fn test_animation_durations() {
        let config = ScrollConfig {
            animation_duration_ms: 200,
            ..Default::default()
        };
        assert_eq!(config.animation_duration(), Duration::from_millis(200));
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));

        let fast = ScrollConfig {
            animation_fps: 2000,
            ..Default::default()
        };
        assert_eq!(fast.animation_tick_duration(), Duration::from_millis(1));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = ScrollConfig::default();
        assert!(config.is_smooth());

        config.smooth_enabled = false;
        assert!(!config.is_smooth());
        assert_eq!(config.to_overrides().duration_ms, Some(0));

        config.smooth_enabled = true;
        config.animation_duration_ms = 0;
        assert!(!config.is_smooth());
    }

    #[test]
    fn test_parse_partial_file() {
        let config = AppConfig::from_toml(
            r#"
            [scroll]
            easing = "easeOutQuart"
            offset = -48.0
            container = "main"
            "#,
        )
        .unwrap();

        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.scroll.animation_duration_ms, 300);
        let overrides = config.scroll.to_overrides();
        assert_eq!(overrides.offset, Some(-48.0));
        assert_eq!(overrides.easing.as_ref().map(|e| e.label()), Some("easeOutQuart"));
        assert!(matches!(overrides.container, Some(Container::Target(_))));
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let err = AppConfig::from_toml("[scroll]\nanimation_duration_ms = \"slow\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_toml_round_trip_keeps_easing_name() {
        let mut config = AppConfig::default();
        config.scroll.easing = Easing::from("linear");
        let text = config.to_toml().unwrap();
        assert!(text.contains("easing = \"linear\""));
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.scroll.easing.label(), "linear");
    }
}
