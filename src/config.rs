//! Page configuration
//!
//! The page has no config files or environment variables. Every endpoint,
//! link and tunable lives in one `AppConfig` value that `App` installs as
//! context, so components never hard-code them.

use std::time::Duration;

/// Emoji catalog API endpoint
pub const CATALOG_URL: &str = "https://api.crni.xyz/emojis";

/// Image shown in the previews until an emoji is selected
pub const FALLBACK_PREVIEW_URL: &str = "https://cdn.crni.xyz/r/status.png";

/// Avatar of the simulated chat author
pub const PREVIEW_AVATAR_URL: &str = "https://cdn.discordapp.com/embed/avatars/0.png";

const HELP_URL: &str = "https://discord.gg/4rphpersCa";
const STATUS_BOT_URL: &str = "https://statusbot.us";
const CLOCK_TOOLTIP: &str = "What are you looking at bozo? problem?";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub catalog_url: String,
    pub fallback_preview_url: String,
    pub avatar_url: String,
    pub help_url: String,
    pub status_bot_url: String,
    pub clock_tooltip: String,
    /// Clock refresh period in milliseconds
    pub clock_tick_ms: u32,
    /// Thumbnails before this index load eagerly, the rest lazily
    pub eager_image_count: usize,
    pub toast_duration: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: CATALOG_URL.to_string(),
            fallback_preview_url: FALLBACK_PREVIEW_URL.to_string(),
            avatar_url: PREVIEW_AVATAR_URL.to_string(),
            help_url: HELP_URL.to_string(),
            status_bot_url: STATUS_BOT_URL.to_string(),
            clock_tooltip: CLOCK_TOOLTIP.to_string(),
            clock_tick_ms: 1000,
            eager_image_count: 100,
            toast_duration: Duration::from_secs(2),
        }
    }
}

impl AppConfig {
    /// Whether the thumbnail at `index` should defer loading until scrolled into view
    pub fn is_lazy_image(&self, index: usize) -> bool {
        index >= self.eager_image_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.catalog_url, "https://api.crni.xyz/emojis");
        assert_eq!(config.fallback_preview_url, "https://cdn.crni.xyz/r/status.png");
        assert_eq!(config.clock_tick_ms, 1000);
        assert_eq!(config.toast_duration, Duration::from_secs(2));
    }

    #[test]
    fn test_lazy_image_threshold() {
        let config = AppConfig::default();
        assert!(!config.is_lazy_image(0));
        assert!(!config.is_lazy_image(99));
        assert!(config.is_lazy_image(100));
        assert!(config.is_lazy_image(250));
    }
}
