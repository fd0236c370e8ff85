use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::Locale;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Label language: "en" or "bn"
    #[serde(default)]
    pub locale: Locale,
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Write logs to this file instead of stderr
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Category selected on startup
    #[serde(default = "default_category")]
    pub default_category: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            log_level: default_log_level(),
            log_file: None,
            default_category: default_category(),
        }
    }
}

/// Easing function type for the paging animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// No easing, jump to the target on the last frame
    None,
    /// Linear interpolation
    Linear,
    /// Cubic ease-out: 1 - (1-t)^3
    #[default]
    Cubic,
    /// Quintic ease-out: 1 - (1-t)^5
    Quintic,
    /// Exponential ease-out: 1 - 2^(-10t)
    #[serde(rename = "easeout")]
    EaseOut,
}

/// Carousel motion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Auto-advance distance per frame in pixels
    #[serde(default = "default_velocity")]
    pub velocity_px_per_frame: f64,
    /// Frames per second used to convert elapsed time into frames
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    /// Distance covered by one press of the prev/next controls
    #[serde(default = "default_page_step")]
    pub page_step_px: f64,
    /// Width of a single card in pixels
    #[serde(default = "default_card_width")]
    pub card_width_px: f64,
    /// Gap between two cards in pixels
    #[serde(default = "default_card_gap")]
    pub card_gap_px: f64,
    /// Duration of the paging animation (0 = instant)
    #[serde(default = "default_page_animation_ms")]
    pub page_animation_ms: u64,
    /// Easing used by the paging animation
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            velocity_px_per_frame: default_velocity(),
            frame_rate: default_frame_rate(),
            page_step_px: default_page_step(),
            card_width_px: default_card_width(),
            card_gap_px: default_card_gap(),
            page_animation_ms: default_page_animation_ms(),
            easing: EasingType::default(),
        }
    }
}

impl CarouselConfig {
    /// Horizontal distance from the start of one card to the start of the next
    pub fn card_pitch(&self) -> f64 {
        self.card_width_px + self.card_gap_px
    }

    /// Reject values that would stall or corrupt the carousel offset
    pub fn validate(&self) -> crate::Result<()> {
        let positive = [
            ("velocity_px_per_frame", self.velocity_px_per_frame),
            ("page_step_px", self.page_step_px),
            ("card_width_px", self.card_width_px),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(crate::Error::Config(format!(
                    "carousel.{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if !self.card_gap_px.is_finite() || self.card_gap_px < 0.0 {
            return Err(crate::Error::Config(format!(
                "carousel.card_gap_px must not be negative, got {}",
                self.card_gap_px
            )));
        }
        if self.frame_rate == 0 {
            return Err(crate::Error::Config(
                "carousel.frame_rate must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle poll interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Terminal columns occupied by one card
    #[serde(default = "default_card_columns")]
    pub card_columns: u16,
    /// Number of features shown on a card
    #[serde(default = "default_card_features")]
    pub card_features: usize,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            card_columns: default_card_columns(),
            card_features: default_card_features(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "indigo-night", "nord")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accepts either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(
                    "a string (theme name) or a map with 'name' and optional 'colors'",
                )
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "indigo-night".to_string()
}

/// Optional color overrides, each a hex string ("#6366f1" or "6366f1")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Primary background
    pub bg0: Option<String>,
    /// Card background
    pub bg1: Option<String>,
    /// Status bar background
    pub bg2: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Secondary foreground
    pub fg1: Option<String>,
    /// Accent color (active category, borders)
    pub accent: Option<String>,
    /// Focused card background
    pub selection: Option<String>,
    /// Tag chip color
    pub tag: Option<String>,
    /// Price color
    pub price: Option<String>,
    /// Wishlist heart color
    pub wishlist: Option<String>,
    /// Error color
    pub error: Option<String>,
    /// Success color
    pub success: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "<C-j>" (Ctrl+j), "<S-Tab>", "<CR>" (Enter), "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Select the next category
    #[serde(default = "default_key_next_category")]
    pub next_category: String,
    /// Select the previous category
    #[serde(default = "default_key_prev_category")]
    pub prev_category: String,
    /// Select the next sub-category
    #[serde(default = "default_key_next_sub_category")]
    pub next_sub_category: String,
    /// Select the previous sub-category
    #[serde(default = "default_key_prev_sub_category")]
    pub prev_sub_category: String,
    /// Go back to the category overview
    #[serde(default = "default_key_clear_sub_category")]
    pub clear_sub_category: String,
    /// Page the carousel left
    #[serde(default = "default_key_page_left")]
    pub page_left: String,
    /// Page the carousel right
    #[serde(default = "default_key_page_right")]
    pub page_right: String,
    /// Pause or resume auto-scrolling
    #[serde(default = "default_key_toggle_pause")]
    pub toggle_pause: String,
    /// Enroll in the focused course
    #[serde(default = "default_key_enroll")]
    pub enroll: String,
    /// Add or remove the focused course from the wishlist
    #[serde(default = "default_key_toggle_wishlist")]
    pub toggle_wishlist: String,
    /// Switch label language
    #[serde(default = "default_key_toggle_locale")]
    pub toggle_locale: String,
    /// Show the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next_category: default_key_next_category(),
            prev_category: default_key_prev_category(),
            next_sub_category: default_key_next_sub_category(),
            prev_sub_category: default_key_prev_sub_category(),
            clear_sub_category: default_key_clear_sub_category(),
            page_left: default_key_page_left(),
            page_right: default_key_page_right(),
            toggle_pause: default_key_toggle_pause(),
            enroll: default_key_enroll(),
            toggle_wishlist: default_key_toggle_wishlist(),
            toggle_locale: default_key_toggle_locale(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_next_category() -> String { "j".to_string() }
fn default_key_prev_category() -> String { "k".to_string() }
fn default_key_next_sub_category() -> String { "n".to_string() }
fn default_key_prev_sub_category() -> String { "N".to_string() }
fn default_key_clear_sub_category() -> String { "x".to_string() }
fn default_key_page_left() -> String { "h".to_string() }
fn default_key_page_right() -> String { "l".to_string() }
fn default_key_toggle_pause() -> String { "<Space>".to_string() }
fn default_key_enroll() -> String { "<CR>".to_string() }
fn default_key_toggle_wishlist() -> String { "w".to_string() }
fn default_key_toggle_locale() -> String { "t".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_log_level() -> String {
    "info".to_string()
}

fn default_category() -> String {
    "English Version".to_string()
}

fn default_velocity() -> f64 {
    0.8
}

fn default_frame_rate() -> u32 {
    60
}

fn default_page_step() -> f64 {
    350.0
}

fn default_card_width() -> f64 {
    350.0
}

fn default_card_gap() -> f64 {
    24.0
}

fn default_page_animation_ms() -> u64 {
    300
}

fn default_tick_rate() -> u64 {
    100
}

fn default_card_columns() -> u16 {
    36
}

fn default_card_features() -> usize {
    3
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, falling back to defaults if it is missing
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.carousel.validate()?;
        Ok(config)
    }

    /// Serialize configuration to pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/aimcentre/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("aimcentre")
            .join("config.toml")
    }

    /// Log file path with tilde expansion, if one is configured
    pub fn log_file(&self) -> Option<PathBuf> {
        self.general.log_file.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_carousel_config() {
        let config = CarouselConfig::default();
        assert!((config.velocity_px_per_frame - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.frame_rate, 60);
        assert!((config.page_step_px - 350.0).abs() < f64::EPSILON);
        assert_eq!(config.easing, EasingType::Cubic);
        assert!((config.card_pitch() - 374.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.general.locale, Locale::En);
        assert_eq!(config.general.default_category, "English Version");
        assert_eq!(config.keymap.quit, "q");
        assert_eq!(config.ui.theme.name, "indigo-night");
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml(
            r#"
            [general]
            locale = "bn"

            [carousel]
            velocity_px_per_frame = 2.0
            easing = "easeout"
            "#,
        )
        .unwrap();
        assert_eq!(config.general.locale, Locale::Bn);
        assert!((config.carousel.velocity_px_per_frame - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.carousel.easing, EasingType::EaseOut);
        assert_eq!(config.carousel.frame_rate, 60);
    }

    #[test]
    fn test_theme_as_string_or_table() {
        let config = AppConfig::from_toml("[ui]\ntheme = \"nord\"\n").unwrap();
        assert_eq!(config.ui.theme.name, "nord");

        let config = AppConfig::from_toml(
            "[ui.theme]\nname = \"dracula\"\n[ui.theme.colors]\naccent = \"#ff0000\"\n",
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[carousel]\nframe_rate = \"fast\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_non_finite_motion_is_rejected() {
        for text in [
            "[carousel]\nvelocity_px_per_frame = nan",
            "[carousel]\npage_step_px = inf",
            "[carousel]\nvelocity_px_per_frame = -1.0",
            "[carousel]\ncard_width_px = 0.0",
            "[carousel]\ncard_gap_px = -374.0",
            "[carousel]\nframe_rate = 0",
        ] {
            let err = AppConfig::from_toml(text).unwrap_err();
            assert!(matches!(err, crate::Error::Config(_)), "{text}");
        }
        assert!(AppConfig::from_toml("[carousel]\ncard_gap_px = 0.0").is_ok());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let text = AppConfig::default().to_toml().unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.carousel.page_animation_ms, 300);
    }
}
