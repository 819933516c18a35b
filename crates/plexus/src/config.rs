//! Runtime configuration, loaded once at startup.

use std::path::Path;

use plexus_field::FieldConfig;
use plexus_shared::constants;
use plexus_typing::TypingConfig;
use serde::Deserialize;
use thiserror::Error;

/// Errors while loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration for the engine.
///
/// Every field has a default matching the shipped site, so an empty file
/// (or no file at all) runs the canonical look.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PlexusConfig {
    /// The rotating role strings for the hero line.
    pub roles: Vec<String>,
    /// Frames per second the interval clock targets.
    pub target_fps: u32,
    /// Third-party form-ingestion endpoint URL.
    pub contact_endpoint: String,
    /// How long the "sent" banner stays visible (milliseconds).
    pub banner_ms: u64,
    /// Particle field tuning.
    pub field: FieldConfig,
    /// Typewriter timing.
    pub typing: TypingConfig,
}

impl Default for PlexusConfig {
    fn default() -> Self {
        Self {
            roles: vec![
                "Freelancer".to_string(),
                "Web Scraper".to_string(),
                "Data Analyst".to_string(),
            ],
            target_fps: constants::TICK_RATE,
            contact_endpoint: "https://formspree.io/f/xldopzby".to_string(),
            banner_ms: constants::BANNER_MS,
            field: FieldConfig::default(),
            typing: TypingConfig::default(),
        }
    }
}

impl PlexusConfig {
    /// Loads the configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file cannot be read,
    /// [`ConfigError::Parse`] when it is not valid for the schema.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_the_canonical_look() {
        let config: PlexusConfig = toml::from_str("").expect("empty config");
        assert_eq!(config.roles.len(), 3);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.field.count, 80);
        assert_eq!(config.typing.type_delay_ms, 100);
        assert_eq!(config.banner_ms, 3000);
    }

    #[test]
    fn test_partial_override() {
        let config: PlexusConfig = toml::from_str(
            r#"
            roles = ["Rustacean"]

            [field]
            count = 40
            link_distance = 90.0
            "#,
        )
        .expect("partial config");
        assert_eq!(config.roles, vec!["Rustacean".to_string()]);
        assert_eq!(config.field.count, 40);
        assert!((config.field.link_distance - 90.0).abs() < f32::EPSILON);
        // Untouched fields keep their defaults.
        assert!((config.field.link_max_alpha - 0.35).abs() < f32::EPSILON);
        assert_eq!(config.typing.hold_delay_ms, 900);
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        assert!(toml::from_str::<PlexusConfig>("roles = 3").is_err());
    }
}
