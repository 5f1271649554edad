//! Mod configuration loader.

use std::path::Path;

use crate::config::ModConfig;
use crate::loaders::{LoadResult, read_file};

/// Loader for the mod configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the mod configuration from a TOML file.
    ///
    /// Missing keys take their defaults, so an empty file yields an unset
    /// `dog_behavior` with stock tunables.
    pub fn load(path: &Path) -> LoadResult<ModConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ModConfig> {
        let config: ModConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dog_core::{DogBehaviorOption, DogConfig};

    #[test]
    fn empty_document_is_unset() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config.dog_behavior, DogBehaviorOption::None);
        assert_eq!(config.tuning, DogConfig::default());
    }

    #[test]
    fn reads_option_and_partial_tuning() {
        let config = ConfigLoader::parse(
            r#"
            dog_behavior = "zora"

            [tuning]
            form_override_radius = 120.0
            "#,
        )
        .unwrap();

        assert_eq!(config.dog_behavior, DogBehaviorOption::Zora);
        assert_eq!(config.tuning.form_override_radius, 120.0);
        assert_eq!(config.tuning.deku_override_radius, 250.0);
    }

    #[test]
    fn unknown_option_name_is_an_error() {
        let err = ConfigLoader::parse(r#"dog_behavior = "fierce_deity""#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
