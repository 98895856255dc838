use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::hash::KeyScope;

/// Hard cap on tower height.
pub const MAX_LEVEL_LIMIT: usize = 32;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkipListConfig {
    pub max_level: usize,
    /// Shortest pattern, in bytes, the list accepts or searches for.
    pub prefix_length: usize,
    pub key_scope: KeyScope,
    /// Seed for the level generator. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SkipListConfig {
    fn default() -> Self {
        Self {
            max_level: 16,
            prefix_length: 3,
            key_scope: KeyScope::FullString,
            seed: None,
        }
    }
}

impl SkipListConfig {
    pub fn new(max_level: usize, prefix_length: usize) -> Self {
        Self {
            max_level,
            prefix_length,
            ..Self::default()
        }
    }

    pub fn with_key_scope(mut self, key_scope: KeyScope) -> Self {
        self.key_scope = key_scope;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_level == 0 || self.max_level > MAX_LEVEL_LIMIT {
            return Err(ConfigError::MaxLevel {
                max_level: self.max_level,
                limit: MAX_LEVEL_LIMIT,
            });
        }
        if self.prefix_length == 0 {
            return Err(ConfigError::PrefixLength);
        }
        Ok(())
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SkipListConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use crate::config::{SkipListConfig, MAX_LEVEL_LIMIT};
    use crate::error::ConfigError;
    use crate::hash::KeyScope;

    #[test]
    fn test_default_config() {
        let config = SkipListConfig::default();
        assert_eq!(config.max_level, 16);
        assert_eq!(config.prefix_length, 3);
        assert_eq!(config.key_scope, KeyScope::FullString);
        assert_eq!(config.seed, None);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_bounds() {
        assert_eq!(
            SkipListConfig::new(0, 3).validate(),
            Err(ConfigError::MaxLevel {
                max_level: 0,
                limit: MAX_LEVEL_LIMIT
            })
        );
        assert!(SkipListConfig::new(MAX_LEVEL_LIMIT + 1, 3).validate().is_err());
        assert!(SkipListConfig::new(MAX_LEVEL_LIMIT, 3).validate().is_ok());
        assert_eq!(
            SkipListConfig::new(10, 0).validate(),
            Err(ConfigError::PrefixLength)
        );
        assert!(SkipListConfig::new(1, 1).validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let config =
            SkipListConfig::from_json(r#"{"max_level": 10, "key_scope": "prefix", "seed": 7}"#)
                .unwrap();
        assert_eq!(config.max_level, 10);
        assert_eq!(config.prefix_length, 3);
        assert_eq!(config.key_scope, KeyScope::Prefix);
        assert_eq!(config.seed, Some(7));

        assert_eq!(
            SkipListConfig::from_json(r#"{"prefix_length": 0}"#),
            Err(ConfigError::PrefixLength)
        );
        assert!(matches!(
            SkipListConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
