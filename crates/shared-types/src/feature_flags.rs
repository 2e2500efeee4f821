use serde::{Deserialize, Serialize};

/// Feature flags controlling optional server behaviour.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. Every field defaults to `false` so that a
/// missing or incomplete config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Insert example posts into the store on boot.
    #[serde(default)]
    pub seed_posts: bool,
    /// Serve the OpenAPI reference at `/docs`.
    #[serde(default)]
    pub docs: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.seed_posts);
        assert!(!flags.docs);
    }

    #[test]
    fn deserialize_empty_toml_defaults_all_false() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.features, FeatureFlags::default());
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            docs = true
            "#,
        )
        .unwrap();
        assert!(config.features.docs);
        assert!(!config.features.seed_posts);
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            seed_posts = true
            stripe = true
            "#,
        )
        .unwrap();
        assert!(config.features.seed_posts);
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }
}
