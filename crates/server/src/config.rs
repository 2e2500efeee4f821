use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;

static FLAGS: OnceLock<FeatureFlags> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Request body cap applied when `MAX_POST_BYTES` is unset or unparseable.
pub const DEFAULT_MAX_POST_BYTES: usize = 64 * 1024;

/// Parse the `[features]` table of a config file. Unparseable input falls
/// back to all flags off.
pub fn parse_feature_flags(contents: &str) -> FeatureFlags {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config.features,
        Err(e) => {
            tracing::warn!(error = %e, path = CONFIG_PATH, "failed to parse config, defaulting all flags off");
            FeatureFlags::default()
        }
    }
}

/// Read `config.toml`, parse feature flags, and store them in the global
/// `OnceLock`. Only the first call has effect.
pub fn load_feature_flags() {
    FLAGS.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let flags = parse_feature_flags(&contents);
            tracing::info!(?flags, "feature flags loaded");
            flags
        }
        Err(e) => {
            tracing::warn!(error = %e, path = CONFIG_PATH, "config not found, defaulting all flags off");
            FeatureFlags::default()
        }
    });
}

/// Get the loaded feature flags. Returns all-false defaults if
/// `load_feature_flags()` hasn't been called yet.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags {
        seed_posts: false,
        docs: false,
    };
    FLAGS.get().unwrap_or(&DEFAULT)
}

/// Maximum accepted request body size, from `MAX_POST_BYTES`.
pub fn max_post_bytes() -> usize {
    let _ = dotenvy::dotenv();
    parse_max_post_bytes(std::env::var("MAX_POST_BYTES").ok().as_deref())
}

fn parse_max_post_bytes(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_MAX_POST_BYTES)
}
