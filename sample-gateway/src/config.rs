//! Runtime settings for the gateway.
//!
//! Built once at startup from the environment. Named configuration
//! values are exposed to handlers through key lookup.

use std::collections::HashMap;
use std::env;

/// Address used when `SAMPLE_LISTEN_ADDR` is not set.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Gateway settings and named configuration values.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Address the HTTP server binds to.
    pub listen_addr: String,
    values: HashMap<String, String>,
}

impl Settings {
    /// Build settings from the environment.
    ///
    /// Reads `SAMPLE_LISTEN_ADDR`, `SAMPLE_HELLO` and `SAMPLE_FOO`,
    /// falling back to defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let mut values = HashMap::new();
        values.insert(
            "hello".to_owned(),
            env::var("SAMPLE_HELLO").unwrap_or_else(|_| "Hello World!".to_owned()),
        );
        values.insert(
            "foo".to_owned(),
            env::var("SAMPLE_FOO").unwrap_or_else(|_| "bar".to_owned()),
        );
        Self {
            listen_addr: env::var("SAMPLE_LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_owned()),
            values,
        }
    }

    /// Build settings over an explicit value map, with the default
    /// listen address.
    #[must_use]
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_owned(),
            values,
        }
    }

    /// Look up a named configuration value. Returns `None` for keys
    /// that were never loaded.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}
