//! Runtime configuration shared by resources and their stores.
//!
//! Defaults suit tests and demos; deployments override them through the environment:
//!
//! | variable | field | default |
//! |----------|-------|---------|
//! | `RESOURCE_MOUNT_PATH` | `mount_path` | `""` (root) |
//! | `RESOURCE_STORE_BUFFER` | `store_buffer` | `32` |

use crate::error::ConfigError;

pub const MOUNT_PATH_VAR: &str = "RESOURCE_MOUNT_PATH";
pub const STORE_BUFFER_VAR: &str = "RESOURCE_STORE_BUFFER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceConfig {
    /// Path prefix of every resource link.
    pub mount_path: String,
    /// Channel capacity of each store actor.
    pub store_buffer: usize,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            mount_path: String::new(),
            store_buffer: 32,
        }
    }
}

impl ResourceConfig {
    /// Defaults overridden by the `RESOURCE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup(MOUNT_PATH_VAR) {
            config.mount_path = path;
        }

        if let Some(raw) = lookup(STORE_BUFFER_VAR) {
            config.store_buffer = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: STORE_BUFFER_VAR,
                        value: raw,
                    })
                }
            };
        }

        Ok(config)
    }
}
