use crate::cli::parse_define;
use crate::config::{BuildTarget, DependencyName, KilnConfig};
use crate::error::{ConfigError, Result};
use kiln_core::OPTIMIZATION_LEVELS;

impl KilnConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(ConfigError::MissingField {
                field: "sources".to_string(),
                hint: "Pass source files (kiln run main.cpp) or list them in kiln.config.json"
                    .to_string(),
            }
            .into());
        }

        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port".to_string(),
                value: "0".to_string(),
                hint: "Use a port between 1 and 65535".to_string(),
            }
            .into());
        }

        if let Some(level) = &self.opt_level {
            if !OPTIMIZATION_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "optLevel".to_string(),
                    value: level.clone(),
                    hint: format!("Use one of {}", OPTIMIZATION_LEVELS.join(", ")),
                }
                .into());
            }
        }

        for define in &self.defines {
            if let Err(reason) = parse_define(define) {
                return Err(ConfigError::InvalidValue {
                    field: "defines".to_string(),
                    value: define.clone(),
                    hint: reason,
                }
                .into());
            }
        }

        if self.target == BuildTarget::Browser
            && self.dependencies.contains(&DependencyName::Networking)
        {
            return Err(ConfigError::InvalidValue {
                field: "dependencies".to_string(),
                value: "networking".to_string(),
                hint: "Networking is only available for the native target".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
