use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Build target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BuildTarget {
    #[default]
    Native,
    Browser,
}

/// Library that can be linked by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DependencyName {
    #[serde(alias = "opengl", alias = "sdl")]
    Graphics,
    #[serde(alias = "asio")]
    Networking,
}
