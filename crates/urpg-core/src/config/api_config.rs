//! API boundary configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix stripped from request paths before routing. Default: `/`.
    pub base_path: Option<String>,
    /// Pretty-print JSON bodies. Default: false.
    pub pretty_json: Option<bool>,
}

impl ApiConfig {
    pub fn effective_base_path(&self) -> &str {
        self.base_path.as_deref().unwrap_or("/")
    }

    pub fn effective_pretty_json(&self) -> bool {
        self.pretty_json.unwrap_or(false)
    }
}
