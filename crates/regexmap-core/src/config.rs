//! Configuration file loading for regexmap.
//!
//! Reads `regexmap.json` and provides typed access to the generator settings.
//! Falls back to defaults when the config file is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "regexmap.json";

/// Placeholder in [`GeneratorConfig::command`] replaced by the dictionary path.
pub const DICT_PLACEHOLDER: &str = "{dict}";

/// Settings for invoking the conversion engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Location of the conversion dictionary.
    #[serde(default = "default_dict_path")]
    pub dict_path: String,
    /// Shell command run once per letter; the letter arrives on stdin.
    #[serde(default = "default_command")]
    pub command: String,
}

fn default_dict_path() -> String {
    "/usr/share/cmigemo/utf-8/migemo-dict".to_string()
}
fn default_command() -> String {
    format!("cmigemo -q --emacs -d {DICT_PLACEHOLDER}")
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            dict_path: default_dict_path(),
            command: default_command(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from `path`.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Apply overrides from flags or environment. `None` keeps the file value.
    pub fn with_overrides(mut self, dict_path: Option<String>, command: Option<String>) -> Self {
        if let Some(d) = dict_path {
            self.dict_path = d;
        }
        if let Some(c) = command {
            self.command = c;
        }
        self
    }

    /// The command line with the dictionary path substituted in.
    pub fn resolved_command(&self) -> String {
        self.command.replace(DICT_PLACEHOLDER, &self.dict_path)
    }
}
