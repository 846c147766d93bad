//! Migration configuration.
//!
//! Defaults reproduce the original one-off run. A JSON file can override any
//! field; it is read from `--config` when given, otherwise from
//! `<config dir>/learning-migrate/config.json` when that file exists.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::icons::DEFAULT_ICONS;

const APP_NAME: &str = "learning-migrate";
const CONFIG_FILE: &str = "config.json";

/// File migrated when no target is configured.
pub const DEFAULT_TARGET: &str = "src/data/learning-content.ts";

/// Body text of every synthesized section.
pub const PLACEHOLDER_CONTENT: &str = "This is the content for the second session. It will be expanded with relevant information for each topic.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MigrationConfig {
    /// File read and rewritten in place.
    pub target: PathBuf,
    /// Name of the exported array constant.
    pub export_name: String,
    /// Element type named in the export's annotation.
    pub type_name: String,
    /// Bare identifiers allowed as icon values.
    pub icons: Vec<String>,
    pub session: SessionTemplate,
    pub restore_templates: TemplateRestore,
    /// Write through a temporary file and rename it over the target.
    pub atomic_write: bool,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::from(DEFAULT_TARGET),
            export_name: "learningContent".to_string(),
            type_name: "LearningTopic".to_string(),
            icons: DEFAULT_ICONS.iter().map(|s| s.to_string()).collect(),
            session: SessionTemplate::default(),
            restore_templates: TemplateRestore::default(),
            atomic_write: true,
        }
    }
}

/// Shape of the session appended to single-session topics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionTemplate {
    /// Minutes of the synthesized section, added to the topic total.
    pub time_increment: u32,
    pub placeholder_content: String,
}

impl Default for SessionTemplate {
    fn default() -> Self {
        Self {
            time_increment: 15,
            placeholder_content: PLACEHOLDER_CONTENT.to_string(),
        }
    }
}

/// Which string values are written back as backtick templates.
///
/// - `Placeholder`: only the synthesized placeholder body
/// - `Multiline`: the placeholder and every value containing a line break
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TemplateRestore {
    #[default]
    Placeholder,
    Multiline,
}

impl MigrationConfig {
    /// Load configuration from `explicit`, or from the user's config
    /// directory when no path is given. A missing default file yields the
    /// defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}

fn default_config_path() -> Option<PathBuf> {
    let mut path = config_dir()?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Some(path)
}
