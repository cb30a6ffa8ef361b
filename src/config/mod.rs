//! User configuration for taskpad.
//!
//! Preferences live in a single KDL file at
//! `~/.config/taskpad/config.kdl`:
//!
//! ```kdl
//! output-format "human"      // or "json"
//! default-priority "medium"  // low | medium | high
//! default-tag "personal"     // work | personal
//! ```
//!
//! Precedence for every setting: CLI flag > config file > built-in
//! default. A missing or unparseable file resolves to defaults; config
//! problems never abort a command.

use crate::models::{Priority, Tag};
use kdl::KdlDocument;
use std::path::PathBuf;
use tracing::warn;

/// Output format preference for CLI commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON output (default, machine-readable)
    #[default]
    Json,
    /// Human-readable output
    Human,
}

impl OutputFormat {
    /// Parse from string, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "human" => Some(OutputFormat::Human),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Human => "human",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User preferences loaded from config.kdl. Every field is optional;
/// `None` means "use the built-in default".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskpadConfig {
    pub output_format: Option<OutputFormat>,
    pub default_priority: Option<Priority>,
    pub default_tag: Option<Tag>,
}

impl TaskpadConfig {
    /// Parse preferences from a KDL document. Unknown nodes and
    /// unrecognized values are ignored.
    pub fn from_kdl(doc: &KdlDocument) -> Self {
        let mut config = TaskpadConfig::default();

        if let Some(node) = doc.get("output-format") {
            if let Some(entry) = node.entries().first() {
                if let Some(s) = entry.value().as_string() {
                    config.output_format = OutputFormat::parse(s);
                }
            }
        }

        if let Some(node) = doc.get("default-priority") {
            if let Some(entry) = node.entries().first() {
                if let Some(s) = entry.value().as_string() {
                    config.default_priority = Priority::parse(s);
                }
            }
        }

        if let Some(node) = doc.get("default-tag") {
            if let Some(entry) = node.entries().first() {
                if let Some(s) = entry.value().as_string() {
                    config.default_tag = Tag::parse(s);
                }
            }
        }

        config
    }

    /// Load preferences from the user's config file, resolving to
    /// defaults when the file is missing or malformed.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return TaskpadConfig::default();
        };
        let Ok(text) = std::fs::read_to_string(&path) else {
            return TaskpadConfig::default();
        };
        match text.parse::<KdlDocument>() {
            Ok(doc) => TaskpadConfig::from_kdl(&doc),
            Err(e) => {
                warn!("ignoring malformed config at {}: {}", path.display(), e);
                TaskpadConfig::default()
            }
        }
    }
}

/// Location of the user config file: `~/.config/taskpad/config.kdl`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("taskpad").join("config.kdl"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_settings() {
        let doc: KdlDocument = r#"
            output-format "human"
            default-priority "high"
            default-tag "work"
        "#
        .parse()
        .unwrap();
        let config = TaskpadConfig::from_kdl(&doc);
        assert_eq!(config.output_format, Some(OutputFormat::Human));
        assert_eq!(config.default_priority, Some(Priority::High));
        assert_eq!(config.default_tag, Some(Tag::Work));
    }

    #[test]
    fn empty_document_yields_defaults() {
        let doc: KdlDocument = "".parse().unwrap();
        assert_eq!(TaskpadConfig::from_kdl(&doc), TaskpadConfig::default());
    }

    #[test]
    fn unrecognized_values_are_ignored() {
        let doc: KdlDocument = r#"
            output-format "yaml"
            default-priority "urgent"
        "#
        .parse()
        .unwrap();
        let config = TaskpadConfig::from_kdl(&doc);
        assert_eq!(config.output_format, None);
        assert_eq!(config.default_priority, None);
    }

    #[test]
    fn output_format_parse_is_case_insensitive() {
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("Human"), Some(OutputFormat::Human));
        assert_eq!(OutputFormat::parse("invalid"), None);
    }
}
