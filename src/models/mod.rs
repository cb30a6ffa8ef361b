//! Data models for taskpad entities.
//!
//! This module defines the core data structures:
//! - `Todo` - A task record with priority, tag, and optional dates
//! - `NewTodo` - The fields supplied when creating a todo
//! - `TodoFilters` - Optional filters applied when listing todos

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority of a todo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Parse from string, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Marker used in human-readable output.
    pub fn emoji(&self) -> &'static str {
        match self {
            Priority::Low => "🟢",
            Priority::Medium => "🟡",
            Priority::High => "🔴",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category tag of a todo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Work,
    #[default]
    Personal,
}

impl Tag {
    /// Parse from string, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "work" => Some(Tag::Work),
            "personal" => Some(Tag::Personal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Work => "work",
            Tag::Personal => "personal",
        }
    }

    /// Marker used in human-readable output.
    pub fn emoji(&self) -> &'static str {
        match self {
            Tag::Work => "💼",
            Tag::Personal => "🏠",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A task record tracked by taskpad.
///
/// Serialized with camelCase field names; `deadline` and `reminder` are
/// omitted entirely when unset so that their absence reads back as `None`
/// rather than an epoch default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier (e.g., "td-a1b2c3d4")
    pub id: String,

    /// Todo title, trimmed, never empty
    pub title: String,

    /// Detailed description, may be empty
    #[serde(default)]
    pub description: String,

    /// Priority level
    #[serde(default)]
    pub priority: Priority,

    /// Category tag
    #[serde(default)]
    pub tag: Tag,

    /// Whether the todo has been completed
    #[serde(default)]
    pub completed: bool,

    /// Creation timestamp, set once, never updated
    pub created_at: DateTime<Utc>,

    /// Due date (date precision)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,

    /// Reminder time (date and time precision)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder: Option<DateTime<Utc>>,
}

/// Fields supplied when creating a todo.
///
/// The store trims `title` and `description` and stamps the remaining
/// fields (`id`, `created_at`, `completed`) itself.
#[derive(Debug, Clone, Default)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub tag: Tag,
    pub deadline: Option<DateTime<Utc>>,
    pub reminder: Option<DateTime<Utc>>,
}

/// Optional filters applied when listing todos.
#[derive(Debug, Clone, Copy, Default)]
pub struct TodoFilters {
    pub tag: Option<Tag>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
}

impl TodoFilters {
    /// Whether a todo passes every set filter.
    pub fn matches(&self, todo: &Todo) -> bool {
        if let Some(tag) = self.tag {
            if todo.tag != tag {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if todo.priority != priority {
                return false;
            }
        }
        if let Some(completed) = self.completed {
            if todo.completed != completed {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Todo {
        Todo {
            id: "td-a1b2c3d4".to_string(),
            title: "Buy milk".to_string(),
            description: String::new(),
            priority: Priority::High,
            tag: Tag::Personal,
            completed: false,
            created_at: Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap(),
            deadline: None,
            reminder: None,
        }
    }

    #[test]
    fn serializes_camel_case_and_omits_unset_dates() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"priority\":\"high\""));
        assert!(json.contains("\"tag\":\"personal\""));
        assert!(!json.contains("deadline"));
        assert!(!json.contains("reminder"));
    }

    #[test]
    fn absent_optional_fields_deserialize_to_none() {
        let json = r#"{"id":"td-1","title":"x","description":"","priority":"low",
                       "tag":"work","completed":true,"createdAt":"2026-08-30T12:00:00Z"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.deadline, None);
        assert_eq!(todo.reminder, None);
        assert!(todo.completed);
    }

    #[test]
    fn timestamps_round_trip_exactly() {
        let mut todo = sample();
        todo.deadline = Some(Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap());
        todo.reminder = Some(Utc.with_ymd_and_hms(2026, 9, 1, 9, 30, 0).unwrap());
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn priority_and_tag_parse() {
        assert_eq!(Priority::parse("HIGH"), Some(Priority::High));
        assert_eq!(Priority::parse("bogus"), None);
        assert_eq!(Tag::parse("Work"), Some(Tag::Work));
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(Tag::default(), Tag::Personal);
    }

    #[test]
    fn filters_match_each_dimension() {
        let todo = sample();
        let none = TodoFilters::default();
        assert!(none.matches(&todo));

        let by_tag = TodoFilters {
            tag: Some(Tag::Work),
            ..Default::default()
        };
        assert!(!by_tag.matches(&todo));

        let by_state = TodoFilters {
            completed: Some(false),
            priority: Some(Priority::High),
            ..Default::default()
        };
        assert!(by_state.matches(&todo));
    }
}
