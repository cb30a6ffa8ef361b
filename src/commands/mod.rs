//! Command implementations for the taskpad CLI.
//!
//! Each command takes the store (and where relevant the user config),
//! performs its one operation, and returns a result struct that renders
//! either as JSON or as human-readable text.
//!
//! Validation lives here, not in the store: empty titles and malformed
//! dates are rejected before the store is touched.

use crate::config::TaskpadConfig;
use crate::models::{NewTodo, Priority, Tag, Todo, TodoFilters};
use crate::storage::TodoStore;
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

/// Command results that can be serialized to JSON or formatted for humans.
pub trait CommandResult {
    /// Serialize to JSON string.
    fn to_json(&self) -> String;

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

fn json_of<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

/// One todo rendered as a summary line: checkbox, id, markers, title.
fn summary_line(todo: &Todo) -> String {
    let checkbox = if todo.completed { "[x]" } else { "[ ]" };
    let mut line = format!(
        "{} {} {} {} {} {}  {}",
        checkbox,
        todo.id,
        todo.priority.emoji(),
        todo.priority,
        todo.tag.emoji(),
        todo.tag,
        todo.title
    );
    if let Some(deadline) = todo.deadline {
        line.push_str(&format!(" (due {})", deadline.format("%Y-%m-%d")));
    }
    line
}

/// One todo rendered in full for `show`.
fn detail_block(todo: &Todo) -> String {
    let mut out = format!(
        "{}  {}\n  Status:    {}\n  Priority:  {} {}\n  Tag:       {} {}\n  Created:   {}",
        todo.id,
        todo.title,
        if todo.completed { "completed" } else { "pending" },
        todo.priority.emoji(),
        todo.priority,
        todo.tag.emoji(),
        todo.tag,
        todo.created_at.format("%Y-%m-%d %H:%M"),
    );
    if !todo.description.is_empty() {
        out.push_str(&format!("\n  Notes:     {}", todo.description));
    }
    if let Some(deadline) = todo.deadline {
        out.push_str(&format!("\n  Deadline:  📅 {}", deadline.format("%Y-%m-%d")));
    }
    if let Some(reminder) = todo.reminder {
        out.push_str(&format!(
            "\n  Reminder:  ⏰ {}",
            reminder.format("%Y-%m-%d %H:%M")
        ));
    }
    out
}

// === init ===

#[derive(Debug, Serialize)]
pub struct InitResult {
    pub initialized: bool,
    pub location: String,
}

impl CommandResult for InitResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        if self.initialized {
            format!("Initialized todo store at {}", self.location)
        } else {
            format!("Todo store already initialized at {}", self.location)
        }
    }
}

/// Set up the todo collection on first run; no-op afterwards.
pub fn init(store: &mut TodoStore) -> InitResult {
    InitResult {
        initialized: store.initialize_if_empty(),
        location: store.location(),
    }
}

// === add ===

/// Arguments for `tp add`, straight from the CLI.
#[derive(Debug, Default)]
pub struct AddArgs {
    pub title: String,
    pub description: String,
    pub priority: Option<Priority>,
    pub tag: Option<Tag>,
    pub deadline: Option<String>,
    pub reminder: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddResult {
    #[serde(flatten)]
    pub todo: Todo,
}

impl CommandResult for AddResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        format!("Created todo {}: \"{}\"", self.todo.id, self.todo.title)
    }
}

/// Create a todo. The title must be non-empty after trimming; priority
/// and tag fall back to config defaults, then to medium/personal.
pub fn add(store: &mut TodoStore, config: &TaskpadConfig, args: AddArgs) -> Result<AddResult> {
    if args.title.trim().is_empty() {
        return Err(Error::InvalidInput("title must not be empty".to_string()));
    }

    let todo = store.add(NewTodo {
        title: args.title,
        description: args.description,
        priority: args
            .priority
            .or(config.default_priority)
            .unwrap_or_default(),
        tag: args.tag.or(config.default_tag).unwrap_or_default(),
        deadline: args.deadline.as_deref().map(parse_deadline).transpose()?,
        reminder: args.reminder.as_deref().map(parse_reminder).transpose()?,
    });

    Ok(AddResult { todo })
}

/// Parse a date-only deadline (`YYYY-MM-DD`) as midnight UTC.
pub fn parse_deadline(s: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| Error::InvalidDate(format!("expected YYYY-MM-DD, got: {}", s)))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| Error::InvalidDate(s.to_string()))?;
    Ok(midnight.and_utc())
}

/// Parse a reminder with minute precision (`YYYY-MM-DD HH:MM`), UTC.
pub fn parse_reminder(s: &str) -> Result<DateTime<Utc>> {
    let datetime = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .map_err(|_| Error::InvalidDate(format!("expected YYYY-MM-DD HH:MM, got: {}", s)))?;
    Ok(datetime.and_utc())
}

// === list ===

#[derive(Debug, Serialize)]
pub struct ListResult {
    pub todos: Vec<Todo>,
    pub count: usize,
    pub pending: usize,
    pub completed: usize,
}

impl CommandResult for ListResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        if self.todos.is_empty() {
            return "No todos".to_string();
        }
        let mut out = format!(
            "{} todos ({} pending, {} completed)",
            self.count, self.pending, self.completed
        );
        for todo in &self.todos {
            out.push_str(&format!("\n  {}", summary_line(todo)));
        }
        out
    }
}

/// List todos in insertion order, applying the given filters.
pub fn list(store: &TodoStore, filters: TodoFilters) -> ListResult {
    let todos: Vec<Todo> = store
        .get_all()
        .into_iter()
        .filter(|todo| filters.matches(todo))
        .collect();
    let completed = todos.iter().filter(|todo| todo.completed).count();
    ListResult {
        count: todos.len(),
        pending: todos.len() - completed,
        completed,
        todos,
    }
}

// === show ===

#[derive(Debug, Serialize)]
pub struct ShowResult {
    #[serde(flatten)]
    pub todo: Todo,
}

impl CommandResult for ShowResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        detail_block(&self.todo)
    }
}

/// Show one todo; absent ids are an error at the CLI boundary.
pub fn show(store: &TodoStore, id: &str) -> Result<ShowResult> {
    let todo = store
        .get_by_id(id)
        .ok_or_else(|| Error::NotFound(id.to_string()))?;
    Ok(ShowResult { todo })
}

// === toggle ===

#[derive(Debug, Serialize)]
pub struct ToggleResult {
    pub id: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl CommandResult for ToggleResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        match self.completed {
            Some(true) => format!("Marked {} as completed", self.id),
            Some(false) => format!("Marked {} as pending", self.id),
            None => format!("No todo with ID {} (nothing to do)", self.id),
        }
    }
}

/// Toggle completion. An unknown id is a no-op, not an error; the result
/// says whether anything matched.
pub fn toggle(store: &mut TodoStore, id: &str) -> ToggleResult {
    store.toggle(id);
    let completed = store.get_by_id(id).map(|todo| todo.completed);
    ToggleResult {
        id: id.to_string(),
        found: completed.is_some(),
        completed,
    }
}

// === delete ===

#[derive(Debug, Serialize)]
pub struct DeleteResult {
    pub id: String,
    pub deleted: bool,
}

impl CommandResult for DeleteResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        if self.deleted {
            format!("Deleted {}", self.id)
        } else {
            format!("No todo with ID {} (nothing to do)", self.id)
        }
    }
}

/// Delete one todo. Unknown ids are a no-op, not an error.
pub fn delete(store: &mut TodoStore, id: &str) -> DeleteResult {
    let existed = store.get_by_id(id).is_some();
    store.delete_one(id);
    DeleteResult {
        id: id.to_string(),
        deleted: existed,
    }
}

// === clear ===

#[derive(Debug, Serialize)]
pub struct ClearResult {
    pub cleared: bool,
    pub deleted: usize,
}

impl CommandResult for ClearResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        format!("Deleted {} todos", self.deleted)
    }
}

/// Delete every todo, unconditionally.
pub fn clear(store: &mut TodoStore) -> ClearResult {
    let deleted = store.get_all().len();
    store.delete_all();
    ClearResult {
        cleared: true,
        deleted,
    }
}
