// ABOUTME: Serde data models for the Todoist sync state
// ABOUTME: Strict parsing of projects, items, and due descriptors

use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::fmt;

/// Identifier of a project or item. The sync API has sent both numbers and
/// strings over time, so both are accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoistId(String);

impl TodoistId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoistId {
    fn from(id: &str) -> Self {
        TodoistId(id.to_string())
    }
}

impl From<i64> for TodoistId {
    fn from(id: i64) -> Self {
        TodoistId(id.to_string())
    }
}

impl<'de> Deserialize<'de> for TodoistId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        match RawId::deserialize(deserializer) {
            Ok(RawId::Number(n)) => Ok(TodoistId(n.to_string())),
            Ok(RawId::Text(s)) => Ok(TodoistId(s)),
            Err(_) => Err(de::Error::custom("expected an integer or string id")),
        }
    }
}

/// Accepts `0`/`1` as well as `false`/`true`.
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Int(i64),
    }

    match RawFlag::deserialize(deserializer) {
        Ok(RawFlag::Bool(b)) => Ok(b),
        Ok(RawFlag::Int(0)) => Ok(false),
        Ok(RawFlag::Int(1)) => Ok(true),
        Ok(RawFlag::Int(n)) => Err(de::Error::custom(format!("flag out of range: {}", n))),
        Err(_) => Err(de::Error::custom("expected 0, 1, true or false")),
    }
}

/// The key must be present; `null` is the only way to say "none".
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

#[derive(Debug, Clone, Deserialize)]
pub struct TodoistDue {
    pub date: String,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub string: String,
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub is_recurring: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TodoistItem {
    pub id: TodoistId,
    pub project_id: TodoistId,
    pub content: String,
    #[serde(deserialize_with = "nullable")]
    pub due: Option<TodoistDue>,
    #[serde(deserialize_with = "nullable")]
    pub parent_id: Option<TodoistId>,
    #[serde(deserialize_with = "flag")]
    pub in_history: bool,
    #[serde(deserialize_with = "flag")]
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TodoistProject {
    pub id: TodoistId,
    /// Parsed but never used to nest projects; every project is a root.
    #[serde(default)]
    pub parent_id: Option<TodoistId>,
    pub name: String,
}

/// The flat state returned by a full sync.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoistState {
    pub projects: Vec<TodoistProject>,
    pub items: Vec<TodoistItem>,
}
