//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the remote service's schema but are defined
//! independently of the mock-server crate. Integration tests catch any schema
//! drift between the two. The identifier is opaque: the service may hand out
//! numbers or strings, and the client only ever echoes it back in a path.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a todo item.
///
/// Numbers are kept as `serde_json::Number` so negative and fractional ids
/// print back exactly as the service sent them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(n) => write!(f, "{n}"),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for TodoId {
    fn from(n: u64) -> Self {
        TodoId::Number(n.into())
    }
}

impl From<&str> for TodoId {
    /// A typed id becomes `Number` only when it is the canonical spelling of
    /// that number, so `to_string()` always returns `s` unchanged and the
    /// request path is built from exactly what was typed.
    fn from(s: &str) -> Self {
        match serde_json::from_str::<serde_json::Number>(s) {
            Ok(n) if n.to_string() == s => TodoId::Number(n),
            _ => TodoId::Text(s.to_string()),
        }
    }
}

/// A single todo item as returned by `GET /todos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
}

impl NewTodo {
    /// Validate a raw form value. Returns `None` when the title is blank after
    /// trimming; otherwise the trimmed title is what gets transmitted.
    pub fn from_input(raw: &str) -> Option<Self> {
        let title = raw.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_decode() {
        let items: Vec<TodoItem> = serde_json::from_str(
            r#"[{"id":1,"title":"a","completed":false},{"id":"abc","title":"b","completed":true}]"#,
        )
        .unwrap();
        assert_eq!(items[0].id, TodoId::from(1));
        assert_eq!(items[1].id, TodoId::Text("abc".to_string()));
    }

    #[test]
    fn missing_completed_defaults_to_false() {
        let item: TodoItem = serde_json::from_str(r#"{"id":7,"title":"x"}"#).unwrap();
        assert!(!item.completed);
    }

    #[test]
    fn negative_and_fractional_ids_decode() {
        let items: Vec<TodoItem> = serde_json::from_str(
            r#"[{"id":-1,"title":"a","completed":false},{"id":1.5,"title":"b","completed":false}]"#,
        )
        .unwrap();
        assert_eq!(items[0].id.to_string(), "-1");
        assert_eq!(items[1].id.to_string(), "1.5");
    }

    #[test]
    fn id_from_str_keeps_canonical_numbers_only() {
        assert_eq!(TodoId::from("42"), TodoId::from(42));
        assert_eq!(TodoId::from("-3").to_string(), "-3");
        assert_eq!(TodoId::from("4a"), TodoId::Text("4a".to_string()));
        assert_eq!(TodoId::from("007"), TodoId::Text("007".to_string()));
        assert_eq!(TodoId::from("+5"), TodoId::Text("+5".to_string()));
        assert_eq!(TodoId::from(" 7"), TodoId::Text(" 7".to_string()));
    }

    #[test]
    fn printed_ids_address_the_same_path_when_typed_back() {
        let api = crate::api::TodoApi::new("");
        let items: Vec<TodoItem> = serde_json::from_str(
            r#"[{"id":"007","title":"a"},{"id":"+5","title":"b"},{"id":7,"title":"c"},
                {"id":-1,"title":"d"},{"id":1.5,"title":"e"},{"id":"x y","title":"f"}]"#,
        )
        .unwrap();
        for item in items {
            let typed = TodoId::from(item.id.to_string().as_str());
            assert_eq!(
                api.build_delete_todo(&typed).path,
                api.build_delete_todo(&item.id).path,
                "served id {:?}",
                item.id
            );
            assert_eq!(
                api.build_complete_todo(&typed).path,
                api.build_complete_todo(&item.id).path
            );
        }
    }

    #[test]
    fn blank_input_is_rejected() {
        assert!(NewTodo::from_input("").is_none());
        assert!(NewTodo::from_input("   \t\n").is_none());
    }

    #[test]
    fn input_is_trimmed() {
        let todo = NewTodo::from_input("  Buy milk ").unwrap();
        assert_eq!(todo.title, "Buy milk");
    }
}
