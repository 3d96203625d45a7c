//! Domain entities for the multi-tenant todo service.
//!
//! # Design
//! Entities are plain records owned by the persistence layer. The
//! transport-facing projections live in `representation` — entities are
//! never serialized to clients directly, so nothing here carries links
//! or other hypermedia concerns. `CreateTodo` is deliberately a separate
//! type from `Todo`: it has no id and no timestamps, so callers cannot
//! forge server-owned fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable integer identifier of a tenant.
pub type TenantId = u64;

/// Stable integer identifier of a todo.
pub type TodoId = u64;

/// An isolated customer context. Read-only through the API surface;
/// tenants are provisioned out of band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    /// Immutable after creation.
    pub id: TenantId,
    /// Short business key (e.g., `ACME`). Uniqueness is enforced by the
    /// persistence provider, not here.
    pub code: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Immutable after creation.
    pub id: TodoId,
    pub name: String,
    pub completed: bool,
    pub due: DateTime<Utc>,
    /// Set once at creation, never touched again.
    pub created_at: DateTime<Utc>,
    /// Refreshed by the repository on every successful mutation.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a new todo. The repository allocates the id and
/// stamps `created_at` / `updated_at` itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub name: String,
    #[serde(default)]
    pub completed: bool,
    pub due: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_todo_defaults_completed_to_false() {
        let input: CreateTodo =
            serde_json::from_str(r#"{"name":"Buy milk","due":"2026-09-01T12:00:00Z"}"#).unwrap();
        assert_eq!(input.name, "Buy milk");
        assert!(!input.completed);
    }

    #[test]
    fn create_todo_accepts_explicit_completed() {
        let input: CreateTodo = serde_json::from_str(
            r#"{"name":"Done","completed":true,"due":"2026-09-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert!(input.completed);
    }

    #[test]
    fn create_todo_rejects_missing_name() {
        let result: Result<CreateTodo, _> =
            serde_json::from_str(r#"{"completed":true,"due":"2026-09-01T12:00:00Z"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: 7,
            name: "Roundtrip".to_string(),
            completed: true,
            due: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }
}
