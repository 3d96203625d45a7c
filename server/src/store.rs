//! In-memory persistence provider for the core repository contracts.
//!
//! # Design
//! Backed by `tokio::sync::RwLock<HashMap>` with an `AtomicU64` id
//! allocator, so ids are unique and monotonic. `update` holds the write
//! lock across the whole load-mutate-save sequence, which serializes
//! concurrent updates per id; a mutator always runs against a freshly
//! loaded copy and no concurrent update is silently lost. `updated_at`
//! strictly advances even when the clock does not, so callers can rely
//! on it as a change marker.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use todolinks_core::error::{Error, Result};
use todolinks_core::model::{CreateTodo, Tenant, TenantId, Todo, TodoId};
use todolinks_core::repository::{TenantRepository, TodoMutator, TodoRepository};

/// Strictly later than `previous`, preferring the real clock.
fn advance(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::nanoseconds(1)
    }
}

/// Tenant store seeded at construction. Tenants have no write surface,
/// so there is nothing else to it.
#[derive(Debug, Default)]
pub struct InMemoryTenantStore {
    tenants: HashMap<TenantId, Tenant>,
}

impl InMemoryTenantStore {
    pub fn with_tenants(tenants: Vec<Tenant>) -> Self {
        Self {
            tenants: tenants.into_iter().map(|t| (t.id, t)).collect(),
        }
    }
}

#[async_trait]
impl TenantRepository for InMemoryTenantStore {
    async fn get_all(&self) -> Result<Vec<Tenant>> {
        let mut tenants: Vec<Tenant> = self.tenants.values().cloned().collect();
        tenants.sort_by_key(|t| t.id);
        Ok(tenants)
    }

    async fn get(&self, id: TenantId) -> Result<Tenant> {
        self.tenants
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::not_found("tenant", id))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryTodoStore {
    todos: RwLock<HashMap<TodoId, Todo>>,
    next_id: AtomicU64,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoStore {
    async fn get_all(&self) -> Result<Vec<Todo>> {
        let todos = self.todos.read().await;
        let mut todos: Vec<Todo> = todos.values().cloned().collect();
        todos.sort_by_key(|t| t.id);
        Ok(todos)
    }

    async fn get(&self, id: TodoId) -> Result<Todo> {
        self.todos
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::not_found("todo", id))
    }

    async fn create(&self, input: CreateTodo) -> Result<TodoId> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let now = Utc::now();
        let todo = Todo {
            id,
            name: input.name,
            completed: input.completed,
            due: input.due,
            created_at: now,
            updated_at: now,
        };
        self.todos.write().await.insert(id, todo);
        Ok(id)
    }

    async fn update(&self, id: TodoId, mutator: TodoMutator) -> Result<Todo> {
        // Write lock held across load-mutate-save: updates on the same
        // id cannot interleave, and the mutator sees a fresh copy.
        let mut todos = self.todos.write().await;
        let current = todos.get(&id).ok_or_else(|| Error::not_found("todo", id))?;
        let created_at = current.created_at;
        let previous_updated_at = current.updated_at;
        let mut todo = current.clone();
        mutator(&mut todo);
        // Server-owned fields win over whatever the mutator did to them.
        todo.id = id;
        todo.created_at = created_at;
        todo.updated_at = advance(previous_updated_at);
        todos.insert(id, todo.clone());
        Ok(todo)
    }

    async fn delete(&self, id: TodoId) -> Result<()> {
        // Deliberately not idempotent: a second delete reports NotFound.
        self.todos
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found("todo", id))
    }
}
