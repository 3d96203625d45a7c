//! Repository contracts, the sole persistence-facing boundary.
//!
//! # Design
//! Any backing store qualifies as long as identifier allocation is
//! unique. `get` returns an owned snapshot, never a live reference, so
//! representation code cannot corrupt persisted state by mutating what
//! it was handed. Updates go through a caller-supplied mutator instead
//! of per-field setters: the repository loads a fresh copy, applies the
//! mutator, persists the result, and refreshes `updated_at`, and it
//! must make that load-mutate-save sequence appear atomic per id.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{CreateTodo, Tenant, TenantId, Todo, TodoId};

/// Caller-supplied transformation applied to a freshly loaded todo
/// before it is persisted. The mutator never sees a stale copy.
pub type TodoMutator = Box<dyn FnOnce(&mut Todo) + Send>;

/// Read-only access to tenants. There is deliberately no write surface;
/// tenant provisioning happens outside this API.
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// All tenants. An empty store yields an empty vec, not an error.
    async fn get_all(&self) -> Result<Vec<Tenant>>;

    /// Snapshot of one tenant. `Error::NotFound` when the id is absent.
    async fn get(&self, id: TenantId) -> Result<Tenant>;
}

/// Full CRUD access to todos.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All todos. An empty store yields an empty vec, not an error.
    async fn get_all(&self) -> Result<Vec<Todo>>;

    /// Snapshot of one todo. `Error::NotFound` when the id is absent.
    async fn get(&self, id: TodoId) -> Result<Todo>;

    /// Persists a new todo derived from `input` with a freshly
    /// allocated id and `created_at == updated_at == now`, and returns
    /// the new id.
    async fn create(&self, input: CreateTodo) -> Result<TodoId>;

    /// Loads the todo, applies `mutator`, persists the result, and
    /// strictly advances `updated_at`. Serialized per id with respect
    /// to concurrent `update` / `delete` calls. Returns the persisted
    /// todo. `Error::NotFound` when the id is absent.
    async fn update(&self, id: TodoId, mutator: TodoMutator) -> Result<Todo>;

    /// Removes the todo. Not idempotent: deleting an id twice fails
    /// with `Error::NotFound` the second time.
    async fn delete(&self, id: TodoId) -> Result<()>;
}
