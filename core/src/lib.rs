//! Hypermedia core for the multi-tenant todo service.
//!
//! # Overview
//! Converts domain entities (tenants, todos) into linked representations:
//! every response carries a `links` array of typed relations instead of
//! bare ids, so clients discover operations and related resources by
//! following links rather than constructing URLs themselves.
//!
//! # Design
//! - `repository` defines the only persistence-facing boundary; any
//!   backing store that honors the contracts plugs in unchanged.
//! - `uri` factories are pure functions of (id, url-generation
//!   capability); the capability is injected per request, so the core
//!   holds no routing state and tests can supply a fake resolver.
//! - `representation` builders recompute links on every call. Route
//!   resolution can depend on request-time context (host, scheme), so
//!   nothing here is cached.
//! - The link-relation vocabulary in `links::rel` is closed: builders
//!   only ever emit relations from that set.

pub mod error;
pub mod links;
pub mod model;
pub mod repository;
pub mod representation;
pub mod routes;
pub mod uri;

pub use error::{Error, Result};
pub use links::{rel, Link};
pub use model::{CreateTodo, Tenant, TenantId, Todo, TodoId};
pub use repository::{TenantRepository, TodoMutator, TodoRepository};
pub use representation::{
    ApiRepresentation, SearchRepresentation, TenantRepresentation, TodoRepresentation,
};
pub use routes::RouteRegistry;
pub use uri::{BaseUrlGenerator, UrlGenerator};
