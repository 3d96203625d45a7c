//! Named routes and the process-wide route registry.
//!
//! # Design
//! Route names are the only way URI factories refer to paths; the
//! registry maps each name to its path template exactly once, at
//! startup. After construction the registry is read-only, so it is safe
//! to share across concurrent requests without synchronization.

use std::collections::HashMap;

/// Route name constants. Factories are bound to these, never to raw
/// path strings.
pub mod name {
    /// The API root.
    pub const HOME: &str = "Home";
    /// A single tenant by id.
    pub const TENANT: &str = "Tenant";
    /// The tenant collection.
    pub const TENANT_COLLECTION: &str = "TenantCollection";
    /// A single todo by id.
    pub const TODO: &str = "Todo";
    /// The todo collection.
    pub const TODO_COLLECTION: &str = "TodoCollection";
    /// The search endpoint.
    pub const SEARCH: &str = "Search";
    /// The submission target for new todos.
    pub const SUBMIT: &str = "Submit";
}

/// Fixed mapping of route name to path template, e.g.
/// `"Tenant" -> "/tenant/{id}"`. Built once at startup; read-only after.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    templates: HashMap<&'static str, &'static str>,
}

impl RouteRegistry {
    /// The registry matching the server's mounted routes.
    pub fn standard() -> Self {
        let mut templates = HashMap::new();
        templates.insert(name::HOME, "/");
        templates.insert(name::TENANT, "/tenant/{id}");
        templates.insert(name::TENANT_COLLECTION, "/tenant");
        templates.insert(name::TODO, "/todo/{id}");
        templates.insert(name::TODO_COLLECTION, "/todo");
        templates.insert(name::SEARCH, "/search");
        // Submissions go to the todo collection; the distinct route name
        // keeps the link relation independent of that detail.
        templates.insert(name::SUBMIT, "/todo");
        Self { templates }
    }

    /// Path template for a route name, or `None` if never registered.
    pub fn template(&self, route: &str) -> Option<&'static str> {
        self.templates.get(route).copied()
    }
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
