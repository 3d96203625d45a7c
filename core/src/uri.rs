//! URI factories: from an entity id and a URL-generation capability to
//! an absolute resource URI.
//!
//! # Design
//! Each factory is bound to exactly one named route and holds no state
//! of its own; the [`UrlGenerator`] is injected by the calling context
//! (the active request), which keeps the factories pure and testable
//! with a fake resolver. A lookup of an unregistered route name is a
//! configuration defect and surfaces as `Error::UnknownRoute`.

use crate::error::{Error, Result};
use crate::model::{TenantId, TodoId};
use crate::routes::{name, RouteRegistry};

/// Per-request capability that resolves a named route plus parameters
/// into an absolute URI.
///
/// Implementations must return fully qualified URIs (scheme and
/// authority included) and must fail with [`Error::UnknownRoute`] for a
/// name that was never registered.
pub trait UrlGenerator {
    fn url_for(&self, route: &str, params: &[(&str, String)]) -> Result<String>;
}

/// Standard [`UrlGenerator`]: substitutes `{param}` placeholders in the
/// registered template and prefixes the request-time base URL.
#[derive(Debug, Clone)]
pub struct BaseUrlGenerator<'a> {
    base: String,
    registry: &'a RouteRegistry,
}

impl<'a> BaseUrlGenerator<'a> {
    /// `base` is the scheme and authority of the current request, e.g.
    /// `http://localhost:3000`. A trailing slash is tolerated.
    pub fn new(base: &str, registry: &'a RouteRegistry) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            registry,
        }
    }
}

impl UrlGenerator for BaseUrlGenerator<'_> {
    fn url_for(&self, route: &str, params: &[(&str, String)]) -> Result<String> {
        let template = self.registry.template(route).ok_or_else(|| Error::UnknownRoute {
            name: route.to_string(),
        })?;
        let mut path = template.to_string();
        for (key, value) in params {
            path = path.replace(&format!("{{{key}}}"), value);
        }
        Ok(format!("{}{path}", self.base))
    }
}

/// Absolute URI of a single tenant.
pub fn tenant_uri(id: TenantId, generator: &dyn UrlGenerator) -> Result<String> {
    generator.url_for(name::TENANT, &[("id", id.to_string())])
}

/// Absolute URI of a single todo.
pub fn todo_uri(id: TodoId, generator: &dyn UrlGenerator) -> Result<String> {
    generator.url_for(name::TODO, &[("id", id.to_string())])
}

/// Absolute URI of the API root. Takes no id; anchors the root
/// representation's `self` link and the domain links hanging off it.
pub fn home_uri(generator: &dyn UrlGenerator) -> Result<String> {
    generator.url_for(name::HOME, &[])
}

/// Absolute URI of the tenant collection.
pub fn tenants_uri(generator: &dyn UrlGenerator) -> Result<String> {
    generator.url_for(name::TENANT_COLLECTION, &[])
}

/// Absolute URI of the todo collection.
pub fn todos_uri(generator: &dyn UrlGenerator) -> Result<String> {
    generator.url_for(name::TODO_COLLECTION, &[])
}

/// Absolute URI of the search endpoint.
pub fn search_uri(generator: &dyn UrlGenerator) -> Result<String> {
    generator.url_for(name::SEARCH, &[])
}

/// Absolute URI of the todo submission target.
pub fn submit_uri(generator: &dyn UrlGenerator) -> Result<String> {
    generator.url_for(name::SUBMIT, &[])
}
