//! Representation builders: from a domain entity to its link-annotated,
//! externally visible projection.
//!
//! # Design
//! Builders are pure functions of (entity, url-generation capability).
//! Links are recomputed on every call because route resolution can
//! depend on request-time context (host, scheme) that is not known
//! earlier. A builder either returns a fully formed representation or
//! propagates the error; no partial representation is ever produced.
//! Domain fields are copied verbatim, and only relations from the
//! closed vocabulary in [`crate::links::rel`] are emitted.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::links::{rel, Link};
use crate::model::{Tenant, TenantId, Todo, TodoId};
use crate::uri::{
    home_uri, search_uri, submit_uri, tenant_uri, tenants_uri, todo_uri, todos_uri, UrlGenerator,
};

/// A tenant as seen by clients: domain fields plus a `self` link.
/// Tenants carry no domain links; those live on the API root only.
#[derive(Debug, Clone, Serialize)]
pub struct TenantRepresentation {
    pub id: TenantId,
    pub code: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub links: Vec<Link>,
}

impl TenantRepresentation {
    pub fn for_entity(tenant: &Tenant, generator: &dyn UrlGenerator) -> Result<Self> {
        let links = vec![Link::new(rel::SELF, tenant_uri(tenant.id, generator)?)];
        Ok(Self {
            id: tenant.id,
            code: tenant.code.clone(),
            name: tenant.name.clone(),
            description: tenant.description.clone(),
            created_at: tenant.created_at,
            updated_at: tenant.updated_at,
            links,
        })
    }
}

/// A todo as seen by clients: domain fields plus a `self` link.
#[derive(Debug, Clone, Serialize)]
pub struct TodoRepresentation {
    pub id: TodoId,
    pub name: String,
    pub completed: bool,
    pub due: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub links: Vec<Link>,
}

impl TodoRepresentation {
    pub fn for_entity(todo: &Todo, generator: &dyn UrlGenerator) -> Result<Self> {
        let links = vec![Link::new(rel::SELF, todo_uri(todo.id, generator)?)];
        Ok(Self {
            id: todo.id,
            name: todo.name.clone(),
            completed: todo.completed,
            due: todo.due,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
            links,
        })
    }
}

/// The API entry point: a version and the domain links a client needs
/// to discover the rest of the surface.
#[derive(Debug, Clone, Serialize)]
pub struct ApiRepresentation {
    pub version: String,
    pub links: Vec<Link>,
}

impl ApiRepresentation {
    /// Emits exactly the relations `self`, `todos`, `tenants`,
    /// `search`, and `submit`.
    pub fn build(generator: &dyn UrlGenerator) -> Result<Self> {
        let links = vec![
            Link::new(rel::SELF, home_uri(generator)?),
            Link::with_title(rel::TODOS, todos_uri(generator)?, "All todos"),
            Link::with_title(rel::TENANTS, tenants_uri(generator)?, "All tenants"),
            Link::with_title(rel::SEARCH, search_uri(generator)?, "Search todos"),
            Link::with_title(rel::SUBMIT, submit_uri(generator)?, "Submit a new todo"),
        ];
        Ok(Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            links,
        })
    }
}

/// A search result page: the term, the matching todos, and links back
/// to the search endpoint and the submission target.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRepresentation {
    pub term: String,
    pub results: Vec<TodoRepresentation>,
    pub links: Vec<Link>,
}

impl SearchRepresentation {
    pub fn build(
        term: &str,
        matches: &[Todo],
        generator: &dyn UrlGenerator,
    ) -> Result<Self> {
        let results = matches
            .iter()
            .map(|todo| TodoRepresentation::for_entity(todo, generator))
            .collect::<Result<Vec<_>>>()?;
        let links = vec![
            Link::new(rel::SELF, search_uri(generator)?),
            Link::with_title(rel::SUBMIT, submit_uri(generator)?, "Submit a new todo"),
        ];
        Ok(Self {
            term: term.to_string(),
            results,
            links,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::routes::RouteRegistry;
    use crate::uri::BaseUrlGenerator;

    fn tenant() -> Tenant {
        Tenant {
            id: 42,
            code: "ACME".to_string(),
            name: "Acme Corp".to_string(),
            description: "Roadrunner countermeasures".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn todo() -> Todo {
        Todo {
            id: 7,
            name: "Buy milk".to_string(),
            completed: false,
            due: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn tenant_self_link_matches_the_uri_factory() {
        let registry = RouteRegistry::standard();
        let generator = BaseUrlGenerator::new("http://localhost:3000", &registry);
        let rep = TenantRepresentation::for_entity(&tenant(), &generator).unwrap();
        assert_eq!(rep.links.len(), 1);
        assert_eq!(rep.links[0].rel, rel::SELF);
        assert_eq!(rep.links[0].href, tenant_uri(42, &generator).unwrap());
    }

    #[test]
    fn tenant_carries_no_domain_links() {
        let registry = RouteRegistry::standard();
        let generator = BaseUrlGenerator::new("http://localhost:3000", &registry);
        let rep = TenantRepresentation::for_entity(&tenant(), &generator).unwrap();
        assert!(rep.links.iter().all(|l| l.rel != rel::TODOS));
        assert!(rep.links.iter().all(|l| l.rel != rel::TENANTS));
    }

    #[test]
    fn tenant_fields_are_copied_verbatim() {
        let registry = RouteRegistry::standard();
        let generator = BaseUrlGenerator::new("http://localhost:3000", &registry);
        let entity = tenant();
        let rep = TenantRepresentation::for_entity(&entity, &generator).unwrap();
        assert_eq!(rep.id, entity.id);
        assert_eq!(rep.code, entity.code);
        assert_eq!(rep.name, entity.name);
        assert_eq!(rep.description, entity.description);
        assert_eq!(rep.created_at, entity.created_at);
        assert_eq!(rep.updated_at, entity.updated_at);
    }

    #[test]
    fn todo_self_link_matches_the_uri_factory() {
        let registry = RouteRegistry::standard();
        let generator = BaseUrlGenerator::new("http://localhost:3000", &registry);
        let rep = TodoRepresentation::for_entity(&todo(), &generator).unwrap();
        assert_eq!(rep.links.len(), 1);
        assert_eq!(rep.links[0].href, todo_uri(7, &generator).unwrap());
        assert_eq!(rep.name, "Buy milk");
    }

    #[test]
    fn api_root_emits_exactly_the_five_relations() {
        let registry = RouteRegistry::standard();
        let generator = BaseUrlGenerator::new("http://localhost:3000", &registry);
        let rep = ApiRepresentation::build(&generator).unwrap();
        let rels: Vec<&str> = rep.links.iter().map(|l| l.rel).collect();
        assert_eq!(
            rels,
            vec![rel::SELF, rel::TODOS, rel::TENANTS, rel::SEARCH, rel::SUBMIT]
        );
        assert!(!rep.version.is_empty());
    }

    #[test]
    fn search_lists_matches_with_self_links() {
        let registry = RouteRegistry::standard();
        let generator = BaseUrlGenerator::new("http://localhost:3000", &registry);
        let rep = SearchRepresentation::build("milk", &[todo()], &generator).unwrap();
        assert_eq!(rep.term, "milk");
        assert_eq!(rep.results.len(), 1);
        assert_eq!(rep.results[0].links[0].rel, rel::SELF);
        assert_eq!(rep.links[0].href, "http://localhost:3000/search");
    }

    #[test]
    fn builder_propagates_unknown_route_errors() {
        // A registry missing the Todo route makes the builder fail as a
        // whole; no partial representation comes back.
        struct Broken;
        impl UrlGenerator for Broken {
            fn url_for(&self, route: &str, _params: &[(&str, String)]) -> Result<String> {
                Err(Error::UnknownRoute {
                    name: route.to_string(),
                })
            }
        }
        let err = TodoRepresentation::for_entity(&todo(), &Broken).unwrap_err();
        assert!(matches!(err, Error::UnknownRoute { .. }));
    }
}
