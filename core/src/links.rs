//! Typed hypermedia links and the closed link-relation vocabulary.
//!
//! # Design
//! Every relation name a representation can emit lives in [`rel`]. The
//! builders never invent ad hoc relation strings; adding a capability
//! means adding a constant here, which keeps client-side link-following
//! code stable across resource types. Links are ephemeral values inside
//! a representation, recomputed on every request and never persisted.

use serde::Serialize;

/// The closed set of link-relation names used across all representations.
pub mod rel {
    /// A representation's own address. Present on every representation.
    pub const SELF: &str = "self";
    /// The search endpoint.
    pub const SEARCH: &str = "search";
    /// The endpoint accepting new todo submissions.
    pub const SUBMIT: &str = "submit";
    /// The todo collection.
    pub const TODOS: &str = "todos";
    /// The tenant collection.
    pub const TENANTS: &str = "tenants";
    /// Reserved for a future authentication endpoint; part of the
    /// vocabulary but not emitted by any current representation.
    pub const AUTHENTICATE: &str = "authenticate";
}

/// A single navigable relation: name, absolute target URI, and an
/// optional human-readable title. Serialize-only; links are produced by
/// the server, never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub rel: &'static str,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    pub fn new(rel: &'static str, href: String) -> Self {
        Self {
            rel,
            href,
            title: None,
        }
    }

    pub fn with_title(rel: &'static str, href: String, title: &str) -> Self {
        Self {
            rel,
            href,
            title: Some(title.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_without_title_omits_the_field() {
        let link = Link::new(rel::SELF, "http://localhost:3000/todo/1".to_string());
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["rel"], "self");
        assert_eq!(json["href"], "http://localhost:3000/todo/1");
        assert!(json.get("title").is_none());
    }

    #[test]
    fn link_with_title_serializes_it() {
        let link = Link::with_title(rel::TODOS, "http://localhost:3000/todo".to_string(), "Todos");
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["title"], "Todos");
    }
}
