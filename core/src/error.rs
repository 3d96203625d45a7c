//! Error taxonomy shared by the repository contracts and the
//! representation builders.
//!
//! # Design
//! `NotFound` gets a dedicated variant because controllers translate it
//! into a client-facing 404. `UnknownRoute` is different in kind: under
//! correct configuration it can never happen at runtime, so callers
//! treat it as a deployment defect to log and surface, never to default
//! around. `Persistence` carries an opaque provider message and is
//! propagated unchanged — retries, if any, belong to the provider.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The requested entity does not exist. Never retried.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// A route name was looked up that was never registered. This is a
    /// configuration defect, not a runtime condition.
    #[error("unknown route name: {name}")]
    UnknownRoute { name: String },

    /// Opaque failure from the storage provider, propagated unchanged.
    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl Error {
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        Error::NotFound { entity, id }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
