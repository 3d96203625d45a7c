//! HTTP surface for the multi-tenant todo service.
//!
//! # Overview
//! Thin controller layer: each handler fetches entities through the
//! repository contracts, hands them to the representation builders with
//! a request-scoped URL generator, and serializes the result. All
//! linking decisions live in `todolinks_core`; nothing here constructs
//! a URI by hand.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use todolinks_core::error::Error;
use todolinks_core::model::{CreateTodo, TenantId, TodoId};
use todolinks_core::representation::{
    ApiRepresentation, SearchRepresentation, TenantRepresentation, TodoRepresentation,
};
use todolinks_core::repository::{TenantRepository, TodoRepository};
use todolinks_core::routes::RouteRegistry;
use todolinks_core::uri::BaseUrlGenerator;

pub mod store;

/// Shared application state. The registry and the repositories are
/// established at startup and read-only (registry) or internally
/// synchronized (stores) thereafter.
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<dyn TodoRepository>,
    pub tenants: Arc<dyn TenantRepository>,
    pub registry: Arc<RouteRegistry>,
    /// Fallback scheme + authority when the request carries no Host
    /// header. Also fixes the scheme used for generated links.
    pub base_url: String,
}

impl AppState {
    /// In-memory provider with the standard route registry. `tenants`
    /// is the seed set; tenants have no write surface.
    pub fn in_memory(base_url: &str, tenants: Vec<todolinks_core::model::Tenant>) -> Self {
        Self {
            todos: Arc::new(store::InMemoryTodoStore::new()),
            tenants: Arc::new(store::InMemoryTenantStore::with_tenants(tenants)),
            registry: Arc::new(RouteRegistry::standard()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(api_root))
        .route("/tenant", get(list_tenants))
        .route("/tenant/{id}", get(get_tenant))
        .route("/todo", get(list_todos).post(create_todo))
        .route(
            "/todo/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/search", get(search))
        .with_state(state)
}

pub async fn run(listener: tokio::net::TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

/// Core error mapped onto an HTTP response. `UnknownRoute` is a
/// configuration defect, so it is logged as an error before coming back
/// as a 500.
struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::UnknownRoute { .. } => {
                tracing::error!(error = %self.0, "route registry misconfiguration");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Error::Persistence(_) => {
                tracing::error!(error = %self.0, "persistence provider failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Scheme + authority for the current request: the Host header when
/// present (links must reflect the name the client used), otherwise the
/// configured base URL. The scheme always comes from the configuration.
fn request_base(state: &AppState, headers: &HeaderMap) -> String {
    let scheme = state.base_url.split("://").next().unwrap_or("http");
    match headers.get(header::HOST).and_then(|v| v.to_str().ok()) {
        Some(host) => format!("{scheme}://{host}"),
        None => state.base_url.clone(),
    }
}

async fn api_root(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiRepresentation>, ApiError> {
    let base = request_base(&state, &headers);
    let generator = BaseUrlGenerator::new(&base, &state.registry);
    Ok(Json(ApiRepresentation::build(&generator)?))
}

async fn list_tenants(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<TenantRepresentation>>, ApiError> {
    let base = request_base(&state, &headers);
    let generator = BaseUrlGenerator::new(&base, &state.registry);
    let tenants = state.tenants.get_all().await?;
    let reps = tenants
        .iter()
        .map(|tenant| TenantRepresentation::for_entity(tenant, &generator))
        .collect::<todolinks_core::error::Result<Vec<_>>>()?;
    Ok(Json(reps))
}

async fn get_tenant(
    State(state): State<AppState>,
    Path(id): Path<TenantId>,
    headers: HeaderMap,
) -> Result<Json<TenantRepresentation>, ApiError> {
    let base = request_base(&state, &headers);
    let generator = BaseUrlGenerator::new(&base, &state.registry);
    let tenant = state.tenants.get(id).await?;
    Ok(Json(TenantRepresentation::for_entity(&tenant, &generator)?))
}

async fn list_todos(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<TodoRepresentation>>, ApiError> {
    let base = request_base(&state, &headers);
    let generator = BaseUrlGenerator::new(&base, &state.registry);
    let todos = state.todos.get_all().await?;
    let reps = todos
        .iter()
        .map(|todo| TodoRepresentation::for_entity(todo, &generator))
        .collect::<todolinks_core::error::Result<Vec<_>>>()?;
    Ok(Json(reps))
}

async fn create_todo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<CreateTodo>,
) -> Result<Response, ApiError> {
    if input.name.trim().is_empty() {
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "name must not be empty" })),
        )
            .into_response());
    }
    let base = request_base(&state, &headers);
    let generator = BaseUrlGenerator::new(&base, &state.registry);
    let id = state.todos.create(input).await?;
    let todo = state.todos.get(id).await?;
    tracing::info!(id, "todo created");
    let rep = TodoRepresentation::for_entity(&todo, &generator)?;
    Ok((StatusCode::CREATED, Json(rep)).into_response())
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
    headers: HeaderMap,
) -> Result<Json<TodoRepresentation>, ApiError> {
    let base = request_base(&state, &headers);
    let generator = BaseUrlGenerator::new(&base, &state.registry);
    let todo = state.todos.get(id).await?;
    Ok(Json(TodoRepresentation::for_entity(&todo, &generator)?))
}

/// Partial update payload. Only the fields present in the JSON are
/// applied; omitted fields remain unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTodo {
    pub name: Option<String>,
    pub completed: Option<bool>,
    pub due: Option<DateTime<Utc>>,
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
    headers: HeaderMap,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<TodoRepresentation>, ApiError> {
    let base = request_base(&state, &headers);
    let generator = BaseUrlGenerator::new(&base, &state.registry);
    let todo = state
        .todos
        .update(
            id,
            Box::new(move |todo| {
                if let Some(name) = input.name {
                    todo.name = name;
                }
                if let Some(completed) = input.completed {
                    todo.completed = completed;
                }
                if let Some(due) = input.due {
                    todo.due = due;
                }
            }),
        )
        .await?;
    Ok(Json(TodoRepresentation::for_entity(&todo, &generator)?))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, ApiError> {
    state.todos.delete(id).await?;
    tracing::info!(id, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    term: String,
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
    headers: HeaderMap,
) -> Result<Json<SearchRepresentation>, ApiError> {
    let base = request_base(&state, &headers);
    let generator = BaseUrlGenerator::new(&base, &state.registry);
    let term = params.term;
    let needle = term.to_lowercase();
    let matches: Vec<_> = state
        .todos
        .get_all()
        .await?
        .into_iter()
        .filter(|todo| todo.name.to_lowercase().contains(&needle))
        .collect();
    Ok(Json(SearchRepresentation::build(&term, &matches, &generator)?))
}
