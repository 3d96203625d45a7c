use chrono::Utc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use todolinks_core::model::Tenant;
use todolinks_server::AppState;

/// Tenant provisioning happens out of band; the in-memory provider
/// starts from this fixed seed set.
fn seed_tenants() -> Vec<Tenant> {
    let now = Utc::now();
    vec![
        Tenant {
            id: 1,
            code: "ACME".to_string(),
            name: "Acme Corp".to_string(),
            description: "Anvils, rockets, and roadrunner countermeasures".to_string(),
            created_at: now,
            updated_at: now,
        },
        Tenant {
            id: 2,
            code: "GLOBEX".to_string(),
            name: "Globex Corporation".to_string(),
            description: "Diversified global holdings".to_string(),
            created_at: now,
            updated_at: now,
        },
    ]
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("todolinks_server=info,todolinks_core=info")),
        )
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let base_url =
        std::env::var("BASE_URL").unwrap_or_else(|_| format!("http://localhost:{port}"));
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, %base_url, "listening");

    let state = AppState::in_memory(&base_url, seed_tenants());
    todolinks_server::run(listener, state).await
}
