//! notebox - Multi-user note-taking HTTP service
//!
//! Startup sequence: parse flags, load config (fatal on missing
//! secret or storage URL), init logging, connect PostgreSQL and run
//! migrations, wire the services, serve.

use anyhow::Context;
use std::sync::Arc;

use notebox::auth::{AuthService, PgUserStore, TokenIssuer};
use notebox::config::AppConfig;
use notebox::db::Database;
use notebox::gateway::{self, state::AppState};
use notebox::logging;
use notebox::notes::{NoteService, PgNoteStore};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut config = AppConfig::load(&env)?;
    if let Some(port) = get_port_override() {
        config.gateway.port = port;
    }

    let _guard = logging::init_logging(&config);
    tracing::info!("Starting notebox (env: {})", env);

    let db = Database::connect(&config.postgres_url)
        .await
        .context("Failed to connect to PostgreSQL")?;
    db.run_migrations()
        .await
        .context("Failed to run database migrations")?;

    let users = Arc::new(PgUserStore::new(db.pool().clone()));
    let tokens = TokenIssuer::new(&config.auth.jwt_secret, config.auth.token_ttl_secs);
    let auth = Arc::new(AuthService::new(users, tokens));

    let notes = Arc::new(NoteService::new(Arc::new(PgNoteStore::new(
        db.pool().clone(),
    ))));

    let state = Arc::new(AppState::new(auth, notes));
    gateway::run_server(&config, state).await
}
