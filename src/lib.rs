//! Gym membership portal
//!
//! A small membership web application and operator console:
//! - HTTP API for registration, login, logout, and an authenticated
//!   dashboard
//! - Interactive admin console for managing member records
//! - Identity and member stores backed by Postgres, with in-memory
//!   fallbacks for local use and tests

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::{info, warn};

use api::state::AppState;
use domain::identity::IdentityRepository;
use domain::member::MemberRepository;
use infrastructure::identity::{Argon2Hasher, IdentityService, PostgresIdentityRepository};
use infrastructure::member::{MemberService, PostgresMemberRepository};
use infrastructure::session::{SessionConfig, SessionService};

/// Create the application state with all services initialized
///
/// Uses Postgres when `DATABASE_URL` is set; otherwise falls back to
/// in-memory stores, which do not survive a restart.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let session_config = SessionConfig::new(
        config.session.secret.clone(),
        config.session.expiration_hours,
    );

    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            warn!("DATABASE_URL not set; using in-memory storage");
            return Ok(AppState::in_memory(session_config));
        }
    };

    info!("Connecting to PostgreSQL...");
    let pool = sqlx::PgPool::connect(&database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
    info!("PostgreSQL connection established");

    let identities: Arc<dyn IdentityRepository> =
        Arc::new(PostgresIdentityRepository::new(pool.clone()));
    let members: Arc<dyn MemberRepository> = Arc::new(PostgresMemberRepository::new(pool));
    let hasher = Arc::new(Argon2Hasher::new());

    Ok(AppState::new(
        Arc::new(IdentityService::new(identities.clone(), hasher)),
        Arc::new(MemberService::new(members, identities)),
        Arc::new(SessionService::new(session_config)),
    ))
}
