//! PostgreSQL identity repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::identity::{Identity, IdentityRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of IdentityRepository
///
/// The `identities` table keys on `login`; `members.login` references it
/// with `ON DELETE CASCADE`, so deleting an identity removes its member
/// profile inside the same statement.
#[derive(Debug, Clone)]
pub struct PostgresIdentityRepository {
    pool: PgPool,
}

impl PostgresIdentityRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityRepository for PostgresIdentityRepository {
    async fn get_by_login(&self, login: &str) -> Result<Option<Identity>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT login, email, first_name, last_name, password_hash,
                   created_at, updated_at, last_login_at
            FROM identities
            WHERE login = $1
            "#,
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get identity: {}", e)))?;

        Ok(row.map(|row| row_to_identity(&row)))
    }

    async fn create(&self, identity: Identity) -> Result<Identity, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO identities (login, email, first_name, last_name, password_hash,
                                    created_at, updated_at, last_login_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(identity.login())
        .bind(identity.email())
        .bind(identity.first_name())
        .bind(identity.last_name())
        .bind(identity.password_hash())
        .bind(identity.created_at())
        .bind(identity.updated_at())
        .bind(identity.last_login_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::duplicate(format!("Login '{}' already exists", identity.login()))
            } else {
                DomainError::storage(format!("Failed to create identity: {}", e))
            }
        })?;

        Ok(identity)
    }

    async fn update(&self, identity: &Identity) -> Result<Identity, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE identities
            SET email = $2, first_name = $3, last_name = $4, password_hash = $5,
                updated_at = $6, last_login_at = $7
            WHERE login = $1
            "#,
        )
        .bind(identity.login())
        .bind(identity.email())
        .bind(identity.first_name())
        .bind(identity.last_name())
        .bind(identity.password_hash())
        .bind(identity.updated_at())
        .bind(identity.last_login_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update identity: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Identity '{}' not found",
                identity.login()
            )));
        }

        Ok(identity.clone())
    }

    async fn delete(&self, login: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM identities WHERE login = $1")
            .bind(login)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete identity: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn record_login(&self, login: &str) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE identities SET last_login_at = NOW() WHERE login = $1")
            .bind(login)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to record login: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Identity '{}' not found",
                login
            )));
        }

        Ok(())
    }
}

fn row_to_identity(row: &sqlx::postgres::PgRow) -> Identity {
    Identity::from_storage(
        row.get("login"),
        row.get("email"),
        row.get("first_name"),
        row.get("last_name"),
        row.get("password_hash"),
        row.get("created_at"),
        row.get("updated_at"),
        row.get("last_login_at"),
    )
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    let msg = err.to_string();
    msg.contains("duplicate key") || msg.contains("unique constraint")
}
