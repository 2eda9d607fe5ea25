//! PostgreSQL member repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::member::{Member, MemberRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of MemberRepository
///
/// `members.login` carries a UNIQUE constraint and a foreign key to
/// `identities(login)` with `ON DELETE CASCADE`; the serial `id` column
/// gives `list` a stable insertion order.
#[derive(Debug, Clone)]
pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn get(&self, login: &str) -> Result<Option<Member>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT login, age, membership_type, join_date, created_at, updated_at
            FROM members
            WHERE login = $1
            "#,
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get member: {}", e)))?;

        Ok(row.map(|row| row_to_member(&row)))
    }

    async fn create(&self, member: Member) -> Result<Member, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO members (login, age, membership_type, join_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(member.login())
        .bind(member.age())
        .bind(member.membership_type())
        .bind(member.join_date())
        .bind(member.created_at())
        .bind(member.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::duplicate(format!("Member '{}' already exists", member.login()))
            } else if msg.contains("foreign key") {
                DomainError::not_found(format!("No identity for login '{}'", member.login()))
            } else {
                DomainError::storage(format!("Failed to create member: {}", e))
            }
        })?;

        Ok(member)
    }

    async fn update(&self, member: &Member) -> Result<Member, DomainError> {
        // join_date is immutable and deliberately absent from the SET list
        let result = sqlx::query(
            r#"
            UPDATE members
            SET age = $2, membership_type = $3, updated_at = $4
            WHERE login = $1
            "#,
        )
        .bind(member.login())
        .bind(member.age())
        .bind(member.membership_type())
        .bind(member.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update member: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Member '{}' not found",
                member.login()
            )));
        }

        Ok(member.clone())
    }

    async fn delete(&self, login: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM members WHERE login = $1")
            .bind(login)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete member: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Member>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT login, age, membership_type, join_date, created_at, updated_at
            FROM members
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list members: {}", e)))?;

        Ok(rows.iter().map(row_to_member).collect())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count members: {}", e)))?;

        Ok(count as usize)
    }
}

fn row_to_member(row: &sqlx::postgres::PgRow) -> Member {
    Member::from_storage(
        row.get("login"),
        row.get("age"),
        row.get("membership_type"),
        row.get("join_date"),
        row.get("created_at"),
        row.get("updated_at"),
    )
}
