//! Member entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// A gym-membership profile attached 1:1 to an identity
///
/// `join_date` is assigned once at creation and never changes; there is
/// deliberately no setter for it.
#[derive(Debug, Clone, Serialize)]
pub struct Member {
    /// Login key of the backing identity (exclusive 1:1 link)
    login: String,
    age: i32,
    membership_type: String,
    join_date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Member {
    /// Create a new member profile; the join date is today's date
    pub fn new(login: impl Into<String>, age: i32, membership_type: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            login: login.into(),
            age,
            membership_type: membership_type.into(),
            join_date: now.date_naive(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a member from persisted state
    pub(crate) fn from_storage(
        login: String,
        age: i32,
        membership_type: String,
        join_date: NaiveDate,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            login,
            age,
            membership_type,
            join_date,
            created_at,
            updated_at,
        }
    }

    // Getters

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn membership_type(&self) -> &str {
        &self.membership_type
    }

    pub fn join_date(&self) -> NaiveDate {
        self.join_date
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
        self.touch();
    }

    pub fn set_membership_type(&mut self, membership_type: impl Into<String>) {
        self.membership_type = membership_type.into();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
