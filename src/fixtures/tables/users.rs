// fixtures/tables/users.rs
//
// The users table: one row per account, with the two uniqueness
// constraints (username, email) that the validation suite exercises.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::fixtures::TestTable;

/// A row from the users table.
/// This struct helps Rust understand what data structure we're getting from SQL.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub age: Option<i32>,
    pub created_at: NaiveDateTime,
}

pub struct UsersTable;

impl TestTable for UsersTable {
    fn setup_sql() -> &'static [&'static str] {
        &[r#"
            CREATE TABLE IF NOT EXISTS users (
                id SERIAL PRIMARY KEY,
                username VARCHAR(50) UNIQUE NOT NULL,
                email VARCHAR(100) UNIQUE NOT NULL,
                age INTEGER,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
        "#]
    }

    fn teardown_sql() -> &'static [&'static str] {
        &["DROP TABLE IF EXISTS users CASCADE"]
    }
}
