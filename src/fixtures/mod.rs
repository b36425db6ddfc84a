// fixtures/mod.rs - Test fixtures module
//
// What is a fixture?
// A fixture is reusable test setup code. Instead of writing the same database
// setup in every test, we write it once and reuse it.
//
// This harness has two fixture scopes:
// - Per table: the DDL that creates and drops it (the `TestTable` trait,
//   implemented once per table under `tables/`).
// - Per session: `create_all` runs every table's setup once before the first
//   test, and `drop_statements` feeds the teardown that runs after the last.
//
// The per-test transaction scope lives with the tests themselves, in
// `tests/common/mod.rs`.

use sqlx::PgConnection;

use crate::error::FixtureError;

pub mod tables;

use tables::{OrdersTable, UsersTable};

/// A simple trait that all test tables must implement
pub trait TestTable {
    /// The SQL commands to create this table, executed in order.
    /// Must be idempotent: running them against an existing table is a no-op.
    fn setup_sql() -> &'static [&'static str];

    /// The SQL commands that remove the table again at the end of a session
    fn teardown_sql() -> &'static [&'static str];
}

/// Create every table the suite needs, parents before children so the
/// foreign key on `orders` can resolve.
pub async fn create_all(conn: &mut PgConnection) -> Result<(), FixtureError> {
    tracing::debug!("applying schema setup statements");

    for &sql in UsersTable::setup_sql()
        .iter()
        .chain(OrdersTable::setup_sql().iter())
    {
        sqlx::query(sql)
            .execute(&mut *conn)
            .await
            .map_err(FixtureError::SchemaSetup)?;
    }

    Ok(())
}

/// Teardown statements for the whole schema, children before parents.
pub fn drop_statements() -> Vec<&'static str> {
    OrdersTable::teardown_sql()
        .iter()
        .chain(UsersTable::teardown_sql().iter())
        .copied()
        .collect()
}
