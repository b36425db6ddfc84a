// error.rs - Error taxonomy for the harness
//
// Two kinds of failure matter here and they must never be confused:
//
// 1. Constraint violations raised by PostgreSQL. Several tests provoke
//    these on purpose and assert that exactly the expected class occurred.
// 2. Failures of the fixture layer itself (connecting, creating the
//    schema, rolling a test transaction back). These are never an expected
//    outcome and must not be swallowed.
//
// Assertion failures are a third category, but those are just panics from
// `assert!` in the test bodies and need no type of their own.

use thiserror::Error;

/// The constraint classes PostgreSQL can report on an insert or update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Duplicate value in a UNIQUE column
    Unique,
    /// Referenced row does not exist
    ForeignKey,
    /// NULL in a NOT NULL column
    NotNull,
    /// A CHECK expression evaluated to false
    Check,
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConstraintKind::Unique => "UNIQUE",
            ConstraintKind::ForeignKey => "FOREIGN KEY",
            ConstraintKind::NotNull => "NOT NULL",
            ConstraintKind::Check => "CHECK",
        };
        f.write_str(name)
    }
}

/// Classify an error as a constraint violation.
///
/// Returns `None` for anything the database did not report as a constraint
/// violation (I/O errors, decode errors, syntax errors, ...), so a test
/// asserting on the result cannot accidentally accept an unrelated failure.
pub fn constraint_kind(err: &sqlx::Error) -> Option<ConstraintKind> {
    use sqlx::error::ErrorKind;

    match err.as_database_error()?.kind() {
        ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
        ErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
        ErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
        ErrorKind::CheckViolation => Some(ConstraintKind::Check),
        _ => None,
    }
}

/// Failures of the fixture layer, kept distinct from test-body errors so a
/// broken harness never reads as a broken test.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to connect to the test database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("schema setup failed: {0}")]
    SchemaSetup(#[source] sqlx::Error),

    #[error("failed to open the test transaction: {0}")]
    Begin(#[source] sqlx::Error),

    #[error("rollback failed while tearing down the test transaction: {0}")]
    Rollback(#[source] sqlx::Error),
}
