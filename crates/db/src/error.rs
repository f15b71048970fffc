use std::time::Duration;

use estate_core::error::CoreError;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// SQLSTATE classes 08 (connection exception) and 53 (insufficient resources).
const UNAVAILABLE_CLASSES: [&str; 2] = ["08", "53"];

/// `admin_shutdown`, `crash_shutdown` and `cannot_connect_now`.
const SHUTDOWN_CODES: [&str; 3] = ["57P01", "57P02", "57P03"];

/// Error returned by the lifecycle service and the store glue beneath it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain-level error (bad input, not found, rejected patch, ...).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Any other store failure. Surfaces to callers as an internal error.
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// A store call did not finish within the configured deadline.
    #[error("Store call exceeded {0:?}")]
    Timeout(Duration),
}

/// Unique violations become [`CoreError::Conflict`], lost or refused
/// connections become [`CoreError::StoreUnavailable`]. Everything else stays
/// a raw store failure.
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                let constraint = db_err.constraint().unwrap_or("unknown");
                return Self::Core(CoreError::Conflict(format!(
                    "Duplicate key violates unique constraint: {constraint}"
                )));
            }
        }
        if is_unavailable(&err) {
            return Self::Core(CoreError::StoreUnavailable(err.to_string()));
        }
        Self::Database(err)
    }
}

fn is_unavailable(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_) => true,
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| {
            let code: &str = &code;
            UNAVAILABLE_CLASSES.iter().any(|class| code.starts_with(class))
                || SHUTDOWN_CODES.contains(&code)
        }),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn connection_failures_are_store_unavailable() {
        for err in [
            sqlx::Error::PoolTimedOut,
            sqlx::Error::PoolClosed,
            sqlx::Error::WorkerCrashed,
            sqlx::Error::Protocol("unexpected message".into()),
            sqlx::Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )),
        ] {
            assert_matches!(
                StoreError::from(err),
                StoreError::Core(CoreError::StoreUnavailable(_))
            );
        }
    }

    #[test]
    fn other_failures_stay_database_errors() {
        assert_matches!(
            StoreError::from(sqlx::Error::ColumnNotFound("fee_amount".into())),
            StoreError::Database(_)
        );
        assert_matches!(
            StoreError::from(sqlx::Error::RowNotFound),
            StoreError::Database(_)
        );
    }
}
