//! Identifier allocation.
//!
//! New rows get `MAX(id) + 1`, or `1` on an empty table. The read happens
//! on the caller's transaction after taking a table lock that conflicts
//! with itself, so two concurrent creates on the same table serialize and
//! never compute the same identifier. The lock is released when the
//! transaction commits or rolls back.

use estate_core::types::DbId;
use sqlx::PgConnection;

/// Compute the next identifier for `table`.
///
/// Must be called inside the transaction that performs the insert.
pub async fn next_id(conn: &mut PgConnection, table: &str, column: &str) -> Result<DbId, sqlx::Error> {
    sqlx::query(&format!("LOCK TABLE {table} IN SHARE ROW EXCLUSIVE MODE"))
        .execute(&mut *conn)
        .await?;

    let query = format!("SELECT COALESCE(MAX({column}), 0) + 1 FROM {table}");
    let next = sqlx::query_scalar::<_, DbId>(&query)
        .fetch_one(&mut *conn)
        .await?;

    tracing::debug!(table, next, "Allocated identifier");
    Ok(next)
}
