//! User-specific queries on the `user_info` table.
//!
//! Generic CRUD for users goes through [`super::EntityRepo`]; this
//! repository only adds the credential lookup.

use sqlx::PgPool;

/// Provides the phone/password lookup for users.
pub struct UserRepo;

impl UserRepo {
    /// Role name of the first user (by id) whose phone number and password
    /// both match exactly.
    pub async fn find_role_by_credentials(
        pool: &PgPool,
        phone_no: &str,
        password: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT role_name FROM user_info \
             WHERE phone_no = $1 AND password = $2 \
             ORDER BY id ASC LIMIT 1",
        )
        .bind(phone_no)
        .bind(password)
        .fetch_optional(pool)
        .await
    }
}
