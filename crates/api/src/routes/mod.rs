pub mod entities;
pub mod health;
pub mod users;

use axum::Router;
use estate_db::models::{
    Apartment, Fee, House, Invoice, Payment, Role, Street, TempView, UserProperty,
};

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                                   list, create, replace
/// /users/{id}                              get, patch, delete
/// /users/login                             credential check (POST)
///
/// /apartments, /fees, /houses,
/// /invoices, /payments, /roles, /streets   list, create, replace
///   .../{id}                               get, patch, delete
///
/// /user-properties                         list, create, replace
/// /user-properties/{user_id}/{house_id}    get, patch, delete
///
/// /temp-view                               list (mutations -> 405)
/// /temp-view/{id}                          get (mutations -> 405)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/apartments", entities::router::<Apartment>())
        .nest("/fees", entities::router::<Fee>())
        .nest("/houses", entities::router::<House>())
        .nest("/invoices", entities::router::<Invoice>())
        .nest("/payments", entities::router::<Payment>())
        .nest("/roles", entities::router::<Role>())
        .nest("/streets", entities::router::<Street>())
        .nest("/user-properties", entities::router::<UserProperty>())
        .nest("/temp-view", entities::read_only_router::<TempView>())
}
