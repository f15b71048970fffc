use axum::routing::post;
use axum::Router;
use estate_db::models::User;

use crate::handlers::users;
use crate::routes::entities;
use crate::state::AppState;

/// User routes mounted at `/users`: the generic lifecycle plus login.
///
/// ```text
/// POST   /login   -> login
/// ```
pub fn router() -> Router<AppState> {
    entities::router::<User>().route("/login", post(users::login))
}
