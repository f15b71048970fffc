//! Route tables shared by every entity resource.

use axum::routing::get;
use axum::Router;
use estate_core::key::KeyShape;
use estate_db::entity::{Entity, Record};

use crate::handlers::{entity, temp_view};
use crate::state::AppState;

/// Full lifecycle routes for `T`, mounted at `/<resource>`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /        -> replace (key in body)
/// GET    /{key}   -> get
/// PATCH  /{key}   -> patch
/// DELETE /{key}   -> delete
/// ```
///
/// `{key}` is `/{id}` for single-key types and `/{user_id}/{house_id}` style
/// for composite keys.
pub fn router<T: Entity>() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(entity::list::<T>)
                .post(entity::create::<T>)
                .put(entity::replace::<T>),
        )
        .route(
            &key_path(T::KEY),
            get(entity::get::<T>)
                .patch(entity::patch::<T>)
                .delete(entity::delete::<T>),
        )
}

/// Read routes for `T`; every mutation answers `READ_ONLY_RESOURCE`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> reject_mutation
/// PUT    /        -> reject_mutation
/// GET    /{id}    -> get
/// PATCH  /{id}    -> reject_mutation
/// DELETE /{id}    -> reject_mutation
/// ```
pub fn read_only_router<T: Record>() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(entity::list::<T>)
                .post(temp_view::reject_mutation)
                .put(temp_view::reject_mutation),
        )
        .route(
            &key_path(T::KEY),
            get(entity::get::<T>)
                .patch(temp_view::reject_mutation)
                .delete(temp_view::reject_mutation),
        )
}

/// Path pattern capturing every key column, in key order.
fn key_path(shape: KeyShape) -> String {
    shape
        .columns()
        .iter()
        .map(|column| format!("/{{{column}}}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_path_captures_each_key_column() {
        assert_eq!(key_path(KeyShape::Single { column: "id" }), "/{id}");
        assert_eq!(
            key_path(KeyShape::Composite {
                columns: ["user_id", "house_id"]
            }),
            "/{user_id}/{house_id}"
        );
    }
}
