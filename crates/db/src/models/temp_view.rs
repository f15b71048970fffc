//! Read-only composite view over users, roles, apartments, houses and
//! streets.
//!
//! `TempView` implements [`Record`] only. It has no durable identity of its
//! own: `id` is the user's id, so it can be read by key but never written.

use estate_core::key::KeyShape;
use estate_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::entity::Record;

/// A row from the `temp_view` view.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TempView {
    pub id: DbId,
    pub role_name: String,
    pub f_name: String,
    pub l_name: String,
    pub house_no: Option<String>,
    pub street_name: Option<String>,
    pub a_name: Option<String>,
}

impl Record for TempView {
    const NAME: &'static str = "Temp_View";
    const SOURCE: &'static str = "temp_view";
    const KEY: KeyShape = KeyShape::Single { column: "id" };
    const COLUMNS: &'static str = "id, role_name, f_name, l_name, house_no, street_name, a_name";
}
