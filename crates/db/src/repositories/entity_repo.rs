//! Generic repository over any [`Record`] / [`Entity`] type.
//!
//! Queries are assembled with [`QueryBuilder`] from the type's table name,
//! key shape and field table, so one implementation serves every model.

use std::marker::PhantomData;

use estate_core::field::{column_list, FieldDef, FieldValue};
use estate_core::key::EntityKey;
use sqlx::{PgExecutor, Postgres, QueryBuilder};

use crate::entity::{push_key_filter, push_value, Entity, Record};

/// Provides store access for `T`.
pub struct EntityRepo<T>(PhantomData<T>);

impl<T: Record> EntityRepo<T> {
    fn select() -> QueryBuilder<'static, Postgres> {
        QueryBuilder::new(format!("SELECT {} FROM {}", T::COLUMNS, T::SOURCE))
    }

    /// Find a row by key.
    pub async fn find_by_key<'e, E>(executor: E, key: EntityKey) -> Result<Option<T>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let mut builder = Self::select();
        push_key_filter(&mut builder, T::KEY, key);
        builder.push(" LIMIT 1");
        builder.build_query_as::<T>().fetch_optional(executor).await
    }

    /// Find a row by key and lock it until the surrounding transaction ends.
    pub async fn find_by_key_for_update<'e, E>(
        executor: E,
        key: EntityKey,
    ) -> Result<Option<T>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let mut builder = Self::select();
        push_key_filter(&mut builder, T::KEY, key);
        builder.push(" LIMIT 1 FOR UPDATE");
        builder.build_query_as::<T>().fetch_optional(executor).await
    }

    /// List all rows ordered by key ascending.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<T>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let mut builder = Self::select();
        builder.push(" ORDER BY ").push(T::KEY.columns().join(", "));
        builder.build_query_as::<T>().fetch_all(executor).await
    }

    /// Whether a row with `key` exists.
    pub async fn exists<'e, E>(executor: E, key: EntityKey) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let mut builder = QueryBuilder::new(format!("SELECT EXISTS (SELECT 1 FROM {}", T::SOURCE));
        push_key_filter(&mut builder, T::KEY, key);
        builder.push(")");
        builder
            .build_query_scalar::<bool>()
            .fetch_one(executor)
            .await
    }
}

impl<T: Entity> EntityRepo<T> {
    /// Insert `entity` with its key as given and return the stored row.
    pub async fn insert<'e, E>(executor: E, entity: &T) -> Result<T, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let key_columns = T::KEY.columns().join(", ");
        let columns = if T::FIELDS.is_empty() {
            key_columns
        } else {
            format!("{key_columns}, {}", column_list(T::FIELDS))
        };

        let mut builder = QueryBuilder::new(format!("INSERT INTO {} ({columns}) VALUES (", T::SOURCE));
        {
            let mut separated = builder.separated(", ");
            for part in entity.key().parts() {
                separated.push_bind(part);
            }
        }
        for value in entity.values() {
            builder.push(", ");
            push_value(&mut builder, value);
        }
        builder.push(format!(") RETURNING {}", T::COLUMNS));

        builder.build_query_as::<T>().fetch_one(executor).await
    }

    /// Overwrite the given columns of the row at `key`.
    ///
    /// Returns the number of rows affected (0 when the key is absent).
    pub async fn update_fields<'e, E>(
        executor: E,
        key: EntityKey,
        assignments: Vec<(&'static FieldDef, FieldValue)>,
    ) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let mut builder = QueryBuilder::new(format!("UPDATE {} SET ", T::SOURCE));
        for (i, (def, value)) in assignments.into_iter().enumerate() {
            if i > 0 {
                builder.push(", ");
            }
            builder.push(def.column).push(" = ");
            push_value(&mut builder, value);
        }
        push_key_filter(&mut builder, T::KEY, key);

        let result = builder.build().execute(executor).await?;
        Ok(result.rows_affected())
    }

    /// Delete the row at `key`.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete<'e, E>(executor: E, key: EntityKey) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let mut builder = QueryBuilder::new(format!("DELETE FROM {}", T::SOURCE));
        push_key_filter(&mut builder, T::KEY, key);

        let result = builder.build().execute(executor).await?;
        Ok(result.rows_affected() > 0)
    }
}
