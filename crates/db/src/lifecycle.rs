//! Generic entity lifecycle: create, read, list, replace, patch, delete.
//!
//! [`EntityService`] is stateless apart from its pool handle and store
//! deadline; it never caches rows, so every call reads fresh state. All
//! per-type knowledge comes from the [`Record`] / [`Entity`] impls.

use std::future::Future;
use std::time::Duration;

use estate_core::credentials::{CredentialCheck, Credentials};
use estate_core::error::CoreError;
use estate_core::key::{EntityKey, KeyShape};
use estate_core::patch::{apply_patch, PatchOperation, PatchOutcome, Projection};
use validator::Validate;

use crate::allocator;
use crate::entity::{Entity, Record};
use crate::error::StoreError;
use crate::repositories::{EntityRepo, UserRepo};
use crate::DbPool;

/// Default upper bound on a single lifecycle operation's store work.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(10);

/// The lifecycle engine, shared by every resource.
#[derive(Debug, Clone)]
pub struct EntityService {
    pool: DbPool,
    deadline: Duration,
}

impl EntityService {
    pub fn new(pool: DbPool, deadline: Duration) -> Self {
        Self { pool, deadline }
    }

    /// Run `work` under the store deadline.
    async fn bounded<R>(
        &self,
        work: impl Future<Output = Result<R, StoreError>>,
    ) -> Result<R, StoreError> {
        tokio::time::timeout(self.deadline, work)
            .await
            .map_err(|_| StoreError::Timeout(self.deadline))?
    }

    /// Insert a new record.
    ///
    /// Single-key types get `max + 1` allocated inside the insert's
    /// transaction; composite-key types keep the caller's key.
    pub async fn create<T: Entity>(&self, mut payload: T) -> Result<T, StoreError> {
        let stored = self
            .bounded(async {
                let mut tx = self.pool.begin().await?;

                match T::KEY {
                    KeyShape::Single { column } => {
                        let id = allocator::next_id(&mut *tx, T::SOURCE, column).await?;
                        payload.assign_id(id);
                    }
                    KeyShape::Composite { .. } => payload.key().validate(T::KEY)?,
                }

                let stored = EntityRepo::<T>::insert(&mut *tx, &payload).await?;
                tx.commit().await?;
                Ok(stored)
            })
            .await?;

        tracing::info!(entity = T::NAME, key = %stored.key(), "Entity created");
        Ok(stored)
    }

    /// Fetch one record by key.
    pub async fn get<T: Record>(&self, key: EntityKey) -> Result<T, StoreError> {
        key.validate(T::KEY)?;
        self.bounded(async {
            EntityRepo::<T>::find_by_key(&self.pool, key)
                .await?
                .ok_or_else(|| not_found::<T>(key))
        })
        .await
    }

    /// All records ordered by key.
    pub async fn list<T: Record>(&self) -> Result<Vec<T>, StoreError> {
        self.bounded(async { Ok(EntityRepo::<T>::list(&self.pool).await?) })
            .await
    }

    /// Overwrite every mutable field of the record addressed by the
    /// payload's key.
    pub async fn replace<T: Entity>(&self, payload: T) -> Result<(), StoreError> {
        let key = payload.key();
        key.validate(T::KEY)?;

        self.bounded(async {
            let found = if T::FIELDS.is_empty() {
                // Nothing to overwrite on a pure link row.
                EntityRepo::<T>::exists(&self.pool, key).await?
            } else {
                let assignments = T::FIELDS.iter().zip(payload.values()).collect();
                EntityRepo::<T>::update_fields(&self.pool, key, assignments).await? > 0
            };

            if found {
                Ok(())
            } else {
                Err(not_found::<T>(key))
            }
        })
        .await?;

        tracing::info!(entity = T::NAME, %key, "Entity replaced");
        Ok(())
    }

    /// Apply a patch document to the patchable fields of one record.
    ///
    /// Nothing is written unless every operation succeeds.
    pub async fn patch<T: Entity>(
        &self,
        key: EntityKey,
        operations: &[PatchOperation],
    ) -> Result<(), StoreError> {
        if operations.is_empty() {
            return Err(CoreError::BadInput(
                "Patch document must contain at least one operation".into(),
            )
            .into());
        }
        key.validate(T::KEY)?;

        self.bounded(async {
            let mut tx = self.pool.begin().await?;

            let current = EntityRepo::<T>::find_by_key_for_update(&mut *tx, key)
                .await?
                .ok_or_else(|| not_found::<T>(key))?;

            let mut projection = Projection::new(T::FIELDS.iter().zip(current.values()));
            if let PatchOutcome::Rejected(errors) = apply_patch(&mut projection, operations) {
                tracing::debug!(
                    entity = T::NAME,
                    %key,
                    failed = errors.len(),
                    "Patch rejected"
                );
                return Err(CoreError::ValidationFailed(errors).into());
            }

            let assignments: Vec<_> = projection
                .into_fields()
                .into_iter()
                .map(|field| (field.def, field.value))
                .collect();
            if !assignments.is_empty() {
                EntityRepo::<T>::update_fields(&mut *tx, key, assignments).await?;
            }

            tx.commit().await?;
            Ok(())
        })
        .await?;

        tracing::info!(entity = T::NAME, %key, ops = operations.len(), "Entity patched");
        Ok(())
    }

    /// Permanently remove one record.
    pub async fn delete<T: Entity>(&self, key: EntityKey) -> Result<(), StoreError> {
        key.validate(T::KEY)?;

        self.bounded(async {
            if EntityRepo::<T>::delete(&self.pool, key).await? {
                Ok(())
            } else {
                Err(not_found::<T>(key))
            }
        })
        .await?;

        tracing::info!(entity = T::NAME, %key, "Entity deleted");
        Ok(())
    }

    /// Look up a user's role by exact phone/password match.
    pub async fn check_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<CredentialCheck, StoreError> {
        credentials
            .validate()
            .map_err(|e| CoreError::BadInput(e.to_string()))?;

        let role = self
            .bounded(async {
                Ok(UserRepo::find_role_by_credentials(
                    &self.pool,
                    &credentials.phone_number,
                    &credentials.password,
                )
                .await?)
            })
            .await?;

        Ok(match role {
            Some(role_name) => CredentialCheck::Matched { role_name },
            None => CredentialCheck::Mismatch,
        })
    }
}

fn not_found<T: Record>(key: EntityKey) -> StoreError {
    StoreError::Core(CoreError::NotFound {
        entity: T::NAME,
        key,
    })
}
