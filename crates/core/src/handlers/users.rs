// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use staffdesk_domain::{DomainError, NewUser, UserId};
use time::OffsetDateTime;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::command::{CreateUser, DeleteUser, UpdateUser};
use crate::error::CoreError;
use crate::handler::{Handler, acquire, ensure_not_cancelled};
use crate::outcome::CommandResult;
use crate::store::{SharedStore, Store};

/// Inserts a new active user.
///
/// Identification numbers are not checked for uniqueness here. A reused
/// number is logged and the user is created anyway; only `UpdateUser`
/// rejects collisions.
pub struct CreateUserHandler<S> {
    store: SharedStore<S>,
}

impl<S: Store> CreateUserHandler<S> {
    #[must_use]
    pub const fn new(store: SharedStore<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: Store> Handler<CreateUser> for CreateUserHandler<S> {
    async fn handle(
        &self,
        request: CreateUser,
        cancel: &CancellationToken,
    ) -> Result<CommandResult<UserId>, CoreError> {
        let mut store = acquire(&self.store, cancel).await?;
        let new_user: NewUser = NewUser::new(request.details, OffsetDateTime::now_utc());

        let user_id: UserId = store.write(|repo| {
            if let Some(existing) = repo
                .find_user_by_identification_number(&new_user.details.identification_number, None)?
            {
                warn!(
                    identification_number = %new_user.details.identification_number,
                    existing_user_id = %existing.user_id,
                    "Creating user with an identification number already in use"
                );
            }
            ensure_not_cancelled(cancel)?;
            repo.insert_user(&new_user)
        })?;

        info!(user_id = %user_id, "Created user");
        Ok(CommandResult::success(user_id))
    }
}

/// Replaces the editable fields of an active user.
///
/// The collision check covers every other user, active or not, and runs in
/// the same write transaction as the update.
pub struct UpdateUserHandler<S> {
    store: SharedStore<S>,
}

impl<S: Store> UpdateUserHandler<S> {
    #[must_use]
    pub const fn new(store: SharedStore<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: Store> Handler<UpdateUser> for UpdateUserHandler<S> {
    async fn handle(
        &self,
        request: UpdateUser,
        cancel: &CancellationToken,
    ) -> Result<CommandResult, CoreError> {
        let mut store = acquire(&self.store, cancel).await?;
        let user_id: UserId = request.user_id;
        let details = request.details;

        let outcome: CommandResult = store.write(|repo| {
            let Some(mut user) = repo.find_active_user(user_id)? else {
                return Ok(CommandResult::failure(DomainError::UserNotFound { user_id }));
            };

            if repo
                .find_user_by_identification_number(&details.identification_number, Some(user_id))?
                .is_some()
            {
                return Ok(CommandResult::failure(
                    DomainError::DuplicateIdentificationNumber {
                        identification_number: details.identification_number,
                    },
                ));
            }

            user.apply_details(details);
            ensure_not_cancelled(cancel)?;
            repo.update_user(&user)?;
            Ok(CommandResult::ok())
        })?;

        if outcome.is_success() {
            info!(user_id = %user_id, "Updated user");
        } else {
            warn!(user_id = %user_id, errors = ?outcome.messages(), "Rejected user update");
        }
        Ok(outcome)
    }
}

/// Soft-deletes an active user. Assignments of the user are left in place.
pub struct DeleteUserHandler<S> {
    store: SharedStore<S>,
}

impl<S: Store> DeleteUserHandler<S> {
    #[must_use]
    pub const fn new(store: SharedStore<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: Store> Handler<DeleteUser> for DeleteUserHandler<S> {
    async fn handle(
        &self,
        request: DeleteUser,
        cancel: &CancellationToken,
    ) -> Result<CommandResult, CoreError> {
        let mut store = acquire(&self.store, cancel).await?;
        let user_id: UserId = request.user_id;

        let outcome: CommandResult = store.write(|repo| {
            let Some(mut user) = repo.find_active_user(user_id)? else {
                return Ok(CommandResult::failure(DomainError::UserNotFound { user_id }));
            };
            user.deactivate();
            ensure_not_cancelled(cancel)?;
            repo.update_user(&user)?;
            Ok(CommandResult::ok())
        })?;

        if outcome.is_success() {
            info!(user_id = %user_id, "Deactivated user");
        } else {
            warn!(user_id = %user_id, errors = ?outcome.messages(), "Rejected user deletion");
        }
        Ok(outcome)
    }
}
