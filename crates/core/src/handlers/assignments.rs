// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use staffdesk_domain::{Assignment, DomainError};
use time::OffsetDateTime;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::command::{AssignUserToDepartment, RemoveUserAssignment};
use crate::error::CoreError;
use crate::handler::{Handler, acquire, ensure_not_cancelled};
use crate::outcome::CommandResult;
use crate::store::{SharedStore, Store, StoreError};

/// Creates an assignment between an active user and an active department.
///
/// Preconditions are checked in order: user, department, existing pair.
/// The pre-check and the insert share one write transaction, and the store's
/// unique index on the pair backs it up. A unique violation is reported as
/// `AlreadyAssigned`, never as a fault.
pub struct AssignUserToDepartmentHandler<S> {
    store: SharedStore<S>,
}

impl<S: Store> AssignUserToDepartmentHandler<S> {
    #[must_use]
    pub const fn new(store: SharedStore<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: Store> Handler<AssignUserToDepartment> for AssignUserToDepartmentHandler<S> {
    async fn handle(
        &self,
        request: AssignUserToDepartment,
        cancel: &CancellationToken,
    ) -> Result<CommandResult, CoreError> {
        let AssignUserToDepartment {
            user_id,
            department_id,
        } = request;
        let mut store = acquire(&self.store, cancel).await?;

        let written = store.write(|repo| {
            if repo.find_active_user(user_id)?.is_none() {
                return Ok(CommandResult::failure(DomainError::UserNotFound { user_id }));
            }
            if repo.find_active_department(department_id)?.is_none() {
                return Ok(CommandResult::failure(DomainError::DepartmentNotFound {
                    department_id,
                }));
            }
            if repo.find_assignment(user_id, department_id)?.is_some() {
                return Ok(CommandResult::failure(DomainError::AlreadyAssigned {
                    user_id,
                    department_id,
                }));
            }

            let assignment: Assignment =
                Assignment::new(user_id, department_id, OffsetDateTime::now_utc());
            ensure_not_cancelled(cancel)?;
            repo.insert_assignment(&assignment)?;
            Ok(CommandResult::ok())
        });

        let outcome: CommandResult = match written {
            Ok(outcome) => outcome,
            Err(StoreError::UniqueViolation { constraint }) => {
                debug!(%constraint, "Assignment insert hit the pair constraint");
                CommandResult::failure(DomainError::AlreadyAssigned {
                    user_id,
                    department_id,
                })
            }
            Err(err) => return Err(err.into()),
        };

        if outcome.is_success() {
            info!(user_id = %user_id, department_id = %department_id, "Assigned user to department");
        } else {
            warn!(
                user_id = %user_id,
                department_id = %department_id,
                errors = ?outcome.messages(),
                "Rejected assignment"
            );
        }
        Ok(outcome)
    }
}

/// Hard-deletes the assignment for a pair.
pub struct RemoveUserAssignmentHandler<S> {
    store: SharedStore<S>,
}

impl<S: Store> RemoveUserAssignmentHandler<S> {
    #[must_use]
    pub const fn new(store: SharedStore<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: Store> Handler<RemoveUserAssignment> for RemoveUserAssignmentHandler<S> {
    async fn handle(
        &self,
        request: RemoveUserAssignment,
        cancel: &CancellationToken,
    ) -> Result<CommandResult, CoreError> {
        let RemoveUserAssignment {
            user_id,
            department_id,
        } = request;
        let mut store = acquire(&self.store, cancel).await?;

        let removed: bool = store.write(|repo| {
            ensure_not_cancelled(cancel)?;
            repo.delete_assignment(user_id, department_id)
        })?;

        if removed {
            info!(user_id = %user_id, department_id = %department_id, "Removed assignment");
            Ok(CommandResult::ok())
        } else {
            warn!(user_id = %user_id, department_id = %department_id, "No assignment to remove");
            Ok(CommandResult::failure(DomainError::AssignmentNotFound {
                user_id,
                department_id,
            }))
        }
    }
}
