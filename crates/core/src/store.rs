// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The store contract consumed by the handlers.
//!
//! A `Store` opens transactions; inside one, a `Repository` exposes point
//! lookups, filtered and ordered reads, inserts, updates and deletes.
//! Returning `Ok` from a `write` closure commits, returning `Err` rolls back.
//!
//! Reads that mention "active" apply the soft-delete filter in the store,
//! so no handler repeats the predicate.

use std::sync::Arc;

use staffdesk_domain::{Assignment, Department, DepartmentId, NewUser, User, UserId};
use tokio::sync::Mutex;

/// Errors surfaced by a store implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The caller cancelled; the transaction was rolled back.
    #[error("Transaction aborted by cancellation")]
    Cancelled,
    /// A uniqueness constraint rejected a write.
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation {
        /// Backend description of the violated constraint.
        constraint: String,
    },
    /// Any other backend failure.
    #[error("{0}")]
    Backend(String),
}

/// Ordering for active-user listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserOrder {
    /// First name, then last name, then id, ascending.
    ByName,
    /// Creation time descending, then id descending.
    NewestFirst,
}

/// An assignment joined with both of its ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRecord {
    /// The join row.
    pub assignment: Assignment,
    /// The assigned user.
    pub user: User,
    /// The department, whatever its active flag.
    pub department: Department,
}

/// Operations available inside a store transaction.
pub trait Repository {
    /// Looks up a user by id regardless of its active flag.
    ///
    /// This is the plain point lookup of the contract. Handlers go through
    /// `find_active_user`; this one lets callers see soft-deleted rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn find_user(&mut self, user_id: UserId) -> Result<Option<User>, StoreError>;

    /// Looks up an active user by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn find_active_user(&mut self, user_id: UserId) -> Result<Option<User>, StoreError>;

    /// Finds any user, active or not, carrying `identification_number`,
    /// skipping `excluding` if given.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn find_user_by_identification_number(
        &mut self,
        identification_number: &str,
        excluding: Option<UserId>,
    ) -> Result<Option<User>, StoreError>;

    /// Lists active users in the given order, truncated to `limit` rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn list_active_users(
        &mut self,
        order: UserOrder,
        limit: Option<u32>,
    ) -> Result<Vec<User>, StoreError>;

    /// Inserts an active user and returns its new identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn insert_user(&mut self, user: &NewUser) -> Result<UserId, StoreError>;

    /// Persists the editable fields and active flag of an existing user.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn update_user(&mut self, user: &User) -> Result<(), StoreError>;

    /// Looks up an active department by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn find_active_department(
        &mut self,
        department_id: DepartmentId,
    ) -> Result<Option<Department>, StoreError>;

    /// Lists active departments ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn list_active_departments(&mut self) -> Result<Vec<Department>, StoreError>;

    /// Looks up the assignment for a pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn find_assignment(
        &mut self,
        user_id: UserId,
        department_id: DepartmentId,
    ) -> Result<Option<Assignment>, StoreError>;

    /// Inserts an assignment.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UniqueViolation` if the pair already exists,
    /// or another error if the store fails.
    fn insert_assignment(&mut self, assignment: &Assignment) -> Result<(), StoreError>;

    /// Deletes the assignment for a pair. Returns `false` if there was none.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn delete_assignment(
        &mut self,
        user_id: UserId,
        department_id: DepartmentId,
    ) -> Result<bool, StoreError>;

    /// Lists assignments whose user is active, ordered by user id then
    /// department id. Department activity is not filtered.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn list_assignments_of_active_users(&mut self) -> Result<Vec<AssignmentRecord>, StoreError>;
}

/// A transactional store.
pub trait Store: Send + 'static {
    /// Runs `work` in a read transaction.
    ///
    /// # Errors
    ///
    /// Returns whatever `work` returns, or an error if the transaction
    /// cannot be opened.
    fn read<T, F>(&mut self, work: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut dyn Repository) -> Result<T, StoreError>;

    /// Runs `work` in a write transaction that holds the store's write lock
    /// from its first statement, so reads and writes inside it are observed
    /// atomically by other writers. Commits if `work` returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns whatever `work` returns, or an error if the transaction
    /// cannot be opened or committed.
    fn write<T, F>(&mut self, work: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut dyn Repository) -> Result<T, StoreError>;
}

/// The store as shared between handlers.
pub type SharedStore<S> = Arc<Mutex<S>>;

/// Wraps a store for sharing between handlers.
pub fn shared<S: Store>(store: S) -> SharedStore<S> {
    Arc::new(Mutex::new(store))
}
