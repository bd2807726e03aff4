// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{DepartmentId, UserId};

/// Recoverable rule violations reported back to the caller.
///
/// These never represent infrastructure faults. They are carried inside a
/// failed command result so callers can branch on them without treating
/// them as errors of the system itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No active user with this identifier exists.
    UserNotFound {
        /// The identifier that was looked up.
        user_id: UserId,
    },
    /// No active department with this identifier exists.
    DepartmentNotFound {
        /// The identifier that was looked up.
        department_id: DepartmentId,
    },
    /// The user is not assigned to the department.
    AssignmentNotFound {
        /// The user side of the pair.
        user_id: UserId,
        /// The department side of the pair.
        department_id: DepartmentId,
    },
    /// Another user already carries this identification number.
    DuplicateIdentificationNumber {
        /// The conflicting number.
        identification_number: String,
    },
    /// The user is already assigned to the department.
    AlreadyAssigned {
        /// The user side of the pair.
        user_id: UserId,
        /// The department side of the pair.
        department_id: DepartmentId,
    },
    /// A caller-supplied field failed format validation.
    InvalidField {
        /// The field name.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },
}

impl DomainError {
    /// Returns `true` for the not-found family of failures.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound { .. }
                | Self::DepartmentNotFound { .. }
                | Self::AssignmentNotFound { .. }
        )
    }

    /// Returns `true` for uniqueness conflicts.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::DuplicateIdentificationNumber { .. } | Self::AlreadyAssigned { .. }
        )
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserNotFound { user_id } => write!(f, "User {user_id} not found"),
            Self::DepartmentNotFound { department_id } => {
                write!(f, "Department {department_id} not found")
            }
            Self::AssignmentNotFound {
                user_id,
                department_id,
            } => {
                write!(
                    f,
                    "Assignment of user {user_id} to department {department_id} not found"
                )
            }
            Self::DuplicateIdentificationNumber {
                identification_number,
            } => {
                write!(
                    f,
                    "A user with identification number '{identification_number}' already exists"
                )
            }
            Self::AlreadyAssigned {
                user_id,
                department_id,
            } => {
                write!(
                    f,
                    "User {user_id} is already assigned to department {department_id}"
                )
            }
            Self::InvalidField { field, message } => {
                write!(f, "Invalid {field}: {message}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
