// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staffdesk_domain::{DepartmentId, UserDetails, UserId};

use crate::outcome::CommandResult;
use crate::request::Request;

/// Create a new active user.
///
/// Callers validate `details` beforehand; the handler does not re-check
/// formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    /// The fields of the new user.
    pub details: UserDetails,
}

impl Request for CreateUser {
    type Response = CommandResult<UserId>;
}

/// Replace the editable fields of an active user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUser {
    /// The user to update.
    pub user_id: UserId,
    /// The new field values.
    pub details: UserDetails,
}

impl Request for UpdateUser {
    type Response = CommandResult;
}

/// Soft-delete an active user.
///
/// The row and its assignments are kept; the user simply stops appearing in
/// reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteUser {
    /// The user to deactivate.
    pub user_id: UserId,
}

impl Request for DeleteUser {
    type Response = CommandResult;
}

/// Assign an active user to an active department.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignUserToDepartment {
    pub user_id: UserId,
    pub department_id: DepartmentId,
}

impl Request for AssignUserToDepartment {
    type Response = CommandResult;
}

/// Remove the assignment of a user to a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveUserAssignment {
    pub user_id: UserId,
    pub department_id: DepartmentId,
}

impl Request for RemoveUserAssignment {
    type Response = CommandResult;
}
