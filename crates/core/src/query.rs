// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only requests. Every query sees active rows only and answers with
//! flattened projections.

use staffdesk_domain::UserId;

use crate::dto::{DepartmentDto, UserAssignmentDto, UserDto};
use crate::request::Request;

/// How many users `ListRecentUsers` returns.
pub const RECENT_USERS_LIMIT: u32 = 10;

/// Active departments, ordered by id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListDepartments;

impl Request for ListDepartments {
    type Response = Vec<DepartmentDto>;
}

/// Assignments of active users, ordered by user id then department id.
///
/// Assignments to inactive departments are still listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListUserAssignments;

impl Request for ListUserAssignments {
    type Response = Vec<UserAssignmentDto>;
}

/// Active users, ordered by first name then last name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListUsers;

impl Request for ListUsers {
    type Response = Vec<UserDto>;
}

/// The most recently created active users, newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListRecentUsers;

impl Request for ListRecentUsers {
    type Response = Vec<UserDto>;
}

/// A single active user. Missing and inactive users both answer `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetUserById {
    pub user_id: UserId,
}

impl Request for GetUserById {
    type Response = Option<UserDto>;
}
