// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use staffdesk_domain::{Department, DepartmentId, User, UserId};
use time::OffsetDateTime;

use crate::store::AssignmentRecord;

/// A user as returned by queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: UserId,
    pub identification_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub is_active: bool,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id,
            identification_number: user.identification_number,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            created_at: user.created_at,
            is_active: user.is_active,
        }
    }
}

/// A department as returned by queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentDto {
    pub id: DepartmentId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl From<Department> for DepartmentDto {
    fn from(department: Department) -> Self {
        Self {
            id: department.department_id,
            name: department.name,
            description: department.description,
            is_active: department.is_active,
        }
    }
}

/// One row of the assignment listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAssignmentDto {
    pub user_id: UserId,
    /// "First Last".
    pub user_name: String,
    pub department_id: DepartmentId,
    pub department_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub assigned_at: OffsetDateTime,
}

impl From<AssignmentRecord> for UserAssignmentDto {
    fn from(record: AssignmentRecord) -> Self {
        Self {
            user_id: record.assignment.user_id,
            user_name: record.user.display_name(),
            department_id: record.assignment.department_id,
            department_name: record.department.name,
            assigned_at: record.assignment.assigned_at,
        }
    }
}
