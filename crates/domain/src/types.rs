// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Store-assigned identity of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Store-assigned identity of a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentId(i64);

impl DepartmentId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identity fields of a user that callers supply on create and update.
///
/// These are the only user fields a caller may change. Identity, creation
/// time and the active flag are owned by the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    /// National or company identification number.
    pub identification_number: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email, `local@domain.tld` shaped.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
}

impl UserDetails {
    /// Returns a copy with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            identification_number: self.identification_number.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }
}

/// A person on the roster.
///
/// Users are never physically removed. Deleting a user clears `is_active`,
/// after which the user disappears from every read path and can no longer be
/// assigned to a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Canonical identifier, immutable after creation.
    pub user_id: UserId,
    /// National or company identification number.
    pub identification_number: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// When the user was created (UTC). Never changes.
    pub created_at: OffsetDateTime,
    /// `false` once the user has been soft-deleted.
    pub is_active: bool,
}

impl User {
    /// Returns the "First Last" form used in assignment listings.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Overwrites the caller-editable fields.
    ///
    /// `user_id`, `created_at` and `is_active` are left untouched.
    pub fn apply_details(&mut self, details: UserDetails) {
        self.identification_number = details.identification_number;
        self.first_name = details.first_name;
        self.last_name = details.last_name;
        self.email = details.email;
        self.phone = details.phone;
    }

    /// Soft-deletes the user. One-way: there is no reactivation.
    pub const fn deactivate(&mut self) {
        self.is_active = false;
    }
}

/// A user that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// The caller-supplied fields.
    pub details: UserDetails,
    /// Creation time (UTC).
    pub created_at: OffsetDateTime,
}

impl NewUser {
    /// Creates an active user stamped with the given creation time.
    #[must_use]
    pub const fn new(details: UserDetails, created_at: OffsetDateTime) -> Self {
        Self {
            details,
            created_at,
        }
    }
}

/// An organizational unit users can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Canonical identifier.
    pub department_id: DepartmentId,
    /// Unique name across all departments, active or not.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Inactive departments are hidden from listings and cannot receive
    /// new assignments.
    pub is_active: bool,
}

/// The join row between a user and a department.
///
/// At most one assignment exists per `(user_id, department_id)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The assigned user.
    pub user_id: UserId,
    /// The department the user is assigned to.
    pub department_id: DepartmentId,
    /// When the assignment was made (UTC).
    pub assigned_at: OffsetDateTime,
}

impl Assignment {
    /// Creates an assignment for the pair, stamped with `assigned_at`.
    #[must_use]
    pub const fn new(
        user_id: UserId,
        department_id: DepartmentId,
        assigned_at: OffsetDateTime,
    ) -> Self {
        Self {
            user_id,
            department_id,
            assigned_at,
        }
    }
}
