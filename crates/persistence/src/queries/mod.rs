// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read queries.
//!
//! The soft-delete predicates are defined once here. Every query that
//! reads "active" rows composes `user_is_active` or `department_is_active`
//! instead of restating the condition.

pub mod assignments;
pub mod departments;
pub mod users;

use diesel::dsl;
use diesel::prelude::*;

use crate::data_models::ACTIVE;
use crate::diesel_schema::{departments as departments_table, users as users_table};

pub type UserIsActive = dsl::Eq<users_table::is_active, i32>;
pub type DepartmentIsActive = dsl::Eq<departments_table::is_active, i32>;
pub type ActiveUsers = dsl::Filter<users_table::table, UserIsActive>;
pub type ActiveDepartments = dsl::Filter<departments_table::table, DepartmentIsActive>;

/// Matches users that have not been soft-deleted.
#[must_use]
pub fn user_is_active() -> UserIsActive {
    users_table::is_active.eq(ACTIVE)
}

/// Matches departments that are open for listing and assignment.
#[must_use]
pub fn department_is_active() -> DepartmentIsActive {
    departments_table::is_active.eq(ACTIVE)
}

/// The `users` table restricted to active rows.
#[must_use]
pub fn active_users() -> ActiveUsers {
    users_table::table.filter(user_is_active())
}

/// The `departments` table restricted to active rows.
#[must_use]
pub fn active_departments() -> ActiveDepartments {
    departments_table::table.filter(department_is_active())
}
