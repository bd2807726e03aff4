// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use staffdesk::AssignmentRecord;
use staffdesk_domain::{Assignment, Department, DepartmentId, User, UserId};
use tracing::debug;

use super::user_is_active;
use crate::data_models::{AssignmentRow, DepartmentRow, UserRow};
use crate::diesel_schema::{departments, user_departments, users};
use crate::error::PersistenceError;

/// Retrieves the assignment for a pair.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_assignment(
    conn: &mut SqliteConnection,
    user_id: UserId,
    department_id: DepartmentId,
) -> Result<Option<Assignment>, PersistenceError> {
    user_departments::table
        .filter(user_departments::user_id.eq(user_id.value()))
        .filter(user_departments::department_id.eq(department_id.value()))
        .select(AssignmentRow::as_select())
        .first::<AssignmentRow>(conn)
        .optional()?
        .map(Assignment::try_from)
        .transpose()
}

/// Returns `true` if an assignment row exists for the pair, regardless of
/// whether either side is active.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn assignment_exists(
    conn: &mut SqliteConnection,
    user_id: UserId,
    department_id: DepartmentId,
) -> Result<bool, PersistenceError> {
    Ok(diesel::select(diesel::dsl::exists(
        user_departments::table
            .filter(user_departments::user_id.eq(user_id.value()))
            .filter(user_departments::department_id.eq(department_id.value())),
    ))
    .get_result(conn)?)
}

/// Lists assignments of active users with both ends joined in, ordered by
/// user ID then department ID.
///
/// Only the user side is filtered; assignments to inactive departments are
/// returned.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_assignments_of_active_users(
    conn: &mut SqliteConnection,
) -> Result<Vec<AssignmentRecord>, PersistenceError> {
    let rows: Vec<(AssignmentRow, UserRow, DepartmentRow)> = user_departments::table
        .inner_join(users::table)
        .inner_join(departments::table)
        .filter(user_is_active())
        .order((
            user_departments::user_id.asc(),
            user_departments::department_id.asc(),
        ))
        .select((
            AssignmentRow::as_select(),
            UserRow::as_select(),
            DepartmentRow::as_select(),
        ))
        .load(conn)?;

    debug!(count = rows.len(), "Listed assignments of active users");

    rows.into_iter()
        .map(|(assignment, user, department)| {
            Ok(AssignmentRecord {
                assignment: Assignment::try_from(assignment)?,
                user: User::try_from(user)?,
                department: Department::from(department),
            })
        })
        .collect()
}
