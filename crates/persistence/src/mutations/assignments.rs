// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use staffdesk_domain::{Assignment, DepartmentId, UserId};
use tracing::debug;

use crate::data_models::format_timestamp;
use crate::diesel_schema::user_departments;
use crate::error::PersistenceError;

/// Inserts an assignment.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the pair is already
/// assigned, or an error if the insert fails.
pub fn insert_assignment(
    conn: &mut SqliteConnection,
    assignment: &Assignment,
) -> Result<(), PersistenceError> {
    let assigned_at: String = format_timestamp(assignment.assigned_at)?;

    diesel::insert_into(user_departments::table)
        .values((
            user_departments::user_id.eq(assignment.user_id.value()),
            user_departments::department_id.eq(assignment.department_id.value()),
            user_departments::assigned_at.eq(&assigned_at),
        ))
        .execute(conn)?;

    debug!(
        user_id = %assignment.user_id,
        department_id = %assignment.department_id,
        "Inserted assignment row"
    );
    Ok(())
}

/// Deletes the assignment for a pair.
///
/// # Returns
///
/// `true` if a row was deleted.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_assignment(
    conn: &mut SqliteConnection,
    user_id: UserId,
    department_id: DepartmentId,
) -> Result<bool, PersistenceError> {
    let deleted: usize = diesel::delete(
        user_departments::table
            .filter(user_departments::user_id.eq(user_id.value()))
            .filter(user_departments::department_id.eq(department_id.value())),
    )
    .execute(conn)?;

    Ok(deleted > 0)
}
