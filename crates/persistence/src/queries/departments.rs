// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use staffdesk_domain::{Department, DepartmentId};

use super::active_departments;
use crate::data_models::DepartmentRow;
use crate::diesel_schema::departments;
use crate::error::PersistenceError;

/// Retrieves an active department by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_active_department(
    conn: &mut SqliteConnection,
    department_id: DepartmentId,
) -> Result<Option<Department>, PersistenceError> {
    Ok(active_departments()
        .filter(departments::department_id.eq(department_id.value()))
        .select(DepartmentRow::as_select())
        .first::<DepartmentRow>(conn)
        .optional()?
        .map(Department::from))
}

/// Lists active departments ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_active_departments(
    conn: &mut SqliteConnection,
) -> Result<Vec<Department>, PersistenceError> {
    let rows: Vec<DepartmentRow> = active_departments()
        .select(DepartmentRow::as_select())
        .order(departments::department_id.asc())
        .load(conn)?;
    Ok(rows.into_iter().map(Department::from).collect())
}

/// Counts departments, active or not.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_departments(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(departments::table.count().get_result(conn)?)
}
