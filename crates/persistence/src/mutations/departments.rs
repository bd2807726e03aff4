// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Department writes. Departments are managed through the administrative
//! path only; no command mutates them.

use diesel::SqliteConnection;
use diesel::prelude::*;
use staffdesk_domain::DepartmentId;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::{ACTIVE, flag};
use crate::diesel_schema::departments;
use crate::error::PersistenceError;

/// Inserts an active department.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the name is taken, or an
/// error if the insert fails.
pub fn insert_department(
    conn: &mut SqliteConnection,
    name: &str,
    description: Option<&str>,
) -> Result<DepartmentId, PersistenceError> {
    diesel::insert_into(departments::table)
        .values((
            departments::name.eq(name),
            departments::description.eq(description),
            departments::is_active.eq(ACTIVE),
        ))
        .execute(conn)?;

    let department_id: i64 = conn.get_last_insert_rowid()?;
    info!(department_id, name, "Created department");
    Ok(DepartmentId::new(department_id))
}

/// Opens or closes a department.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the department does not exist.
pub fn set_department_active(
    conn: &mut SqliteConnection,
    department_id: DepartmentId,
    is_active: bool,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(departments::table)
        .filter(departments::department_id.eq(department_id.value()))
        .set(departments::is_active.eq(flag(is_active)))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "department {department_id}"
        )));
    }
    info!(department_id = %department_id, is_active, "Changed department status");
    Ok(())
}
