// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and the conversions between rows and domain values.

use diesel::prelude::*;
use staffdesk_domain::{Assignment, Department, DepartmentId, User, UserId};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::diesel_schema::{departments, user_departments, users};
use crate::error::PersistenceError;

/// Fixed-width UTC timestamps, so text ordering in SQL matches time ordering.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]Z");

/// Stored value of `is_active` for live rows.
pub const ACTIVE: i32 = 1;
/// Stored value of `is_active` for soft-deleted rows.
pub const INACTIVE: i32 = 0;

/// Formats a timestamp for storage, normalized to UTC with microsecond
/// precision.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn format_timestamp(value: OffsetDateTime) -> Result<String, PersistenceError> {
    Ok(value.to_offset(UtcOffset::UTC).format(TIMESTAMP_FORMAT)?)
}

/// Parses a stored timestamp.
///
/// # Errors
///
/// Returns an error if `value` is not in the storage format.
pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    Ok(PrimitiveDateTime::parse(value, TIMESTAMP_FORMAT)?.assume_utc())
}

pub const fn flag(active: bool) -> i32 {
    if active { ACTIVE } else { INACTIVE }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    pub user_id: i64,
    pub identification_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: String,
    pub is_active: i32,
}

impl TryFrom<UserRow> for User {
    type Error = PersistenceError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: UserId::new(row.user_id),
            identification_number: row.identification_number,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            created_at: parse_timestamp(&row.created_at)?,
            is_active: row.is_active == ACTIVE,
        })
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = departments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DepartmentRow {
    pub department_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_active: i32,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Self {
            department_id: DepartmentId::new(row.department_id),
            name: row.name,
            description: row.description,
            is_active: row.is_active == ACTIVE,
        }
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = user_departments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssignmentRow {
    pub user_id: i64,
    pub department_id: i64,
    pub assigned_at: String,
}

impl TryFrom<AssignmentRow> for Assignment {
    type Error = PersistenceError;

    fn try_from(row: AssignmentRow) -> Result<Self, Self::Error> {
        Ok(Self::new(
            UserId::new(row.user_id),
            DepartmentId::new(row.department_id),
            parse_timestamp(&row.assigned_at)?,
        ))
    }
}
