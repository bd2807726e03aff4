// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use staffdesk_domain::{NewUser, User, UserId};
use tracing::debug;

use crate::backend::PersistenceBackend;
use crate::data_models::{ACTIVE, flag, format_timestamp};
use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Inserts an active user.
///
/// # Returns
///
/// The store-assigned user ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_user(conn: &mut SqliteConnection, user: &NewUser) -> Result<UserId, PersistenceError> {
    let created_at: String = format_timestamp(user.created_at)?;

    diesel::insert_into(users::table)
        .values((
            users::identification_number.eq(&user.details.identification_number),
            users::first_name.eq(&user.details.first_name),
            users::last_name.eq(&user.details.last_name),
            users::email.eq(&user.details.email),
            users::phone.eq(&user.details.phone),
            users::created_at.eq(&created_at),
            users::is_active.eq(ACTIVE),
        ))
        .execute(conn)?;

    let user_id: i64 = conn.get_last_insert_rowid()?;
    debug!(user_id, "Inserted user row");
    Ok(UserId::new(user_id))
}

/// Writes the editable fields and the active flag of an existing user.
///
/// `created_at` is never rewritten.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row has this user ID, or an
/// error if the update fails.
pub fn update_user(conn: &mut SqliteConnection, user: &User) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(users::table)
        .filter(users::user_id.eq(user.user_id.value()))
        .set((
            users::identification_number.eq(&user.identification_number),
            users::first_name.eq(&user.first_name),
            users::last_name.eq(&user.last_name),
            users::email.eq(&user.email),
            users::phone.eq(&user.phone),
            users::is_active.eq(flag(user.is_active)),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("user {}", user.user_id)));
    }
    Ok(())
}
