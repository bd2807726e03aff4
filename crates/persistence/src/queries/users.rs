// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use staffdesk::UserOrder;
use staffdesk_domain::{User, UserId};
use tracing::debug;

use super::active_users;
use crate::data_models::UserRow;
use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Retrieves a user by ID, active or not.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the user does not exist.
pub fn find_user(
    conn: &mut SqliteConnection,
    user_id: UserId,
) -> Result<Option<User>, PersistenceError> {
    debug!(user_id = %user_id, "Looking up user");

    users::table
        .filter(users::user_id.eq(user_id.value()))
        .select(UserRow::as_select())
        .first::<UserRow>(conn)
        .optional()?
        .map(User::try_from)
        .transpose()
}

/// Retrieves an active user by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the user does not exist or is inactive.
pub fn find_active_user(
    conn: &mut SqliteConnection,
    user_id: UserId,
) -> Result<Option<User>, PersistenceError> {
    debug!(user_id = %user_id, "Looking up active user");

    active_users()
        .filter(users::user_id.eq(user_id.value()))
        .select(UserRow::as_select())
        .first::<UserRow>(conn)
        .optional()?
        .map(User::try_from)
        .transpose()
}

/// Finds the lowest-numbered user, active or not, holding
/// `identification_number`, ignoring `excluding`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_user_by_identification_number(
    conn: &mut SqliteConnection,
    identification_number: &str,
    excluding: Option<UserId>,
) -> Result<Option<User>, PersistenceError> {
    let mut query = users::table
        .filter(users::identification_number.eq(identification_number))
        .select(UserRow::as_select())
        .order(users::user_id.asc())
        .into_boxed();
    if let Some(excluded) = excluding {
        query = query.filter(users::user_id.ne(excluded.value()));
    }

    query
        .first::<UserRow>(conn)
        .optional()?
        .map(User::try_from)
        .transpose()
}

/// Lists active users in the requested order.
///
/// Ties are broken by user ID so the order is total.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_active_users(
    conn: &mut SqliteConnection,
    order: UserOrder,
    limit: Option<u32>,
) -> Result<Vec<User>, PersistenceError> {
    let mut query = active_users().select(UserRow::as_select()).into_boxed();
    query = match order {
        UserOrder::ByName => query.order((
            users::first_name.asc(),
            users::last_name.asc(),
            users::user_id.asc(),
        )),
        UserOrder::NewestFirst => query.order((users::created_at.desc(), users::user_id.desc())),
    };
    if let Some(limit) = limit {
        query = query.limit(i64::from(limit));
    }

    let rows: Vec<UserRow> = query.load(conn)?;
    debug!(count = rows.len(), ?order, "Listed active users");
    rows.into_iter().map(User::try_from).collect()
}
