// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types for the staffdesk roster: users, departments and the
//! assignments that join them, plus the rule violations reported to callers.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use types::{Assignment, Department, DepartmentId, NewUser, User, UserDetails, UserId};
pub use validation::{
    MAX_DEPARTMENT_DESCRIPTION_LEN, MAX_DEPARTMENT_NAME_LEN, MAX_EMAIL_LEN,
    MAX_IDENTIFICATION_NUMBER_LEN, MAX_NAME_LEN, MAX_PHONE_LEN, is_valid_email,
    validate_department_fields, validate_user_details,
};
