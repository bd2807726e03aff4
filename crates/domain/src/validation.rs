// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::UserDetails;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Maximum stored length of an identification number.
pub const MAX_IDENTIFICATION_NUMBER_LEN: usize = 20;
/// Maximum stored length of a first or last name.
pub const MAX_NAME_LEN: usize = 50;
/// Maximum stored length of an email address.
pub const MAX_EMAIL_LEN: usize = 100;
/// Maximum stored length of a phone number.
pub const MAX_PHONE_LEN: usize = 20;
/// Maximum stored length of a department name.
pub const MAX_DEPARTMENT_NAME_LEN: usize = 100;
/// Maximum stored length of a department description.
pub const MAX_DEPARTMENT_DESCRIPTION_LEN: usize = 255;

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    RegexBuilder::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
        .case_insensitive(true)
        .build()
        .ok()
});

/// Returns `true` if `email` has the basic `local@domain.tld` shape.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}

/// Validates the caller-supplied user fields before a command is issued.
///
/// Command handlers do not re-check formats; they only enforce existence and
/// uniqueness. Callers run this first and report every problem at once.
///
/// # Arguments
///
/// * `details` - The fields to validate. Callers should pass trimmed values.
///
/// # Errors
///
/// Returns one `DomainError::InvalidField` per offending field when:
/// - a field is blank
/// - a field exceeds its stored length
/// - the email is not `local@domain.tld` shaped
pub fn validate_user_details(details: &UserDetails) -> Result<(), Vec<DomainError>> {
    let mut errors: Vec<DomainError> = Vec::new();

    check_required(
        &mut errors,
        "identification_number",
        &details.identification_number,
        MAX_IDENTIFICATION_NUMBER_LEN,
    );
    check_required(&mut errors, "first_name", &details.first_name, MAX_NAME_LEN);
    check_required(&mut errors, "last_name", &details.last_name, MAX_NAME_LEN);

    if check_required(&mut errors, "email", &details.email, MAX_EMAIL_LEN)
        && !is_valid_email(&details.email)
    {
        errors.push(DomainError::InvalidField {
            field: "email",
            message: String::from("expected the form user@domain.com"),
        });
    }

    check_required(&mut errors, "phone", &details.phone, MAX_PHONE_LEN);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the fields of a department created through the seed path.
///
/// # Errors
///
/// Returns an error if the name is blank or either field is too long.
pub fn validate_department_fields(
    name: &str,
    description: Option<&str>,
) -> Result<(), DomainError> {
    let mut errors: Vec<DomainError> = Vec::new();
    check_required(&mut errors, "name", name, MAX_DEPARTMENT_NAME_LEN);
    if description.is_some_and(|d| d.chars().count() > MAX_DEPARTMENT_DESCRIPTION_LEN) {
        errors.push(too_long("description", MAX_DEPARTMENT_DESCRIPTION_LEN));
    }
    errors.into_iter().next().map_or(Ok(()), Err)
}

/// Pushes an error for a blank or oversized field. Returns `true` if the
/// field passed both checks.
fn check_required(
    errors: &mut Vec<DomainError>,
    field: &'static str,
    value: &str,
    max_len: usize,
) -> bool {
    if value.trim().is_empty() {
        errors.push(DomainError::InvalidField {
            field,
            message: String::from("is required"),
        });
        return false;
    }
    if value.chars().count() > max_len {
        errors.push(too_long(field, max_len));
        return false;
    }
    true
}

fn too_long(field: &'static str, max_len: usize) -> DomainError {
    DomainError::InvalidField {
        field,
        message: format!("must be at most {max_len} characters"),
    }
}
