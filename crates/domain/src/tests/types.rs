// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::datetime;

use super::create_test_details;
use crate::{User, UserDetails, UserId};

fn create_test_user() -> User {
    let details: UserDetails = create_test_details();
    User {
        user_id: UserId::new(1),
        identification_number: details.identification_number,
        first_name: details.first_name,
        last_name: details.last_name,
        email: details.email,
        phone: details.phone,
        created_at: datetime!(2026-01-04 09:30 UTC),
        is_active: true,
    }
}

#[test]
fn test_display_name_joins_first_and_last() {
    let user: User = create_test_user();
    assert_eq!(user.display_name(), "Ana Lopez");
}

#[test]
fn test_apply_details_keeps_identity_and_creation_time() {
    let mut user: User = create_test_user();
    let details: UserDetails = UserDetails {
        identification_number: String::from("B200"),
        first_name: String::from("Beatriz"),
        last_name: String::from("Mora"),
        email: String::from("b.mora@example.com"),
        phone: String::from("555-0199"),
    };

    user.apply_details(details);

    assert_eq!(user.user_id, UserId::new(1));
    assert_eq!(user.created_at, datetime!(2026-01-04 09:30 UTC));
    assert!(user.is_active);
    assert_eq!(user.identification_number, "B200");
    assert_eq!(user.display_name(), "Beatriz Mora");
}

#[test]
fn test_deactivate_only_clears_active_flag() {
    let mut user: User = create_test_user();
    let before: User = user.clone();

    user.deactivate();

    assert!(!user.is_active);
    assert_eq!(user.identification_number, before.identification_number);
    assert_eq!(user.email, before.email);
    assert_eq!(user.created_at, before.created_at);
}

#[test]
fn test_trimmed_strips_whitespace() {
    let details: UserDetails = UserDetails {
        identification_number: String::from("  A100 "),
        first_name: String::from("\tAna"),
        last_name: String::from("Lopez  "),
        email: String::from(" ana@example.com"),
        phone: String::from("555 "),
    };

    let trimmed: UserDetails = details.trimmed();
    assert_eq!(trimmed.identification_number, "A100");
    assert_eq!(trimmed.first_name, "Ana");
    assert_eq!(trimmed.last_name, "Lopez");
    assert_eq!(trimmed.email, "ana@example.com");
    assert_eq!(trimmed.phone, "555");
}
