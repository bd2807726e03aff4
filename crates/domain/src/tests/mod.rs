// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod types;

use crate::UserDetails;

pub fn create_test_details() -> UserDetails {
    UserDetails {
        identification_number: String::from("A100"),
        first_name: String::from("Ana"),
        last_name: String::from("Lopez"),
        email: String::from("ana.lopez@example.com"),
        phone: String::from("555-0100"),
    }
}
