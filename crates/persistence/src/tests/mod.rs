// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod scenario_tests;

use std::sync::Arc;

use staffdesk::{Dispatcher, SharedStore, dispatcher, shared};
use staffdesk_domain::UserDetails;
use tokio_util::sync::CancellationToken;

use crate::Persistence;

pub fn create_test_details(identification_number: &str, first_name: &str) -> UserDetails {
    UserDetails {
        identification_number: identification_number.to_string(),
        first_name: first_name.to_string(),
        last_name: String::from("Lopez"),
        email: format!("{}@example.com", first_name.to_lowercase()),
        phone: String::from("555-0100"),
    }
}

pub fn create_test_store() -> SharedStore<Persistence> {
    shared(Persistence::new_in_memory().unwrap())
}

pub fn create_test_dispatcher(store: &SharedStore<Persistence>) -> Dispatcher {
    dispatcher(Arc::clone(store)).unwrap()
}

pub fn token() -> CancellationToken {
    CancellationToken::new()
}
