// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command and query handlers for the staffdesk roster.
//!
//! Callers build typed requests (`CreateUser`, `ListUsers`, ...) and send
//! them through a `Dispatcher`. Handlers reach storage only through the
//! `Store` contract, so any transactional backend can sit underneath.

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

mod command;
mod dispatcher;
mod dto;
mod error;
mod handler;
mod handlers;
mod outcome;
mod query;
mod request;
mod store;

#[cfg(test)]
mod tests;

pub use command::{
    AssignUserToDepartment, CreateUser, DeleteUser, RemoveUserAssignment, UpdateUser,
};
pub use dispatcher::{Dispatcher, DispatcherBuilder, dispatcher};
pub use dto::{DepartmentDto, UserAssignmentDto, UserDto};
pub use error::CoreError;
pub use handler::Handler;
pub use handlers::{
    AssignUserToDepartmentHandler, CreateUserHandler, DeleteUserHandler, GetUserByIdHandler,
    ListDepartmentsHandler, ListRecentUsersHandler, ListUserAssignmentsHandler, ListUsersHandler,
    RemoveUserAssignmentHandler, UpdateUserHandler,
};
pub use outcome::CommandResult;
pub use query::{
    GetUserById, ListDepartments, ListRecentUsers, ListUserAssignments, ListUsers,
    RECENT_USERS_LIMIT,
};
pub use request::Request;
pub use store::{
    AssignmentRecord, Repository, SharedStore, Store, StoreError, UserOrder, shared,
};
