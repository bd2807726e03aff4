// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod assignments;
mod queries;
mod users;

pub use assignments::{AssignUserToDepartmentHandler, RemoveUserAssignmentHandler};
pub use queries::{
    GetUserByIdHandler, ListDepartmentsHandler, ListRecentUsersHandler,
    ListUserAssignmentsHandler, ListUsersHandler,
};
pub use users::{CreateUserHandler, DeleteUserHandler, UpdateUserHandler};
