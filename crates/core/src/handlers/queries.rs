// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::dto::{DepartmentDto, UserAssignmentDto, UserDto};
use crate::error::CoreError;
use crate::handler::{Handler, acquire};
use crate::query::{
    GetUserById, ListDepartments, ListRecentUsers, ListUserAssignments, ListUsers,
    RECENT_USERS_LIMIT,
};
use crate::store::{SharedStore, Store, UserOrder};

macro_rules! query_handler {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        pub struct $name<S> {
            store: SharedStore<S>,
        }

        impl<S: Store> $name<S> {
            #[must_use]
            pub const fn new(store: SharedStore<S>) -> Self {
                Self { store }
            }
        }
    };
}

query_handler!(
    /// Lists active departments.
    ListDepartmentsHandler
);
query_handler!(
    /// Lists assignments of active users.
    ListUserAssignmentsHandler
);
query_handler!(
    /// Lists active users by name.
    ListUsersHandler
);
query_handler!(
    /// Lists the newest active users.
    ListRecentUsersHandler
);
query_handler!(
    /// Looks up a single active user.
    GetUserByIdHandler
);

#[async_trait]
impl<S: Store> Handler<ListDepartments> for ListDepartmentsHandler<S> {
    async fn handle(
        &self,
        _request: ListDepartments,
        cancel: &CancellationToken,
    ) -> Result<Vec<DepartmentDto>, CoreError> {
        let mut store = acquire(&self.store, cancel).await?;
        let departments = store.read(|repo| repo.list_active_departments())?;
        debug!(count = departments.len(), "Listed departments");
        Ok(departments.into_iter().map(DepartmentDto::from).collect())
    }
}

#[async_trait]
impl<S: Store> Handler<ListUserAssignments> for ListUserAssignmentsHandler<S> {
    async fn handle(
        &self,
        _request: ListUserAssignments,
        cancel: &CancellationToken,
    ) -> Result<Vec<UserAssignmentDto>, CoreError> {
        let mut store = acquire(&self.store, cancel).await?;
        let records = store.read(|repo| repo.list_assignments_of_active_users())?;
        debug!(count = records.len(), "Listed assignments");
        Ok(records.into_iter().map(UserAssignmentDto::from).collect())
    }
}

#[async_trait]
impl<S: Store> Handler<ListUsers> for ListUsersHandler<S> {
    async fn handle(
        &self,
        _request: ListUsers,
        cancel: &CancellationToken,
    ) -> Result<Vec<UserDto>, CoreError> {
        let mut store = acquire(&self.store, cancel).await?;
        let users = store.read(|repo| repo.list_active_users(UserOrder::ByName, None))?;
        debug!(count = users.len(), "Listed users");
        Ok(users.into_iter().map(UserDto::from).collect())
    }
}

#[async_trait]
impl<S: Store> Handler<ListRecentUsers> for ListRecentUsersHandler<S> {
    async fn handle(
        &self,
        _request: ListRecentUsers,
        cancel: &CancellationToken,
    ) -> Result<Vec<UserDto>, CoreError> {
        let mut store = acquire(&self.store, cancel).await?;
        let users = store.read(|repo| {
            repo.list_active_users(UserOrder::NewestFirst, Some(RECENT_USERS_LIMIT))
        })?;
        debug!(count = users.len(), "Listed recent users");
        Ok(users.into_iter().map(UserDto::from).collect())
    }
}

#[async_trait]
impl<S: Store> Handler<GetUserById> for GetUserByIdHandler<S> {
    async fn handle(
        &self,
        request: GetUserById,
        cancel: &CancellationToken,
    ) -> Result<Option<UserDto>, CoreError> {
        let mut store = acquire(&self.store, cancel).await?;
        let user = store.read(|repo| repo.find_active_user(request.user_id))?;
        debug!(user_id = %request.user_id, found = user.is_some(), "Looked up user");
        Ok(user.map(UserDto::from))
    }
}
