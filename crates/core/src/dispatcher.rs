// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Routes typed requests to their handlers.
//!
//! The routing table is assembled once by a `DispatcherBuilder` and frozen by
//! `build`. After that the dispatcher is a cheap clone around an immutable
//! map keyed by the request's `TypeId`.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::CoreError;
use crate::handler::Handler;
use crate::handlers::{
    AssignUserToDepartmentHandler, CreateUserHandler, DeleteUserHandler, GetUserByIdHandler,
    ListDepartmentsHandler, ListRecentUsersHandler, ListUserAssignmentsHandler, ListUsersHandler,
    RemoveUserAssignmentHandler, UpdateUserHandler,
};
use crate::request::Request;
use crate::store::{SharedStore, Store};

/// A registered handler, type-erased. The boxed value is always an
/// `Arc<dyn Handler<R>>` for the `R` whose `TypeId` keys the route.
struct Route {
    request: &'static str,
    handler: Box<dyn Any + Send + Sync>,
}

/// Collects handler registrations.
#[derive(Default)]
pub struct DispatcherBuilder {
    routes: HashMap<TypeId, Route>,
    duplicate: Option<&'static str>,
}

impl DispatcherBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` as the handler for `R`.
    ///
    /// Registering a second handler for the same request type is recorded
    /// and reported by `build`.
    #[must_use]
    pub fn register<R, H>(mut self, handler: H) -> Self
    where
        R: Request,
        H: Handler<R> + 'static,
    {
        let request: &'static str = type_name::<R>();
        let handler: Arc<dyn Handler<R>> = Arc::new(handler);
        let previous = self.routes.insert(
            TypeId::of::<R>(),
            Route {
                request,
                handler: Box::new(handler),
            },
        );
        if previous.is_some() && self.duplicate.is_none() {
            self.duplicate = Some(request);
        }
        self
    }

    /// Freezes the routing table.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateRegistration` if any request type was
    /// registered more than once.
    pub fn build(self) -> Result<Dispatcher, CoreError> {
        if let Some(request) = self.duplicate {
            return Err(CoreError::DuplicateRegistration { request });
        }
        debug!(routes = self.routes.len(), "Built dispatcher");
        Ok(Dispatcher {
            routes: Arc::new(self.routes),
        })
    }
}

/// An immutable request-to-handler map.
#[derive(Clone)]
pub struct Dispatcher {
    routes: Arc<HashMap<TypeId, Route>>,
}

impl Dispatcher {
    #[must_use]
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    /// Sends `request` to its handler and returns the handler's response.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnregisteredRequest` if no handler is registered
    /// for `R`, or whatever the handler returns.
    pub async fn send<R: Request>(
        &self,
        request: R,
        cancel: &CancellationToken,
    ) -> Result<R::Response, CoreError> {
        let handler: Arc<dyn Handler<R>> = self.handler::<R>()?;
        handler.handle(request, cancel).await
    }

    /// Returns `true` if a handler is registered for `R`.
    #[must_use]
    pub fn handles<R: Request>(&self) -> bool {
        self.routes.contains_key(&TypeId::of::<R>())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn handler<R: Request>(&self) -> Result<Arc<dyn Handler<R>>, CoreError> {
        self.routes
            .get(&TypeId::of::<R>())
            .and_then(|route| route.handler.downcast_ref::<Arc<dyn Handler<R>>>())
            .cloned()
            .ok_or(CoreError::UnregisteredRequest {
                request: type_name::<R>(),
            })
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut requests: Vec<&'static str> =
            self.routes.values().map(|route| route.request).collect();
        requests.sort_unstable();
        f.debug_struct("Dispatcher")
            .field("requests", &requests)
            .finish()
    }
}

/// Builds the dispatcher with every command and query handler wired to
/// `store`.
///
/// # Errors
///
/// Returns an error if a request type is registered twice.
pub fn dispatcher<S: Store>(store: SharedStore<S>) -> Result<Dispatcher, CoreError> {
    Dispatcher::builder()
        .register(CreateUserHandler::new(Arc::clone(&store)))
        .register(UpdateUserHandler::new(Arc::clone(&store)))
        .register(DeleteUserHandler::new(Arc::clone(&store)))
        .register(AssignUserToDepartmentHandler::new(Arc::clone(&store)))
        .register(RemoveUserAssignmentHandler::new(Arc::clone(&store)))
        .register(ListDepartmentsHandler::new(Arc::clone(&store)))
        .register(ListUserAssignmentsHandler::new(Arc::clone(&store)))
        .register(ListUsersHandler::new(Arc::clone(&store)))
        .register(ListRecentUsersHandler::new(Arc::clone(&store)))
        .register(GetUserByIdHandler::new(store))
        .build()
}
