// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use tokio::sync::MutexGuard;
use tokio_util::sync::CancellationToken;

use crate::error::CoreError;
use crate::request::Request;
use crate::store::{SharedStore, Store, StoreError};

/// Handles one request type.
///
/// Handlers keep no mutable state between calls and may be invoked
/// concurrently. Rule violations are reported inside the response; `Err` is
/// reserved for store faults and cancellation.
#[async_trait]
pub trait Handler<R: Request>: Send + Sync {
    /// Carries out `request`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Cancelled` if `cancel` fires before the write
    /// commits, or `CoreError::Store` if the store fails.
    async fn handle(&self, request: R, cancel: &CancellationToken)
    -> Result<R::Response, CoreError>;
}

/// Waits for the store, giving up as soon as `cancel` fires.
pub(crate) async fn acquire<'a, S: Store>(
    store: &'a SharedStore<S>,
    cancel: &CancellationToken,
) -> Result<MutexGuard<'a, S>, CoreError> {
    if cancel.is_cancelled() {
        return Err(CoreError::Cancelled);
    }
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(CoreError::Cancelled),
        guard = store.lock() => Ok(guard),
    }
}

/// Last check before a write. Failing here rolls the transaction back.
pub(crate) fn ensure_not_cancelled(cancel: &CancellationToken) -> Result<(), StoreError> {
    if cancel.is_cancelled() {
        Err(StoreError::Cancelled)
    } else {
        Ok(())
    }
}
