// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::store::StoreError;

/// Faults raised by the dispatch layer.
///
/// Rule violations are not faults and never appear here; they travel inside
/// a failed `CommandResult`. A `CoreError` means the request could not be
/// carried out at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The store failed. Not retried.
    #[error("Store failure: {0}")]
    Store(StoreError),
    /// The request was cancelled before any write committed.
    #[error("Request cancelled before commit")]
    Cancelled,
    /// No handler was registered for the request type.
    #[error("No handler registered for request {request}")]
    UnregisteredRequest {
        /// The request type name.
        request: &'static str,
    },
    /// More than one handler was registered for the request type.
    #[error("Multiple handlers registered for request {request}")]
    DuplicateRegistration {
        /// The request type name.
        request: &'static str,
    },
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Cancelled => Self::Cancelled,
            other => Self::Store(other),
        }
    }
}
