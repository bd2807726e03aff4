// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staffdesk_domain::DomainError;

/// The outcome of a command.
///
/// A command either succeeds, optionally carrying a value, or fails with one
/// or more rule violations. Infrastructure faults never show up here; they
/// are returned as `CoreError` instead.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult<T = ()> {
    /// The command took effect.
    Succeeded(T),
    /// The command was rejected and nothing was written.
    Failed(Vec<DomainError>),
}

impl<T> CommandResult<T> {
    /// A success carrying `value`.
    pub const fn success(value: T) -> Self {
        Self::Succeeded(value)
    }

    /// A failure carrying a single violation.
    pub fn failure(error: DomainError) -> Self {
        Self::Failed(vec![error])
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// The violations carried by a failure. Empty on success.
    #[must_use]
    pub fn errors(&self) -> &[DomainError] {
        match self {
            Self::Succeeded(_) => &[],
            Self::Failed(errors) => errors,
        }
    }

    /// Human-readable messages for each violation.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors().iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Succeeded(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Succeeded(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Converts into a `Result`, so callers can use `?` on violations.
    ///
    /// # Errors
    ///
    /// Returns the violations if the command failed.
    pub fn into_result(self) -> Result<T, Vec<DomainError>> {
        match self {
            Self::Succeeded(value) => Ok(value),
            Self::Failed(errors) => Err(errors),
        }
    }
}

impl CommandResult {
    /// A success with no payload.
    pub const fn ok() -> Self {
        Self::Succeeded(())
    }
}
