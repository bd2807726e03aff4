// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A typed message routed by the dispatcher to exactly one handler.
///
/// The associated `Response` fixes what the handler hands back, so a caller
/// of `Dispatcher::send` gets a statically typed result.
pub trait Request: Send + 'static {
    /// What the handler returns on completion.
    type Response: Send + 'static;
}
