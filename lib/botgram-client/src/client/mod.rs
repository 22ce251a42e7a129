// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Contains client-specific configuration and types.

mod bots;
#[allow(clippy::module_inception)]
mod client;
mod cursor;
mod messages;
mod net;
mod retry_policy;
mod updates;

pub(crate) use client::ClientInner;
pub use client::{Client, ClientConfiguration, UpdatesConfiguration};
pub use cursor::{
    AllowedUpdates, CursorState, FetchOffset, FetchRequest, Limit, LimitOutOfRange, MAX_LIMIT,
    ReceiverOptions, UpdateCursor,
};
pub use retry_policy::{AutoSleep, NoRetries, RetryContext, RetryPolicy};
pub use updates::{FetchUpdates, UpdateStream};
