// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use botgram_sender::Sender;

pub(crate) struct ClientInner {
    pub(crate) sender: Sender,
    pub(crate) configuration: ClientConfiguration,
}

/// Wrapper around a [`Sender`] to facilitate interaction with the Bot API.
///
/// This structure is the "entry point" of the library, from which you can start using the rest.
///
/// It can be freely cloned and moved around tasks to invoke requests concurrently, as all
/// clones share the same connection pool and configuration.
#[derive(Clone)]
pub struct Client(pub(crate) Arc<ClientInner>);

/// Configuration that controls the [`Client`] behaviour when making requests.
pub struct ClientConfiguration {
    /// The retry policy to use when encountering errors after invoking a request.
    pub retry_policy: Box<dyn super::RetryPolicy>,
}

/// Configuration that controls [`Client::stream_updates`].
#[derive(Clone, Debug)]
pub struct UpdatesConfiguration {
    /// How long the server may hold each fetch while waiting for updates to arrive.
    ///
    /// A zero duration turns long polling into short polling, which is only useful for
    /// testing. The default is 30 seconds.
    pub poll_timeout: Duration,
}

impl Default for ClientConfiguration {
    /// Returns an instance with an [`AutoSleep::default`] retry policy.
    ///
    /// [`AutoSleep::default`]: super::AutoSleep::default
    fn default() -> Self {
        Self {
            retry_policy: Box::new(super::AutoSleep::default()),
        }
    }
}

impl Default for UpdatesConfiguration {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_secs(30),
        }
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("sender", &self.0.sender)
            .finish_non_exhaustive()
    }
}
