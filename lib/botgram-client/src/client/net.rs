// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{Client, ClientConfiguration, ClientInner, RetryContext};
use botgram_sender::{InvocationError, Sender};
use botgram_types::RemoteCall;
use log::info;
use std::{num::NonZeroU32, ops::ControlFlow, sync::Arc, time::Duration};
use tokio::time::sleep;

/// Method implementations directly related with network connectivity.
impl Client {
    /// Creates a new client that sends its requests through the given [`Sender`].
    ///
    /// # Examples
    ///
    /// ```
    /// use botgram_client::Client;
    /// use botgram_client::sender::Sender;
    ///
    /// // Note: this is an example value and is not actually valid.
    /// //       Obtain your own by talking to @BotFather.
    /// const TOKEN: &str = "123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11";
    ///
    /// # fn f() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new(Sender::new(TOKEN)?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(sender: Sender) -> Self {
        Self::with_configuration(sender, Default::default())
    }

    /// Like [`Self::new`] but with a custom [`ClientConfiguration`].
    pub fn with_configuration(sender: Sender, configuration: ClientConfiguration) -> Self {
        Self(Arc::new(ClientInner {
            sender,
            configuration,
        }))
    }

    /// Invoke a raw API call, retrying according to the configured [`super::RetryPolicy`].
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: botgram_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// use botgram_client::methods::GetMe;
    ///
    /// dbg!(client.invoke(&GetMe {}).await?);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn invoke<R: RemoteCall + Sync>(
        &self,
        request: &R,
    ) -> Result<R::Return, InvocationError> {
        let mut fail_count = NonZeroU32::MIN;
        let mut slept_so_far = Duration::ZERO;

        loop {
            let error = match self.0.sender.invoke(request).await {
                Ok(response) => break Ok(response),
                Err(e) => e,
            };

            let retry_context = RetryContext {
                fail_count,
                slept_so_far,
                error,
            };
            match self
                .0
                .configuration
                .retry_policy
                .should_retry(&retry_context)
            {
                ControlFlow::Continue(delay) => {
                    info!(
                        "sleeping on {} for {:?} before retrying {}",
                        retry_context.error,
                        delay,
                        R::METHOD,
                    );
                    sleep(delay).await;
                    fail_count = fail_count.saturating_add(1);
                    slept_so_far += delay;
                }
                ControlFlow::Break(()) => break Err(retry_context.error),
            }
        }
    }
}
