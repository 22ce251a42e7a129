// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::time::Duration;
use url::Url;

/// The public Bot API server.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org/";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How the [`crate::Sender`] reaches the Bot API server.
#[derive(Clone, Debug)]
pub struct ConnectionParams {
    /// Base URL of the server.
    ///
    /// Can point to a [local Bot API server](https://github.com/tdlib/telegram-bot-api).
    pub api_url: Url,

    /// Maximum time a request may take, not counting the time the server is
    /// allowed to hold long-polling requests.
    pub request_timeout: Duration,

    /// Value of the `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ConnectionParams {
    fn default() -> Self {
        Self {
            // Safe to unwrap, the constant is a valid URL
            api_url: Url::parse(DEFAULT_API_URL).unwrap(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: format!("botgram/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
