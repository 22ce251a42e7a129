// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::RemoteCall;
use crate::types::{Update, UpdateType};
use serde::Serialize;
use std::time::Duration;

/// Offset that requests only the most recent update still buffered by the server.
///
/// Negative offsets retrieve updates starting from `-offset` update from the end of the
/// queue, and all previous updates will be forgotten.
pub const LATEST_UPDATE_OFFSET: i64 = -1;

/// Receive incoming updates using long polling.
///
/// An update is considered confirmed as soon as `getUpdates` is called with an
/// `offset` higher than its `update_id`. This method will not work if an outgoing
/// webhook is set up.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GetUpdates {
    /// Identifier of the first update to be returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Limits the number of updates to be retrieved. Values between 1-100 are accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u8>,
    /// Timeout in seconds for long polling. Defaults to 0, i.e. usual short polling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    /// The update types the bot wants to receive.
    ///
    /// An empty list means all update types except `chat_member`, `message_reaction`,
    /// and `message_reaction_count`. If not specified, the previous setting will be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<UpdateType>>,
}

impl RemoteCall for GetUpdates {
    const METHOD: &'static str = "getUpdates";
    type Return = Vec<Update>;

    fn long_poll(&self) -> Option<Duration> {
        self.timeout
            .filter(|&secs| secs > 0)
            .map(|secs| Duration::from_secs(secs.into()))
    }
}

/// Remove the webhook integration, so that `getUpdates` can be used.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeleteWebhook {
    /// Pass `true` to drop all pending updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_pending_updates: Option<bool>,
}

impl RemoteCall for DeleteWebhook {
    const METHOD: &'static str = "deleteWebhook";
    type Return = bool;
}
