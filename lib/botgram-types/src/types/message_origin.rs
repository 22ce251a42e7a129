// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{Chat, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The origin of a forwarded message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageOrigin {
    /// The message was originally sent by a known user.
    User {
        #[serde(with = "chrono::serde::ts_seconds")]
        date: DateTime<Utc>,
        sender_user: User,
    },
    /// The message was originally sent by an unknown user.
    HiddenUser {
        #[serde(with = "chrono::serde::ts_seconds")]
        date: DateTime<Utc>,
        sender_user_name: String,
    },
    /// The message was originally sent on behalf of a chat to a group chat.
    Chat {
        #[serde(with = "chrono::serde::ts_seconds")]
        date: DateTime<Utc>,
        sender_chat: Chat,
        /// For messages originally sent by an anonymous chat administrator,
        /// original message author signature.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        author_signature: Option<String>,
    },
    /// The message was originally sent to a channel chat.
    Channel {
        #[serde(with = "chrono::serde::ts_seconds")]
        date: DateTime<Utc>,
        chat: Chat,
        message_id: i32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        author_signature: Option<String>,
    },
}

impl MessageOrigin {
    /// Date the message was sent originally.
    pub fn date(&self) -> DateTime<Utc> {
        match self {
            Self::User { date, .. }
            | Self::HiddenUser { date, .. }
            | Self::Chat { date, .. }
            | Self::Channel { date, .. } => *date,
        }
    }

    /// Display name of whoever sent the message originally.
    pub fn sender_name(&self) -> Option<String> {
        match self {
            Self::User { sender_user, .. } => Some(sender_user.full_name()),
            Self::HiddenUser {
                sender_user_name, ..
            } => Some(sender_user_name.clone()),
            Self::Chat { sender_chat, .. } => sender_chat.name().map(str::to_string),
            Self::Channel { chat, .. } => chat.name().map(str::to_string),
        }
    }
}
