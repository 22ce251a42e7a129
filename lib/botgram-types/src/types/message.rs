// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{
    Audio, Chat, Document, InlineKeyboardMarkup, Location, MessageOrigin, PhotoSize, User, Video,
    Voice,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message in a chat.
///
/// Most fields are optional, and which ones are present depends on the kind
/// of message. The helper methods cover the most common lookups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier inside this chat.
    #[serde(rename = "message_id")]
    pub id: i32,
    /// Unique identifier of a message thread to which the message belongs; for supergroups only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i32>,
    /// Sender of the message; empty for messages sent to channels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    /// Sender of the message, sent on behalf of a chat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_chat: Option<Chat>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,
    pub chat: Chat,
    /// Information about the original message for forwarded messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_origin: Option<MessageOrigin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_topic_message: Option<bool>,
    /// For replies in the same chat and message thread, the original message.
    ///
    /// The message in this field will not contain further `reply_to_message`
    /// fields even if it itself is a reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_message: Option<Box<Message>>,
    /// Bot through which the message was sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via_bot: Option<User>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub edit_date: Option<DateTime<Utc>>,
    /// The unique identifier of a media message group this message belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    /// Available sizes of the photo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<PhotoSize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<Voice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Inline keyboard attached to the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Message {
    /// The text of the message, or its caption for media messages.
    ///
    /// Returns the empty string if the message has neither.
    pub fn text(&self) -> &str {
        self.text
            .as_deref()
            .or(self.caption.as_deref())
            .unwrap_or_default()
    }

    /// Whether this message was forwarded from somewhere else.
    pub fn is_forwarded(&self) -> bool {
        self.forward_origin.is_some()
    }

    /// Whether the message was sent by a bot (including this one).
    pub fn is_from_bot(&self) -> bool {
        self.from.as_ref().is_some_and(|user| user.is_bot)
    }

    /// The largest available size of the photo, if the message contains one.
    pub fn largest_photo(&self) -> Option<&PhotoSize> {
        self.photo
            .as_ref()?
            .iter()
            .max_by_key(|size| u64::from(size.width) * u64::from(size.height))
    }
}

/// One special entity in a text message. For example, hashtags, usernames, URLs, etc.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntity {
    /// Type of the entity, such as `mention`, `bold` or `text_link`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Offset in UTF-16 code units to the start of the entity.
    pub offset: u32,
    /// Length of the entity in UTF-16 code units.
    pub length: u32,
    /// For `text_link` only, URL that will be opened after user taps on the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// For `text_mention` only, the mentioned user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// For `pre` only, the programming language of the entity text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<String>,
}

impl MessageEntity {
    /// Extracts the text this entity covers from the message text.
    ///
    /// Offsets are expressed in UTF-16 code units, so this cannot simply slice the string.
    pub fn extract<'a>(&self, text: &'a str) -> Option<&'a str> {
        let start = self.offset as usize;
        let end = start + self.length as usize;

        let mut units = 0;
        let mut start_byte = None;
        let mut end_byte = None;
        for (byte, c) in text.char_indices() {
            if units == start {
                start_byte = Some(byte);
            }
            if units == end {
                end_byte = Some(byte);
                break;
            }
            units += c.len_utf16();
        }
        if units == end && end_byte.is_none() {
            end_byte = Some(text.len());
        }
        if start == end && start_byte.is_none() {
            start_byte = end_byte;
        }

        text.get(start_byte?..end_byte?)
    }
}
