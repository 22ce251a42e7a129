// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::RemoteCall;
use crate::types::{
    ChatId, InlineKeyboardMarkup, InputMedia, Message, MessageEntity, ParseMode, Upload,
};
use serde::Serialize;

/// Send text messages.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendMessage {
    pub chat_id: ChatId,
    /// Text of the message to be sent, 1-4096 characters after entities parsing.
    pub text: String,
    /// Unique identifier for the target message thread (topic) of the forum; for forum supergroups only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    /// Special entities that appear in message text, which can be specified instead of `parse_mode`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
    /// Sends the message silently. Users will receive a notification with no sound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl SendMessage {
    pub fn new<C: Into<ChatId>, T: Into<String>>(chat_id: C, text: T) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            message_thread_id: None,
            parse_mode: None,
            entities: None,
            disable_notification: None,
            reply_markup: None,
        }
    }

    pub fn parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }

    pub fn silent(mut self) -> Self {
        self.disable_notification = Some(true);
        self
    }

    pub fn reply_markup(mut self, markup: InlineKeyboardMarkup) -> Self {
        self.reply_markup = Some(markup);
        self
    }
}

impl RemoteCall for SendMessage {
    const METHOD: &'static str = "sendMessage";
    type Return = Message;
}

/// Send a group of photos, videos, documents or audios as an album.
///
/// Documents and audio files can be only grouped in an album with messages of the same type.
/// Between 2 and 10 items must be sent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendMediaGroup {
    pub chat_id: ChatId,
    pub media: Vec<InputMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
}

impl SendMediaGroup {
    pub fn new<C: Into<ChatId>>(chat_id: C, media: impl IntoIterator<Item = InputMedia>) -> Self {
        Self {
            chat_id: chat_id.into(),
            media: media.into_iter().collect(),
            message_thread_id: None,
            disable_notification: None,
        }
    }
}

impl RemoteCall for SendMediaGroup {
    const METHOD: &'static str = "sendMediaGroup";
    type Return = Vec<Message>;

    fn uploads(&self) -> Vec<&Upload> {
        self.media
            .iter()
            .filter_map(|media| media.media().as_upload())
            .collect()
    }
}

/// The new position of a live location, shared by both live location edits.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LiveLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// New period in seconds during which the location can be updated, starting from the
    /// message send date.
    ///
    /// If [`Self::FOREVER`] is specified, then the location can be updated forever.
    /// Otherwise, the new value must not exceed the current `live_period` by more than a day,
    /// and the live location expiration date must remain within the next 90 days. If not
    /// specified, then `live_period` remains unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_period: Option<u32>,
    /// The radius of uncertainty for the location, measured in meters; 0-1500.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,
    /// Direction in which the user is moving, in degrees. Must be between 1 and 360 if specified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<u16>,
    /// The maximum distance for proximity alerts about approaching another chat member, in
    /// meters. Must be between 1 and 100000 if specified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity_alert_radius: Option<u32>,
}

impl LiveLocation {
    /// Live period that never expires.
    pub const FOREVER: u32 = 0x7FFFFFFF;

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            live_period: None,
            horizontal_accuracy: None,
            heading: None,
            proximity_alert_radius: None,
        }
    }

    pub fn live_period(mut self, seconds: u32) -> Self {
        self.live_period = Some(seconds);
        self
    }

    pub fn horizontal_accuracy(mut self, meters: f64) -> Self {
        self.horizontal_accuracy = Some(meters);
        self
    }

    pub fn heading(mut self, degrees: u16) -> Self {
        self.heading = Some(degrees);
        self
    }

    pub fn proximity_alert_radius(mut self, meters: u32) -> Self {
        self.proximity_alert_radius = Some(meters);
        self
    }
}

/// Edit a live location message sent by the bot.
///
/// A location can be edited until its `live_period` expires or editing is explicitly
/// disabled by stopping the live location.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EditMessageLiveLocation {
    pub chat_id: ChatId,
    pub message_id: i32,
    #[serde(flatten)]
    pub location: LiveLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    /// Unique identifier of the business connection on behalf of which the message to be
    /// edited was sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_connection_id: Option<String>,
}

impl EditMessageLiveLocation {
    pub fn new<C: Into<ChatId>>(chat_id: C, message_id: i32, location: LiveLocation) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
            location,
            reply_markup: None,
            business_connection_id: None,
        }
    }
}

impl RemoteCall for EditMessageLiveLocation {
    const METHOD: &'static str = "editMessageLiveLocation";
    type Return = Message;
}

/// Edit a live location message sent via the bot in inline mode.
///
/// This uses the same endpoint as [`EditMessageLiveLocation`], but the API answers
/// with `true` instead of the edited message.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EditInlineMessageLiveLocation {
    pub inline_message_id: String,
    #[serde(flatten)]
    pub location: LiveLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_connection_id: Option<String>,
}

impl EditInlineMessageLiveLocation {
    pub fn new<S: Into<String>>(inline_message_id: S, location: LiveLocation) -> Self {
        Self {
            inline_message_id: inline_message_id.into(),
            location,
            reply_markup: None,
            business_connection_id: None,
        }
    }
}

impl RemoteCall for EditInlineMessageLiveLocation {
    const METHOD: &'static str = "editMessageLiveLocation";
    type Return = bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InputFile, InputMediaPhoto};

    #[test]
    fn check_inline_live_location_fields() {
        let request = EditInlineMessageLiveLocation::new(
            "AAEAAQ",
            LiveLocation::new(52.37, 4.89)
                .live_period(LiveLocation::FOREVER)
                .heading(90),
        );

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "inline_message_id": "AAEAAQ",
                "latitude": 52.37,
                "longitude": 4.89,
                "live_period": 2147483647,
                "heading": 90,
            })
        );
    }

    #[test]
    fn check_media_group_uploads() {
        let request = SendMediaGroup::new(
            -100123,
            [
                InputMedia::from(InputMediaPhoto::new(InputFile::upload(
                    "first",
                    "a.jpg",
                    vec![0xff, 0xd8],
                ))),
                InputMedia::from(InputMediaPhoto::new(InputFile::file_id("AgACAgQ"))),
                InputMedia::from(InputMediaPhoto::new(InputFile::upload(
                    "third",
                    "c.jpg",
                    vec![0xff, 0xd8],
                ))),
            ],
        );

        let names = request
            .uploads()
            .into_iter()
            .map(|upload| upload.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["first", "third"]);
    }

    #[test]
    fn check_send_message_chat_username() {
        let request = SendMessage::new("@botgram", "hi").silent();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "chat_id": "@botgram",
                "text": "hi",
                "disable_notification": true,
            })
        );
    }
}
