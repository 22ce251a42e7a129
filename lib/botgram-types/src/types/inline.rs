// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Inline mode, callback queries and the inline keyboards that trigger them.

use super::{Location, Message, User};
use serde::{Deserialize, Serialize};

/// An incoming inline query, produced when a user types `@bot query`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQuery {
    pub id: String,
    pub from: User,
    /// Text of the query (up to 256 characters).
    pub query: String,
    /// Offset of the results to be returned, can be controlled by the bot.
    pub offset: String,
    /// Type of the chat from which the inline query was sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_type: Option<String>,
    /// Sender location, only for bots that request user location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// A result of an inline query that was chosen by the user and sent to their chat partner.
///
/// It is necessary to enable [inline feedback](https://core.telegram.org/bots/inline#collecting-feedback)
/// via @BotFather in order to receive these objects in updates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChosenInlineResult {
    /// The unique identifier for the result that was chosen.
    pub result_id: String,
    /// The user that chose the result.
    pub from: User,
    /// Sender location, only for bots that require user location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Identifier of the sent inline message.
    ///
    /// Available only if there is an inline keyboard attached to the message. Will be also
    /// received in callback queries and can be used to edit the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
    /// The query that was used to obtain the result.
    pub query: String,
}

/// Occurs when a button with callback data in an inline keyboard is pressed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    /// Message sent by the bot with the callback button that originated the query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Box<Message>>,
    /// Identifier of the message sent via the bot in inline mode, that originated the query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
    /// Global identifier, uniquely corresponding to the chat to which the message
    /// with the callback button was sent.
    pub chat_instance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_short_name: Option<String>,
}

/// An inline keyboard that appears right next to the message it belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    /// Creates a keyboard from rows of buttons.
    pub fn new<R: IntoIterator<Item = InlineKeyboardButton>>(
        rows: impl IntoIterator<Item = R>,
    ) -> Self {
        Self {
            inline_keyboard: rows
                .into_iter()
                .map(|row| row.into_iter().collect())
                .collect(),
        }
    }

    /// Appends a new row with the given buttons at the bottom of the keyboard.
    pub fn row(mut self, buttons: impl IntoIterator<Item = InlineKeyboardButton>) -> Self {
        self.inline_keyboard.push(buttons.into_iter().collect());
        self
    }
}

/// One button of an inline keyboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(flatten)]
    pub action: ButtonAction,
}

/// What happens when an [`InlineKeyboardButton`] is pressed.
///
/// Exactly one of these must be used per button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonAction {
    Url(String),
    CallbackData(String),
    SwitchInlineQuery(String),
    SwitchInlineQueryCurrentChat(String),
    // The following are only kept so that received keyboards can be decoded.
    WebApp(serde_json::Value),
    LoginUrl(serde_json::Value),
    SwitchInlineQueryChosenChat(serde_json::Value),
    CopyText(serde_json::Value),
    CallbackGame(serde_json::Value),
    Pay(bool),
}

impl InlineKeyboardButton {
    /// Creates a button that will trigger a [`CallbackQuery`] when clicked.
    ///
    /// The data [is limited](https://core.telegram.org/bots/api#inlinekeyboardbutton) to
    /// 64 bytes. If you need to store more data than that, consider storing the real data
    /// in some form of database, and a reference to that data's row in the button's payload.
    pub fn callback<T: Into<String>, D: Into<String>>(text: T, data: D) -> Self {
        Self {
            text: text.into(),
            action: ButtonAction::CallbackData(data.into()),
        }
    }

    /// Creates a button that when clicked will open the specified URL.
    pub fn url<T: Into<String>, U: Into<String>>(text: T, url: U) -> Self {
        Self {
            text: text.into(),
            action: ButtonAction::Url(url.into()),
        }
    }

    /// Creates a button to force the user to switch to inline mode in the current chat.
    ///
    /// Pressing the button will insert the bot's username and the specified inline query
    /// in the input field.
    pub fn switch<T: Into<String>, Q: Into<String>>(text: T, query: Q) -> Self {
        Self {
            text: text.into(),
            action: ButtonAction::SwitchInlineQueryCurrentChat(query.into()),
        }
    }

    /// Like [`Self::switch`], except the user will be prompted to select a different chat.
    pub fn switch_elsewhere<T: Into<String>, Q: Into<String>>(text: T, query: Q) -> Self {
        Self {
            text: text.into(),
            action: ButtonAction::SwitchInlineQuery(query.into()),
        }
    }
}
