// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{CallbackQuery, ChosenInlineResult, InlineQuery, Message};
use log::warn;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An incoming update.
///
/// Update identifiers start from a certain positive number and increase sequentially.
/// At most one of the optional payloads can be present in any given update, which is
/// why the payload is represented by [`UpdateKind`].
#[derive(Clone, Debug, PartialEq)]
pub struct Update {
    /// The update's unique identifier (`update_id`).
    pub id: i64,
    pub kind: UpdateKind,
}

/// The payload of an [`Update`].
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateKind {
    /// New incoming message of any kind: text, photo, sticker, etc.
    Message(Message),
    /// New version of a message that is known to the bot and was edited.
    EditedMessage(Message),
    /// New incoming channel post of any kind.
    ChannelPost(Message),
    /// New version of a channel post that is known to the bot and was edited.
    EditedChannelPost(Message),
    InlineQuery(InlineQuery),
    ChosenInlineResult(ChosenInlineResult),
    CallbackQuery(CallbackQuery),
    /// Any other payload, kept as-is.
    ///
    /// The `kind` is the name of the field the payload was received in, such as `poll`.
    Other {
        kind: String,
        raw: serde_json::Value,
    },
}

impl UpdateKind {
    /// Decodes the payload sent in `field`.
    ///
    /// Known payloads that fail to decode, such as a message using a newer kind of
    /// origin, are kept as [`UpdateKind::Other`] so that the rest of the batch survives.
    fn from_field(field: String, raw: serde_json::Value) -> Self {
        let decoded = match field.as_str() {
            "message" => Message::deserialize(&raw).map(Self::Message),
            "edited_message" => Message::deserialize(&raw).map(Self::EditedMessage),
            "channel_post" => Message::deserialize(&raw).map(Self::ChannelPost),
            "edited_channel_post" => Message::deserialize(&raw).map(Self::EditedChannelPost),
            "inline_query" => InlineQuery::deserialize(&raw).map(Self::InlineQuery),
            "chosen_inline_result" => {
                ChosenInlineResult::deserialize(&raw).map(Self::ChosenInlineResult)
            }
            "callback_query" => CallbackQuery::deserialize(&raw).map(Self::CallbackQuery),
            _ => return Self::Other { kind: field, raw },
        };

        decoded.unwrap_or_else(|err| {
            warn!("failed to decode {field} payload, keeping it raw: {err}");
            Self::Other { kind: field, raw }
        })
    }

    /// Name of the field the payload is sent in.
    pub fn field_name(&self) -> &str {
        match self {
            Self::Message(_) => "message",
            Self::EditedMessage(_) => "edited_message",
            Self::ChannelPost(_) => "channel_post",
            Self::EditedChannelPost(_) => "edited_channel_post",
            Self::InlineQuery(_) => "inline_query",
            Self::ChosenInlineResult(_) => "chosen_inline_result",
            Self::CallbackQuery(_) => "callback_query",
            Self::Other { kind, .. } => kind.as_str(),
        }
    }
}

impl Update {
    /// The type of this update, as it would be listed in `allowed_updates`.
    ///
    /// Returns `None` for payloads this library doesn't know about.
    pub fn update_type(&self) -> Option<UpdateType> {
        self.kind.field_name().parse().ok()
    }

    /// The message contained in this update, if any (including edits and channel posts).
    pub fn message(&self) -> Option<&Message> {
        match &self.kind {
            UpdateKind::Message(message)
            | UpdateKind::EditedMessage(message)
            | UpdateKind::ChannelPost(message)
            | UpdateKind::EditedChannelPost(message) => Some(message),
            UpdateKind::CallbackQuery(query) => query.message.as_deref(),
            _ => None,
        }
    }
}

impl Serialize for Update {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("update_id", &self.id)?;
        let field = self.kind.field_name();
        match &self.kind {
            UpdateKind::Message(message)
            | UpdateKind::EditedMessage(message)
            | UpdateKind::ChannelPost(message)
            | UpdateKind::EditedChannelPost(message) => map.serialize_entry(field, message)?,
            UpdateKind::InlineQuery(query) => map.serialize_entry(field, query)?,
            UpdateKind::ChosenInlineResult(result) => map.serialize_entry(field, result)?,
            UpdateKind::CallbackQuery(query) => map.serialize_entry(field, query)?,
            UpdateKind::Other { raw, .. } => map.serialize_entry(field, raw)?,
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Update {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;

        let id = fields
            .remove("update_id")
            .ok_or_else(|| <D::Error as de::Error>::missing_field("update_id"))?;
        let id = i64::deserialize(id).map_err(<D::Error as de::Error>::custom)?;

        let (field, raw) = fields
            .into_iter()
            .next()
            .ok_or_else(|| {
                <D::Error as de::Error>::custom(format_args!("update {id} carries no payload"))
            })?;
        Ok(Self {
            id,
            kind: UpdateKind::from_field(field, raw),
        })
    }
}

/// The types of update a bot can subscribe to through `allowed_updates`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateType {
    Message,
    EditedMessage,
    ChannelPost,
    EditedChannelPost,
    BusinessConnection,
    BusinessMessage,
    EditedBusinessMessage,
    DeletedBusinessMessages,
    MessageReaction,
    MessageReactionCount,
    InlineQuery,
    ChosenInlineResult,
    CallbackQuery,
    ShippingQuery,
    PreCheckoutQuery,
    PurchasedPaidMedia,
    Poll,
    PollAnswer,
    MyChatMember,
    ChatMember,
    ChatJoinRequest,
    ChatBoost,
    RemovedChatBoost,
}

impl UpdateType {
    /// Every known update type, in the order the API documents them.
    pub const ALL: [UpdateType; 23] = [
        Self::Message,
        Self::EditedMessage,
        Self::ChannelPost,
        Self::EditedChannelPost,
        Self::BusinessConnection,
        Self::BusinessMessage,
        Self::EditedBusinessMessage,
        Self::DeletedBusinessMessages,
        Self::MessageReaction,
        Self::MessageReactionCount,
        Self::InlineQuery,
        Self::ChosenInlineResult,
        Self::CallbackQuery,
        Self::ShippingQuery,
        Self::PreCheckoutQuery,
        Self::PurchasedPaidMedia,
        Self::Poll,
        Self::PollAnswer,
        Self::MyChatMember,
        Self::ChatMember,
        Self::ChatJoinRequest,
        Self::ChatBoost,
        Self::RemovedChatBoost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::EditedMessage => "edited_message",
            Self::ChannelPost => "channel_post",
            Self::EditedChannelPost => "edited_channel_post",
            Self::BusinessConnection => "business_connection",
            Self::BusinessMessage => "business_message",
            Self::EditedBusinessMessage => "edited_business_message",
            Self::DeletedBusinessMessages => "deleted_business_messages",
            Self::MessageReaction => "message_reaction",
            Self::MessageReactionCount => "message_reaction_count",
            Self::InlineQuery => "inline_query",
            Self::ChosenInlineResult => "chosen_inline_result",
            Self::CallbackQuery => "callback_query",
            Self::ShippingQuery => "shipping_query",
            Self::PreCheckoutQuery => "pre_checkout_query",
            Self::PurchasedPaidMedia => "purchased_paid_media",
            Self::Poll => "poll",
            Self::PollAnswer => "poll_answer",
            Self::MyChatMember => "my_chat_member",
            Self::ChatMember => "chat_member",
            Self::ChatJoinRequest => "chat_join_request",
            Self::ChatBoost => "chat_boost",
            Self::RemovedChatBoost => "removed_chat_boost",
        }
    }
}

impl fmt::Display for UpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The string did not name any known [`UpdateType`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateTypeParseError(pub String);

impl std::error::Error for UpdateTypeParseError {}

impl fmt::Display for UpdateTypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown update type: {}", self.0)
    }
}

impl FromStr for UpdateType {
    type Err = UpdateTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| UpdateTypeParseError(s.to_string()))
    }
}
